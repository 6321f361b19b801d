//! Parsing a token slice instead of text.

use descent::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Num(i64),
    Plus,
    Minus,
    LParen,
    RParen,
}

impl std::fmt::Display for Tok {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::LParen => f.write_str("("),
            Tok::RParen => f.write_str(")"),
        }
    }
}

impl IntoSeq for Tok {
    type Seq = Vec<Tok>;
    fn into_seq(self) -> Vec<Tok> {
        vec![self]
    }
}

impl IntoList<Tok> for Tok {
    fn into_list(self) -> Vec<Tok> {
        vec![self]
    }
}

fn num(s: &[Tok]) -> Reply<&[Tok], i64> {
    is(|t: &Tok| matches!(t, Tok::Num(_)))
        .bind(|t: Tok| match t {
            Tok::Num(n) => n,
            _ => 0,
        })
        .parse(s)
}

fn atom(s: &[Tok]) -> Reply<&[Tok], i64> {
    Char(Tok::LParen).right(expr).left(Char(Tok::RParen)).or(num).parse(s)
}

fn expr(s: &[Tok]) -> Reply<&[Tok], i64> {
    let plus = Char(Tok::Plus).right(atom).bind(|n: i64| vec![n]);
    let minus = Char(Tok::Minus).right(atom).bind(|n: i64| vec![-n]);
    bind(atom, |n: i64| vec![n])
        .and(plus.or(minus).zero_or_more())
        .bind(|ns: Vec<i64>| ns.iter().sum::<i64>())
        .parse(s)
}

#[test]
fn arithmetic_over_tokens() {
    use Tok::*;
    let toks = [Num(1), Plus, LParen, Num(5), Minus, Num(2), RParen, Minus, Num(3)];
    assert_eq!(parse_all(&expr, &toks[..]), Ok(1));
}

#[test]
fn token_mismatch_names_token() {
    use Tok::*;
    let toks = [LParen, Num(1), Plus];
    // The inner `expr` stops before `+`, so `)` is missing and the whole atom backtracks.
    let reply = expr(&toks);
    assert_eq!(reply.message().as_deref(), Some("( not matched"));

    let toks = [Plus];
    let reply = atom(&toks);
    assert_eq!(reply.message().as_deref(), Some("+ not matched"));
}

#[test]
fn tokens_concatenate_and_collect() {
    use Tok::*;
    let toks = [Minus, Num(4), Plus];
    let p = Char(Minus).and(Any);
    assert_eq!(p.parse(&toks[..]), Reply::ok(vec![Minus, Num(4)], &toks[2..]));

    let p = Any.collect(Any).collect(Any);
    assert_eq!(p.parse(&toks[..]), Reply::ok(toks.to_vec(), &[][..]));
}

#[test]
fn eof_on_tokens() {
    let toks = [Tok::Num(1)];
    let reply = Eof.parse(&toks[..]);
    assert_eq!(reply.message().as_deref(), Some("expected eof, but got: 1"));
}
