use descent::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn drop_first_keeps_second() {
    let p = Char('$').right(Digit);
    assert_eq!(p.parse("$5!"), Reply::ok('5', "!"));
}

#[test]
fn drop_first_propagates_first_failure() {
    let reply = Char('$').right(Digit).parse("x5");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('x')));
    assert_eq!(*reply.rest(), "5");
}

#[test]
fn drop_first_returns_second_failure_verbatim() {
    let reply = drop_first(Char('$'), Digit).parse("$x");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('x')));
    assert_eq!(*reply.rest(), "");
}

#[test]
fn drop_second_keeps_first_data_and_second_rest() {
    let p = Digit.left(Char(';'));
    assert_eq!(p.parse("1;2"), Reply::ok('1', "2"));
}

#[test]
fn drop_second_discards_first_data_on_second_failure() {
    let reply = drop_second(Digit, Char(';')).parse("12");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('2')));
    assert_eq!(*reply.rest(), "");

    let reply = drop_second(Digit, Char(';')).parse("1");
    assert_eq!(reply.data(), Err(&ParseError::UnexpectedEof));
}

#[test]
fn seq_concatenates() {
    let reply = Char('a').and(Char('b')).parse("ab");
    assert_eq!(reply, Reply::ok("ab".to_string(), ""));
}

#[test]
fn seq_mismatch_keeps_progress() {
    let reply = Char('a').and(Char('b')).parse("ac");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('c')));
    assert_eq!(*reply.rest(), "");
}

#[test]
fn seq_chains_strings_and_chars() {
    let p = seq(Digit.one_or_more(), Char('.')).and(Digit.one_or_more());
    assert_eq!(p.parse("3.14 rest"), Reply::ok("3.14".to_string(), " rest"));
}

#[test]
fn seq_with_eof_adds_nothing() {
    let p = Alpha.one_or_more().and(Eof);
    assert_eq!(p.parse("abc"), Reply::ok("abc".to_string(), ""));
    assert_eq!(p.parse("ab1").message().as_deref(), Some("expected eof, but got: 1"));
}

#[test]
fn bind_maps_success_only() {
    let p = Digit.bind(|c: char| c.to_digit(10).unwrap_or(0) * 2);
    assert_eq!(p.parse("4x"), Reply::ok(8, "x"));

    let reply = p.parse("x");
    assert_eq!(reply.data(), Err(&ParseError::NotMatched('x')));
    assert_eq!(*reply.rest(), "");
}

#[test]
fn bind_changes_payload_type() {
    let p = bind(Alpha.one_or_more(), |s: String| s.len());
    assert_eq!(p.parse("abc1"), Reply::ok(3usize, "1"));
}

#[test]
fn built_grammar_runs_on_any_stream() {
    let p = Digit.right(Alpha).left(Eof);
    assert_eq!(p.parse("1a"), Reply::ok('a', ""));
    let bytes: &[u8] = b"1a";
    assert_eq!(p.parse(bytes), Reply::ok(b'a', &b""[..]));
}
