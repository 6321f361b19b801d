//! Sequential combinators.
//!
//! These run `pred` on the input, then `succ` on `pred`'s remainder. They do **not** backtrack:
//! the first failure is returned as-is, remainder included.
//!
//! | combinator     | keeps                              |
//! |----------------|------------------------------------|
//! | [`DropFirst`]  | `succ`'s data                      |
//! | [`DropSecond`] | `pred`'s data                      |
//! | [`Seq`]        | both, concatenated via [`Concat`]  |
//!
//! [`Bind`] is the single-parser transform: it maps a function over a successful payload.

use crate::{
    input::Stream,
    parser::Parser,
    reply::Reply,
    traits::{Concat, IntoSeq},
};

/// Run `pred` then `succ`, keeping `succ`'s result.
#[derive(Clone, Copy, Debug)]
pub struct DropFirst<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> DropFirst<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        DropFirst { pred, succ }
    }
}

/// Create a [`DropFirst`] combinator.
pub fn drop_first<P, Q>(pred: P, succ: Q) -> DropFirst<P, Q> {
    DropFirst::new(pred, succ)
}

impl<S, P, Q, A, B> Parser<S> for DropFirst<P, Q>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    Q: Parser<S, Out = Reply<S, B>>,
{
    type Out = Reply<S, B>;

    fn parse(&self, stream: S) -> Self::Out {
        let (data, rest) = self.pred.parse(stream).into_parts();
        match data {
            Ok(_) => self.succ.parse(rest),
            Err(e) => Reply::err(e, rest),
        }
    }
}

/// Run `pred` then `succ`, keeping `pred`'s data and `succ`'s remainder.
#[derive(Clone, Copy, Debug)]
pub struct DropSecond<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> DropSecond<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        DropSecond { pred, succ }
    }
}

/// Create a [`DropSecond`] combinator.
pub fn drop_second<P, Q>(pred: P, succ: Q) -> DropSecond<P, Q> {
    DropSecond::new(pred, succ)
}

impl<S, P, Q, A, B> Parser<S> for DropSecond<P, Q>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    Q: Parser<S, Out = Reply<S, B>>,
{
    type Out = Reply<S, A>;

    fn parse(&self, stream: S) -> Self::Out {
        let (first, rest) = self.pred.parse(stream).into_parts();
        let first = match first {
            Ok(first) => first,
            Err(e) => return Reply::err(e, rest),
        };
        let (second, rest) = self.succ.parse(rest).into_parts();
        match second {
            Ok(_) => Reply::ok(first, rest),
            Err(e) => Reply::err(e, rest),
        }
    }
}

/// Run `pred` then `succ`, concatenating both payloads.
///
/// Both payloads are lifted with [`IntoSeq`] and must land in the same [`Concat`] type, e.g. two
/// `char`s become a `String`, two tokens become a `Vec` of tokens.
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Char('a').and(Char('b')).parse("ac");
/// assert_eq!(reply.message().as_deref(), Some("c not matched"));
/// assert_eq!(*reply.rest(), "");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Seq<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> Seq<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        Seq { pred, succ }
    }
}

/// Create a [`Seq`] combinator.
pub fn seq<P, Q>(pred: P, succ: Q) -> Seq<P, Q> {
    Seq::new(pred, succ)
}

impl<S, P, Q, A, B> Parser<S> for Seq<P, Q>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    Q: Parser<S, Out = Reply<S, B>>,
    A: IntoSeq,
    B: IntoSeq<Seq = A::Seq>,
{
    type Out = Reply<S, A::Seq>;

    fn parse(&self, stream: S) -> Self::Out {
        let (first, rest) = self.pred.parse(stream).into_parts();
        let first = match first {
            Ok(first) => first,
            Err(e) => return Reply::err(e, rest),
        };
        self.succ.parse(rest).map(|second| first.into_seq().concat(second.into_seq()))
    }
}

/// Map a function over the payload of a successful parse.
///
/// Failures pass through unchanged. The function is assumed to be total.
#[derive(Clone, Copy, Debug)]
pub struct Bind<P, F> {
    parser: P,
    f: F,
}
impl<P, F> Bind<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Bind { parser, f }
    }
}

/// Create a [`Bind`] combinator.
///
/// ```
/// use descent::prelude::*;
///
/// let number = bind(Digit.one_or_more(), |s: String| s.parse::<u32>().unwrap_or_default());
/// assert_eq!(number.parse("42;").data(), Ok(&42));
/// ```
pub fn bind<P, F>(parser: P, f: F) -> Bind<P, F> {
    Bind::new(parser, f)
}

impl<S, P, F, A, B> Parser<S> for Bind<P, F>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    F: Fn(A) -> B,
{
    type Out = Reply<S, B>;

    fn parse(&self, stream: S) -> Self::Out {
        self.parser.parse(stream).map(&self.f)
    }
}
