//! Repetition combinators.
//!
//! Both combinators run their child repeatedly, each time on the remainder of the previous
//! match, concatenating the payloads (see [`crate::traits::Concat`]). The loop stops when:
//!
//! - the child fails (its failure is discarded, the remainder stays at the last match),
//! - the remainder becomes empty, or
//! - the child succeeds without consuming anything. Its payload is still kept, but another
//!   round would match the same way forever.
//!
//! Each round gets a fresh [`Reply`]; nothing is carried between calls to `parse`.

use crate::{
    error::ParseError,
    input::Stream,
    parser::Parser,
    reply::Reply,
    traits::{Concat, IntoSeq},
};

fn repeat<S, P, A>(parser: &P, stream: S) -> (A::Seq, usize, S)
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>> + ?Sized,
    A: IntoSeq,
{
    let mut acc = <A::Seq as Concat>::empty();
    let mut count = 0usize;
    let mut rest = stream;
    loop {
        let (data, next) = parser.parse(rest.clone()).into_parts();
        let Ok(data) = data else {
            tracing::trace!(count, "repetition stopped: no further match");
            break;
        };
        acc = acc.concat(data.into_seq());
        count += 1;
        let stalled = next.extent() >= rest.extent();
        rest = next;
        if rest.is_empty() {
            tracing::trace!(count, "repetition stopped: input exhausted");
            break;
        }
        if stalled {
            tracing::trace!(count, "repetition stopped: match consumed nothing");
            break;
        }
    }
    (acc, count, rest)
}

/// Match a parser zero or more times. Never fails.
///
/// ```
/// use descent::prelude::*;
///
/// let digits = Digit.zero_or_more();
/// let reply = digits.parse("123abc");
/// assert_eq!(reply.data(), Ok(&"123".to_string()));
/// assert_eq!(*reply.rest(), "abc");
///
/// let reply = digits.parse("abc");
/// assert_eq!(reply.data(), Ok(&String::new()));
/// assert_eq!(*reply.rest(), "abc");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ZeroOrMore<P>(P);
impl<P> ZeroOrMore<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrMore(parser)
    }
}

/// Create a [`ZeroOrMore`] combinator.
pub fn zero_or_more<P>(parser: P) -> ZeroOrMore<P> {
    ZeroOrMore::new(parser)
}

impl<S, P, A> Parser<S> for ZeroOrMore<P>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    A: IntoSeq,
{
    type Out = Reply<S, A::Seq>;

    fn parse(&self, stream: S) -> Self::Out {
        let (acc, _, rest) = repeat(&self.0, stream);
        Reply::ok(acc, rest)
    }
}

/// Match a parser one or more times.
///
/// If the first attempt fails, the result is [`ParseError::NoMatches`] with the original stream
/// as remainder; the child's own failure is not reported.
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Digit.one_or_more().parse("abc");
/// assert_eq!(reply.message().as_deref(), Some("no matches found"));
/// assert_eq!(*reply.rest(), "abc");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OneOrMore<P>(P);
impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore(parser)
    }
}

/// Create a [`OneOrMore`] combinator.
pub fn one_or_more<P>(parser: P) -> OneOrMore<P> {
    OneOrMore::new(parser)
}

impl<S, P, A> Parser<S> for OneOrMore<P>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    A: IntoSeq,
{
    type Out = Reply<S, A::Seq>;

    fn parse(&self, stream: S) -> Self::Out {
        match repeat(&self.0, stream) {
            (_, 0, rest) => Reply::err(ParseError::NoMatches, rest),
            (acc, _, rest) => Reply::ok(acc, rest),
        }
    }
}
