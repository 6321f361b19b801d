//! Branching combinators.
//!
//! - [`Try`] is ordered choice with full backtracking: the second alternative always starts from
//!   the stream the choice was given, whatever the first alternative consumed before failing.
//! - [`Sum`] is *not* a choice. It runs both alternatives on the same input and reports both
//!   outcomes in a [`Forked`], committing to neither.
//! - `Either<P, Q>` is a parser when both arms produce the same outcome. The branch is picked when
//!   the grammar is built, not while parsing.

use either::Either;

use crate::{
    input::Stream,
    parser::Parser,
    reply::{Forked, Reply},
};

/// Ordered choice between two parsers.
///
/// ```
/// use descent::prelude::*;
///
/// // `ab` consumes the `a` before failing on `c`; `ac` still sees the whole input.
/// let p = Char('a').and(Char('b')).or(Char('a').and(Char('c')));
/// assert_eq!(p.parse("ac").data(), Ok(&"ac".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Try<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> Try<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        Try { pred, succ }
    }
}

/// Create a [`Try`] combinator.
pub fn try_or<P, Q>(pred: P, succ: Q) -> Try<P, Q> {
    Try::new(pred, succ)
}

impl<S, P, Q, A> Parser<S> for Try<P, Q>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    Q: Parser<S, Out = Reply<S, A>>,
{
    type Out = Reply<S, A>;

    fn parse(&self, stream: S) -> Self::Out {
        let reply = self.pred.parse(stream.clone());
        if reply.success() {
            return reply;
        }
        tracing::trace!("first alternative failed, backtracking");
        self.succ.parse(stream)
    }
}

/// Run two parsers independently on the same input and keep both outcomes.
///
/// The outcome's status, data and remainder are pairs, one entry per branch, whether each branch
/// succeeded or not.
///
/// ```
/// use descent::prelude::*;
///
/// let forked = Digit.sum(Alpha).parse("5");
/// assert_eq!(forked.success(), (true, false));
/// assert_eq!(forked.rest(), (&"", &""));
/// assert_eq!(forked.right.message().as_deref(), Some("5 not matched"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sum<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> Sum<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        Sum { pred, succ }
    }
}

/// Create a [`Sum`] combinator.
pub fn sum<P, Q>(pred: P, succ: Q) -> Sum<P, Q> {
    Sum::new(pred, succ)
}

impl<S, P, Q> Parser<S> for Sum<P, Q>
where
    S: Stream,
    P: Parser<S>,
    Q: Parser<S>,
{
    type Out = Forked<P::Out, Q::Out>;

    fn parse(&self, stream: S) -> Self::Out {
        Forked { left: self.pred.parse(stream.clone()), right: self.succ.parse(stream) }
    }
}

impl<S, P, Q> Parser<S> for Either<P, Q>
where
    S: Stream,
    P: Parser<S>,
    Q: Parser<S, Out = P::Out>,
{
    type Out = P::Out;

    fn parse(&self, stream: S) -> Self::Out {
        match self {
            Either::Left(left) => left.parse(stream),
            Either::Right(right) => right.parse(stream),
        }
    }
}
