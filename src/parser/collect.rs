//! List accumulation.

use crate::{input::Stream, parser::Parser, reply::Reply, traits::IntoList};

/// Run `pred` then `succ`, producing a list.
///
/// `pred`'s payload is coerced with [`IntoList`]: a list is extended, a scalar starts a new list.
/// `succ`'s payload is appended as the last element. Chaining `collect` therefore grows one flat
/// list. If either parser fails, its failure is returned and nothing collected so far survives.
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Char('a').collect(Char('b')).parse("ab");
/// assert_eq!(reply.data(), Ok(&vec!['a', 'b']));
/// assert_eq!(*reply.rest(), "");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Collect<P, Q> {
    pred: P,
    succ: Q,
}
impl<P, Q> Collect<P, Q> {
    pub fn new(pred: P, succ: Q) -> Self {
        Collect { pred, succ }
    }
}

/// Create a [`Collect`] combinator.
pub fn collect<P, Q>(pred: P, succ: Q) -> Collect<P, Q> {
    Collect::new(pred, succ)
}

impl<S, P, Q, A, B> Parser<S> for Collect<P, Q>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, A>>,
    Q: Parser<S, Out = Reply<S, B>>,
    A: IntoList<B>,
{
    type Out = Reply<S, Vec<B>>;

    fn parse(&self, stream: S) -> Self::Out {
        let (first, rest) = self.pred.parse(stream).into_parts();
        let first = match first {
            Ok(first) => first,
            Err(e) => return Reply::err(e, rest),
        };
        self.succ.parse(rest).map(|last| {
            let mut list = first.into_list();
            list.push(last);
            tracing::trace!(len = list.len(), "collected");
            list
        })
    }
}
