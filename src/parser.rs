pub mod choice;
pub mod collect;
pub mod item;
pub mod many;
pub mod prim;
pub mod then;

use crate::{
    input::Stream,
    parser::{
        choice::{Sum, Try},
        collect::Collect,
        many::{OneOrMore, ZeroOrMore},
        prim::RefParser,
        then::{Bind, DropFirst, DropSecond, Seq},
    },
    reply::Outcome,
};

/// Parser trait.
///
/// A parser is a reusable grammar description. [`Parser::parse`] is a pure function of the
/// parser and the stream it is given: nothing is remembered between calls, so one value can be
/// run any number of times, on any number of streams.
///
/// Most parsers produce a [`crate::reply::Reply`]. The parallel-diagnostic combinator
/// ([`ParserExt::sum`]) produces a [`crate::reply::Forked`] instead, which is why the outcome type
/// is left open here.
pub trait Parser<S: Stream> {
    type Out: Outcome;

    fn parse(&self, stream: S) -> Self::Out;
}

/// Builder methods for combining parsers.
///
/// None of them runs anything; they only wrap `self`. The stream type is fixed later, by the
/// [`Parser::parse`] call on the finished grammar.
///
/// Every parser type of this crate implements it. Implement it (the impl is empty) for your own
/// parser types to get the same methods. A `fn` item used as a parser has no methods; start such a
/// chain with the free constructor instead, e.g. [`then::bind`]`(term, f)`.
pub trait ParserExt: Sized {
    /// Run `self`, then `succ` on what is left, keeping only `succ`'s result.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Char('(').right(Digit).parse("(1");
    /// assert_eq!(reply.data(), Ok(&'1'));
    /// assert_eq!(*reply.rest(), "");
    /// ```
    fn right<Q>(self, succ: Q) -> DropFirst<Self, Q> {
        DropFirst::new(self, succ)
    }

    /// Run `self`, then `succ` on what is left, keeping `self`'s data and `succ`'s remainder.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Digit.left(Char(';')).parse("1;2");
    /// assert_eq!(reply.data(), Ok(&'1'));
    /// assert_eq!(*reply.rest(), "2");
    /// ```
    fn left<Q>(self, succ: Q) -> DropSecond<Self, Q> {
        DropSecond::new(self, succ)
    }

    /// Run `self`, then `succ`, and concatenate both payloads.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Char('a').and(Char('b')).parse("ab");
    /// assert_eq!(reply.data(), Ok(&"ab".to_string()));
    /// ```
    fn and<Q>(self, succ: Q) -> Seq<Self, Q> {
        Seq::new(self, succ)
    }

    /// Ordered choice: try `self`, and on failure try `succ` from the same starting point.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Char('a').or(Char('b')).parse("b");
    /// assert_eq!(reply.data(), Ok(&'b'));
    /// ```
    fn or<Q>(self, succ: Q) -> Try<Self, Q> {
        Try::new(self, succ)
    }

    /// Run `self` and `succ` independently on the same input and report both outcomes.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let forked = Digit.sum(Alpha).parse("5");
    /// assert_eq!(forked.success(), (true, false));
    /// ```
    fn sum<Q>(self, succ: Q) -> Sum<Self, Q> {
        Sum::new(self, succ)
    }

    /// Run `self`, then `succ`, gathering both payloads into a list.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Char('a').collect(Char('b')).collect(Char('c')).parse("abc");
    /// assert_eq!(reply.data(), Ok(&vec!['a', 'b', 'c']));
    /// ```
    fn collect<Q>(self, succ: Q) -> Collect<Self, Q> {
        Collect::new(self, succ)
    }

    /// Transform the payload of a successful parse.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Digit.bind(|c: char| c.to_digit(10)).parse("7");
    /// assert_eq!(reply.data(), Ok(&Some(7)));
    /// ```
    fn bind<F>(self, f: F) -> Bind<Self, F> {
        Bind::new(self, f)
    }

    /// Repeat `self` as often as it matches, possibly zero times.
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        ZeroOrMore::new(self)
    }

    /// Repeat `self` as often as it matches, at least once.
    fn one_or_more(self) -> OneOrMore<Self> {
        OneOrMore::new(self)
    }

    /// Borrow this parser so it can be placed in several grammars without being moved.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let number = Digit.one_or_more();
    /// let pair = number.by_ref().left(Char(',')).and(number.by_ref());
    /// assert_eq!(pair.parse("12,34").data(), Ok(&"1234".to_string()));
    /// assert_eq!(number.parse("5").data(), Ok(&"5".to_string()));
    /// ```
    fn by_ref(&self) -> RefParser<'_, Self> {
        RefParser(self)
    }
}

macro_rules! parser_ext {
    ($($ty:ty => [$($g:tt)*]),* $(,)?) => {$(
        impl<$($g)*> ParserExt for $ty {}
    )*};
}

parser_ext!(
    prim::Any => [],
    prim::Eof => [],
    prim::Const<O> => [O],
    prim::Fail<O> => [O],
    prim::RefParser<'a, P> => ['a, P: ?Sized],
    item::Is<F> => [F],
    item::Char<T> => [T],
    crate::char::Space => [],
    crate::char::Digit => [],
    crate::char::Alpha => [],
    DropFirst<P, Q> => [P, Q],
    DropSecond<P, Q> => [P, Q],
    Seq<P, Q> => [P, Q],
    Bind<P, F> => [P, F],
    Try<P, Q> => [P, Q],
    Sum<P, Q> => [P, Q],
    Collect<P, Q> => [P, Q],
    ZeroOrMore<P> => [P],
    OneOrMore<P> => [P],
);
