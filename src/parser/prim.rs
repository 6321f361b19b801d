//! Leaf parsers and parser adapters.
//!
//! Leaves look at the stream directly:
//!
//! - [`Any`] consumes exactly one item.
//! - [`Eof`] asserts that nothing is left.
//! - [`Const`] consumes nothing and yields a fixed value; [`Fail`] consumes nothing and fails.
//!
//! This module also provides:
//! - A blanket impl so functions and closures `Fn(S) -> Reply<S, O>` act as parsers. This is how
//!   recursive grammars are written: a `fn` item can refer to itself.
//! - The borrow adapter [`RefParser`] for [`crate::parser::ParserExt::by_ref`].

use ::std::{borrow::Cow, fmt, marker::PhantomData};

use crate::{error::ParseError, input::Stream, parser::Parser, reply::Reply};

impl<S, O, F> Parser<S> for F
where
    S: Stream,
    F: Fn(S) -> Reply<S, O>,
{
    type Out = Reply<S, O>;
    fn parse(&self, stream: S) -> Self::Out {
        self(stream)
    }
}

/// Borrow adapter that turns `&P` into a parser.
///
/// Constructed by [`crate::parser::ParserExt::by_ref`].
pub struct RefParser<'a, P: ?Sized>(pub(crate) &'a P);
impl<'a, P: ?Sized> Clone for RefParser<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, P: ?Sized> Copy for RefParser<'a, P> {}

impl<'a, S: Stream, P: Parser<S> + ?Sized> Parser<S> for RefParser<'a, P> {
    type Out = P::Out;
    fn parse(&self, stream: S) -> Self::Out {
        self.0.parse(stream)
    }
}

/// Consume any single item.
///
/// - On success, the data is the consumed item and the remainder is everything after it.
/// - On an empty stream, fails with [`ParseError::UnexpectedEof`]; the remainder is the (empty)
///   stream.
///
/// ## Examples
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Any.parse("ab");
/// assert_eq!(reply.data(), Ok(&'a'));
/// assert_eq!(*reply.rest(), "b");
///
/// let reply = Any.parse("");
/// assert_eq!(reply.message().as_deref(), Some("unexpected eof"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Any;

impl<S: Stream> Parser<S> for Any {
    type Out = Reply<S, S::Item>;

    fn parse(&self, stream: S) -> Self::Out {
        match stream.split_first() {
            Some((item, rest)) => Reply::ok(item, rest),
            None => Reply::err(ParseError::UnexpectedEof, stream),
        }
    }
}

/// Expect end of input.
///
/// The data of a successful parse is the (empty) stream itself, so `Eof` can be concatenated
/// like any other piece of input. On failure the stream is left untouched and the error names the
/// item that was found instead.
///
/// ## Examples
///
/// ```
/// use descent::prelude::*;
///
/// assert!(Eof.parse("").success());
///
/// let reply = Eof.parse("x");
/// assert_eq!(reply.message().as_deref(), Some("expected eof, but got: x"));
/// assert_eq!(*reply.rest(), "x");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Eof;

impl<S: Stream> Parser<S> for Eof {
    type Out = Reply<S, S>;

    fn parse(&self, stream: S) -> Self::Out {
        match stream.split_first() {
            None => Reply::ok(stream.clone(), stream),
            Some((item, _)) => Reply::err(ParseError::ExpectedEof(item), stream),
        }
    }
}

/// A parser that consumes nothing and yields a fixed value.
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Const(42).parse("abc");
/// assert_eq!(reply.data(), Ok(&42));
/// assert_eq!(*reply.rest(), "abc");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Const<O>(pub O);

/// Create a [`Const`] parser.
pub fn constant<O>(value: O) -> Const<O> {
    Const(value)
}

impl<S: Stream, O: Clone> Parser<S> for Const<O> {
    type Out = Reply<S, O>;

    fn parse(&self, stream: S) -> Self::Out {
        Reply::ok(self.0.clone(), stream)
    }
}

/// A parser that consumes nothing and always fails with a fixed message.
pub struct Fail<O> {
    msg: Cow<'static, str>,
    _out: PhantomData<fn() -> O>,
}
impl<O> Clone for Fail<O> {
    fn clone(&self) -> Self {
        Fail { msg: self.msg.clone(), _out: PhantomData }
    }
}
impl<O> fmt::Debug for Fail<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fail").field(&self.msg).finish()
    }
}

/// Create a [`Fail`] parser.
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Digit.or(fail("a digit")).parse("x");
/// assert_eq!(reply.message().as_deref(), Some("a digit"));
/// assert_eq!(*reply.rest(), "x");
/// ```
pub fn fail<O>(msg: impl Into<Cow<'static, str>>) -> Fail<O> {
    Fail { msg: msg.into(), _out: PhantomData }
}

impl<S: Stream, O> Parser<S> for Fail<O> {
    type Out = Reply<S, O>;

    fn parse(&self, stream: S) -> Self::Out {
        Reply::err(ParseError::Message(self.msg.clone()), stream)
    }
}
