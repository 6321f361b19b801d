//! Item-level predicate parsers.
//!
//! These consume exactly one item (via [`crate::parser::prim::Any`]) and then test it.
//!
//! ## Remainder on mismatch
//!
//! When the item is consumed but rejected, the failure still reports the remainder *after* the
//! rejected item. Combinators that backtrack (e.g. [`crate::parser::choice::Try`]) restart from
//! their own input, so this only shows up when inspecting a failed reply directly.
//!
//! ```
//! use descent::prelude::*;
//!
//! let reply = Char('a').parse("bc");
//! assert_eq!(reply.message().as_deref(), Some("b not matched"));
//! assert_eq!(*reply.rest(), "c");
//! ```

use crate::{
    error::ParseError,
    input::Stream,
    parser::{prim::Any, Parser},
    reply::Reply,
};

pub(crate) fn run_is<S: Stream>(stream: S, f: impl FnOnce(&S::Item) -> bool) -> Reply<S, S::Item> {
    let (data, rest) = Any.parse(stream).into_parts();
    match data {
        Ok(item) if f(&item) => Reply::ok(item, rest),
        Ok(item) => Reply::err(ParseError::NotMatched(item), rest),
        Err(e) => Reply::err(e, rest),
    }
}

/// Consume one item and require a predicate to hold for it.
///
/// ## Examples
///
/// ```
/// use descent::prelude::*;
///
/// let vowel = Is::new(|c: &char| "aeiou".contains(*c));
/// assert_eq!(vowel.parse("ab").data(), Ok(&'a'));
/// assert!(!vowel.parse("ba").success());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Is<F>(F);

impl<F> Is<F> {
    pub fn new(predicate: F) -> Self {
        Is(predicate)
    }
}

/// Create an [`Is`] parser.
pub fn is<F>(predicate: F) -> Is<F> {
    Is(predicate)
}

impl<S, F> Parser<S> for Is<F>
where
    S: Stream,
    F: Fn(&S::Item) -> bool,
{
    type Out = Reply<S, S::Item>;

    fn parse(&self, stream: S) -> Self::Out {
        run_is(stream, &self.0)
    }
}

/// Consume one item and require it to equal the given one.
///
/// Works on any stream whose item type is `T`, so it matches characters in text as well as
/// tokens in a token slice.
///
/// ## Examples
///
/// ```
/// use descent::prelude::*;
///
/// let reply = Char('a').parse("ab");
/// assert_eq!(reply.data(), Ok(&'a'));
/// assert_eq!(*reply.rest(), "b");
///
/// let bytes: &[u8] = b"+1";
/// assert_eq!(Char(b'+').parse(bytes).data(), Ok(&b'+'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Char<T>(pub T);

impl<S, T> Parser<S> for Char<T>
where
    S: Stream<Item = T>,
    T: Clone + PartialEq,
{
    type Out = Reply<S, T>;

    fn parse(&self, stream: S) -> Self::Out {
        run_is(stream, |item| *item == self.0)
    }
}
