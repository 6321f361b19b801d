//! Failure values.
//!
//! A failed parse carries a [`ParseError`] in-band, inside its [`crate::reply::Reply`]. The
//! `Display` output is the human-readable failure message; combinators pass failures through
//! untouched and never rewrite them.

use ::std::borrow::Cow;

use thiserror::Error;

/// Why a parse attempt failed.
///
/// `T` is the item type of the stream being parsed, so mismatches can name the offending item.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError<T> {
    /// The stream ran out while an item was required.
    #[error("unexpected eof")]
    UnexpectedEof,
    /// End of input was required but an item was left.
    #[error("expected eof, but got: {0}")]
    ExpectedEof(T),
    /// An item was consumed but rejected by a predicate.
    #[error("{0} not matched")]
    NotMatched(T),
    /// A one-or-more repetition did not match even once.
    #[error("no matches found")]
    NoMatches,
    /// Free-form message from [`crate::parser::prim::fail`].
    #[error("{0}")]
    Message(Cow<'static, str>),
}

impl<T> ParseError<T> {
    /// Build a free-form failure.
    pub fn message(msg: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Message(msg.into())
    }
}
