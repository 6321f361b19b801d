//! The result protocol shared by every parser.
//!
//! A parse attempt produces a triple of *status*, *data* and *remainder*:
//!
//! - [`Reply`] is the ordinary shape: one success flag, the payload or a [`ParseError`], and the
//!   unconsumed suffix of the stream.
//! - [`Forked`] is the shape produced by [`crate::parser::choice::Sum`]: both branches' outcomes
//!   side by side, so each accessor returns a pair.
//!
//! [`Outcome`] abstracts over both so callers can read any result the same way.
//!
//! ## Remainder on failure
//!
//! On failure the remainder records how far the failing parser got. It is diagnostic only:
//! combinators that backtrack restart from the stream they were given, never from a failed
//! branch's remainder.

use ::std::fmt;

use crate::{error::ParseError, input::Stream};

/// Uniform read access to a parse result.
pub trait Outcome {
    /// `bool` for a [`Reply`], a pair of statuses for a [`Forked`].
    type Status;
    /// Borrowed payload-or-failure view.
    type Data<'a>
    where
        Self: 'a;
    /// Borrowed remainder view.
    type Rest<'a>
    where
        Self: 'a;

    fn success(&self) -> Self::Status;
    fn data(&self) -> Self::Data<'_>;
    fn rest(&self) -> Self::Rest<'_>;
}

/// Result of a single parse attempt.
pub struct Reply<S: Stream, O> {
    data: Result<O, ParseError<S::Item>>,
    rest: S,
}

impl<S: Stream, O> Reply<S, O> {
    /// A successful reply.
    pub fn ok(data: O, rest: S) -> Self {
        Reply { data: Ok(data), rest }
    }

    /// A failed reply. `rest` is where the failure was detected.
    pub fn err(error: ParseError<S::Item>, rest: S) -> Self {
        Reply { data: Err(error), rest }
    }

    /// A reply from an already-computed payload or failure.
    pub fn new(data: Result<O, ParseError<S::Item>>, rest: S) -> Self {
        Reply { data, rest }
    }

    /// Whether the parse matched.
    pub fn success(&self) -> bool {
        self.data.is_ok()
    }

    /// The payload on success, the failure otherwise.
    pub fn data(&self) -> Result<&O, &ParseError<S::Item>> {
        self.data.as_ref()
    }

    /// The unconsumed suffix of the stream.
    pub fn rest(&self) -> &S {
        &self.rest
    }

    /// The failure message, if this reply is a failure.
    pub fn message(&self) -> Option<String>
    where
        S::Item: fmt::Display,
    {
        self.data.as_ref().err().map(ToString::to_string)
    }

    /// Split into the payload-or-failure and the remainder.
    pub fn into_parts(self) -> (Result<O, ParseError<S::Item>>, S) {
        (self.data, self.rest)
    }

    /// Drop the remainder and keep only the payload or failure.
    pub fn into_result(self) -> Result<O, ParseError<S::Item>> {
        self.data
    }

    /// Transform the payload of a successful reply.
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Reply<S, U> {
        Reply { data: self.data.map(f), rest: self.rest }
    }
}

impl<S: Stream, O> Outcome for Reply<S, O> {
    type Status = bool;
    type Data<'a> = Result<&'a O, &'a ParseError<S::Item>> where Self: 'a;
    type Rest<'a> = &'a S where Self: 'a;

    fn success(&self) -> bool {
        Reply::success(self)
    }
    fn data(&self) -> Self::Data<'_> {
        Reply::data(self)
    }
    fn rest(&self) -> Self::Rest<'_> {
        Reply::rest(self)
    }
}

impl<S, O> Clone for Reply<S, O>
where
    S: Stream,
    O: Clone,
{
    fn clone(&self) -> Self {
        Reply { data: self.data.clone(), rest: self.rest.clone() }
    }
}

impl<S, O> fmt::Debug for Reply<S, O>
where
    S: Stream + fmt::Debug,
    S::Item: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reply").field("data", &self.data).field("rest", &self.rest).finish()
    }
}

impl<S, O> PartialEq for Reply<S, O>
where
    S: Stream + PartialEq,
    S::Item: PartialEq,
    O: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.rest == other.rest
    }
}

/// Both outcomes of a parallel-diagnostic parse.
///
/// Neither branch is preferred: `left` and `right` were each run on the same input.
#[derive(Clone, Debug, PartialEq)]
pub struct Forked<A, B> {
    pub left: A,
    pub right: B,
}

impl<A, B> Forked<A, B> {
    /// Split into the left and right outcomes.
    pub fn into_pair(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A: Outcome, B: Outcome> Outcome for Forked<A, B> {
    type Status = (A::Status, B::Status);
    type Data<'a> = (A::Data<'a>, B::Data<'a>) where Self: 'a;
    type Rest<'a> = (A::Rest<'a>, B::Rest<'a>) where Self: 'a;

    fn success(&self) -> Self::Status {
        (self.left.success(), self.right.success())
    }
    fn data(&self) -> Self::Data<'_> {
        (self.left.data(), self.right.data())
    }
    fn rest(&self) -> Self::Rest<'_> {
        (self.left.rest(), self.right.rest())
    }
}
