//! High-level entry points to run parsers.
//!
//! [`Parser::parse`] returns the full result triple. These helpers are for the common case where
//! only the payload (or the failure) matters.

use crate::{
    error::ParseError,
    input::Stream,
    parser::{
        prim::{Eof, RefParser},
        then::drop_second,
        Parser,
    },
    reply::Reply,
};

/// Run a parser and require it to consume the whole stream.
///
/// ```
/// use descent::prelude::*;
///
/// let number = Digit.one_or_more();
/// assert_eq!(parse_all(&number, "123"), Ok("123".to_string()));
/// assert_eq!(
///     parse_all(&number, "12a").map_err(|e| e.to_string()),
///     Err("expected eof, but got: a".to_string()),
/// );
/// ```
pub fn parse_all<S, P, O>(parser: &P, stream: S) -> Result<O, ParseError<S::Item>>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, O>> + ?Sized,
{
    let span = tracing::debug_span!("parse_all", extent = stream.extent());
    let _enter = span.enter();
    let reply = drop_second(RefParser(parser), Eof).parse(stream);
    tracing::debug!(success = reply.success(), "parse finished");
    reply.into_result()
}

/// Run a parser on a prefix of the stream, returning the payload and the unconsumed rest.
///
/// ```
/// use descent::prelude::*;
///
/// let word = Alpha.one_or_more();
/// assert_eq!(parse_prefix(&word, "hello world"), Ok(("hello".to_string(), " world")));
/// ```
pub fn parse_prefix<S, P, O>(parser: &P, stream: S) -> Result<(O, S), ParseError<S::Item>>
where
    S: Stream,
    P: Parser<S, Out = Reply<S, O>> + ?Sized,
{
    let (data, rest) = parser.parse(stream).into_parts();
    tracing::debug!(success = data.is_ok(), "prefix parse finished");
    data.map(|o| (o, rest))
}
