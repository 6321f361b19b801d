//! Stream abstraction.
//!
//! Parsers never mutate their input. A [`Stream`] is a cheap, clonable view (typically a borrowed
//! slice) and every parse step hands back a *suffix* of the view it was given.
//!
//! Two implementations are provided:
//!
//! - `&str`, whose items are `char`s.
//! - `&[T]` for any `T: Clone`, for token sequences and byte strings.

/// An ordered, indexable, sliceable sequence of items.
///
/// ## Laws
///
/// - `split_first` returns `None` iff `is_empty()`.
/// - For `Some((_, rest))`, `rest.len() == self.len() - 1` and `rest` is a suffix of `self`.
/// - `self.consumed(&rest)` concatenated with `rest` reproduces `self`.
pub trait Stream: Clone {
    /// A single element of the stream.
    type Item: Clone;

    /// Number of items left in the stream.
    fn len(&self) -> usize;

    /// Whether no items are left.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A cheap size measure that strictly decreases whenever items are consumed.
    ///
    /// Unlike [`Stream::len`] it need not count items: `&str` reports its byte length.
    fn extent(&self) -> usize {
        self.len()
    }

    /// Take the first item, returning it along with the remaining suffix.
    fn split_first(&self) -> Option<(Self::Item, Self)>;

    /// The prefix of `self` that precedes `rest`.
    ///
    /// `rest` must be a suffix of `self` (every remainder returned by a parser is). If it is
    /// longer than `self`, the whole of `self` is treated as unconsumed and the prefix is empty.
    ///
    /// ## Examples
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let input = "123abc";
    /// let reply = Digit.zero_or_more().parse(input);
    /// assert_eq!(input.consumed(reply.rest()), "123");
    /// ```
    fn consumed(&self, rest: &Self) -> Self;
}

impl<'a> Stream for &'a str {
    type Item = char;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn extent(&self) -> usize {
        str::len(self)
    }

    fn split_first(&self) -> Option<(char, Self)> {
        let s: &'a str = *self;
        let mut chars = s.chars();
        let c = chars.next()?;
        Some((c, chars.as_str()))
    }

    fn consumed(&self, rest: &Self) -> Self {
        let s: &'a str = *self;
        let rest: &str = *rest;
        let end = s.len().saturating_sub(rest.len());
        s.get(..end).unwrap_or("")
    }
}

impl<'a, T: Clone> Stream for &'a [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn split_first(&self) -> Option<(T, Self)> {
        let s: &'a [T] = *self;
        let (first, rest) = s.split_first()?;
        Some((first.clone(), rest))
    }

    fn consumed(&self, rest: &Self) -> Self {
        let s: &'a [T] = *self;
        let rest: &[T] = *rest;
        let end = s.len().saturating_sub(rest.len());
        &s[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::Stream;

    #[test]
    fn str_counts_chars_not_bytes() {
        let s = "äb";
        assert_eq!(Stream::len(&s), 2);
        let (c, rest) = Stream::split_first(&s).unwrap();
        assert_eq!(c, 'ä');
        assert_eq!(rest, "b");
        assert_eq!(s.consumed(&rest), "ä");
    }

    #[test]
    fn slice_split_first() {
        let s: &[u8] = b"xy";
        let (b, rest) = Stream::split_first(&s).unwrap();
        assert_eq!(b, b'x');
        assert_eq!(rest, b"y");
        assert!(Stream::split_first(&&s[2..]).is_none());
    }

    #[test]
    fn consumed_of_unrelated_longer_rest_is_empty() {
        let s = "ab";
        assert_eq!(s.consumed(&"abcd"), "");
    }
}
