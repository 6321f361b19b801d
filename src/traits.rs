//! Accumulation capabilities used by sequence-producing combinators.
//!
//! - [`Concat`] is an associative combine with an identity ([`Concat::empty`]).
//!   [`crate::parser::then::Seq`] and the repetition combinators in [`crate::parser::many`] glue
//!   payloads with it.
//! - [`IntoSeq`] lifts a single payload (e.g. one `char`) into its concatenable form
//!   (e.g. `String`).
//! - [`IntoList`] coerces the first payload of [`crate::parser::collect::Collect`] into a list.
//!
//! Implement [`IntoSeq`] (and [`IntoList`] if you collect them) for your own token types.
//!
//! ```
//! use descent::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tok(u32);
//! impl IntoSeq for Tok {
//!     type Seq = Vec<Tok>;
//!     fn into_seq(self) -> Vec<Tok> {
//!         vec![self]
//!     }
//! }
//!
//! let toks = [Tok(1), Tok(2)];
//! let reply = Any.and(Any).parse(&toks[..]);
//! assert_eq!(reply.data(), Ok(&vec![Tok(1), Tok(2)]));
//! ```

/// An associative combine operation with an identity element.
pub trait Concat: Sized {
    /// The identity: `Self::empty().concat(x) == x`.
    fn empty() -> Self;
    fn concat(self, other: Self) -> Self;
}

impl Concat for String {
    fn empty() -> Self {
        String::new()
    }
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Concat for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// A payload that can take part in concatenation.
pub trait IntoSeq {
    type Seq: Concat;
    fn into_seq(self) -> Self::Seq;
}

impl IntoSeq for char {
    type Seq = String;
    fn into_seq(self) -> String {
        String::from(self)
    }
}

impl IntoSeq for String {
    type Seq = String;
    fn into_seq(self) -> String {
        self
    }
}

impl<'a> IntoSeq for &'a str {
    type Seq = String;
    fn into_seq(self) -> String {
        self.to_owned()
    }
}

impl IntoSeq for u8 {
    type Seq = Vec<u8>;
    fn into_seq(self) -> Vec<u8> {
        vec![self]
    }
}

impl<'a, T: Clone> IntoSeq for &'a [T] {
    type Seq = Vec<T>;
    fn into_seq(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T> IntoSeq for Vec<T> {
    type Seq = Vec<T>;
    fn into_seq(self) -> Vec<T> {
        self
    }
}

/// Coercion of a payload into a list of `T`.
///
/// Lists and strings are spread: a string becomes one element per character, as `char`s when
/// collected against `char` items and as one-character strings when collected against strings.
/// Other payloads become a single-element list.
pub trait IntoList<T> {
    fn into_list(self) -> Vec<T>;
}

impl<T> IntoList<T> for Vec<T> {
    fn into_list(self) -> Vec<T> {
        self
    }
}

impl IntoList<char> for String {
    fn into_list(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl<'a> IntoList<char> for &'a str {
    fn into_list(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl<'a, T: Clone> IntoList<T> for &'a [T] {
    fn into_list(self) -> Vec<T> {
        self.to_vec()
    }
}

macro_rules! into_list_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl IntoList<$t> for $t {
            fn into_list(self) -> Vec<$t> {
                vec![self]
            }
        }
    )*};
}

into_list_scalar!(char, bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl IntoList<String> for String {
    fn into_list(self) -> Vec<String> {
        self.chars().map(String::from).collect()
    }
}

impl<'a> IntoList<&'a str> for &'a str {
    fn into_list(self) -> Vec<&'a str> {
        let s: &'a str = self;
        s.char_indices().map(move |(i, c)| &s[i..i + c.len_utf8()]).collect()
    }
}
