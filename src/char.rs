//! Character-class parsers.
//!
//! [`Space`], [`Digit`] and [`Alpha`] consume one item and test it with [`Classify`], which is
//! implemented for `char` (text streams) and `u8` (byte streams).
//!
//! Like every predicate parser they report the remainder past the rejected item on mismatch (see
//! [`crate::parser::item`]).
//!
//! | parser    | `char`                    | `u8`                                   |
//! |-----------|---------------------------|----------------------------------------|
//! | [`Space`] | Unicode `White_Space`     | `\t \n \x0b \x0c \r` and space         |
//! | [`Digit`] | `0`-`9`                   | `b'0'`-`b'9'`                          |
//! | [`Alpha`] | Unicode `Alphabetic`      | ASCII letters                          |

use crate::{
    input::Stream,
    parser::{
        item::{is, run_is, Is},
        Parser,
    },
    reply::Reply,
};

/// Character classification of a single stream item.
pub trait Classify {
    fn is_space(&self) -> bool;
    fn is_decimal_digit(&self) -> bool;
    fn is_alpha(&self) -> bool;
}

impl Classify for char {
    fn is_space(&self) -> bool {
        self.is_whitespace()
    }
    fn is_decimal_digit(&self) -> bool {
        self.is_ascii_digit()
    }
    fn is_alpha(&self) -> bool {
        self.is_alphabetic()
    }
}

impl Classify for u8 {
    fn is_space(&self) -> bool {
        // `u8::is_ascii_whitespace` leaves out vertical tab.
        matches!(self, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
    }
    fn is_decimal_digit(&self) -> bool {
        self.is_ascii_digit()
    }
    fn is_alpha(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

macro_rules! class_parser {
    ($(#[$doc:meta])* $name:ident, $test:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl<S> Parser<S> for $name
        where
            S: Stream,
            S::Item: Classify,
        {
            type Out = Reply<S, S::Item>;

            fn parse(&self, stream: S) -> Self::Out {
                run_is(stream, Classify::$test)
            }
        }
    };
}

class_parser!(
    /// Parse one whitespace item.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// let reply = Space.parse(" \t");
    /// assert_eq!(reply.data(), Ok(&' '));
    /// assert_eq!(*reply.rest(), "\t");
    /// ```
    Space,
    is_space
);

class_parser!(
    /// Parse one decimal digit.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// assert_eq!(Digit.parse("7a").data(), Ok(&'7'));
    /// assert_eq!(Digit.parse(&b"7a"[..]).data(), Ok(&b'7'));
    /// ```
    Digit,
    is_decimal_digit
);

class_parser!(
    /// Parse one alphabetic item.
    ///
    /// ```
    /// use descent::prelude::*;
    ///
    /// assert_eq!(Alpha.parse("é1").data(), Ok(&'é'));
    /// assert_eq!(Alpha.parse("1é").message().as_deref(), Some("1 not matched"));
    /// ```
    Alpha,
    is_alpha
);

/// Parse one character contained in `chars`.
///
/// ```
/// use descent::prelude::*;
///
/// let sign = one_of("+-");
/// assert_eq!(sign.parse("-1").data(), Ok(&'-'));
/// assert!(!sign.parse("1").success());
/// ```
pub fn one_of(chars: &str) -> Is<impl Fn(&char) -> bool> {
    let set = chars.to_owned();
    is(move |c: &char| set.contains(*c))
}

/// Parse one character not contained in `chars`.
///
/// ```
/// use descent::prelude::*;
///
/// let body = none_of("\"").zero_or_more();
/// assert_eq!(body.parse("ab\"").data(), Ok(&"ab".to_string()));
/// ```
pub fn none_of(chars: &str) -> Is<impl Fn(&char) -> bool> {
    let set = chars.to_owned();
    is(move |c: &char| !set.contains(*c))
}

#[cfg(test)]
mod tests {
    use super::Classify;

    #[test]
    fn vertical_tab_is_space_in_both_item_types() {
        assert!('\x0b'.is_space());
        assert!(0x0bu8.is_space());
    }

    #[test]
    fn digits_are_ascii_only() {
        assert!('9'.is_decimal_digit());
        assert!(!'٣'.is_decimal_digit());
        assert!(!b'a'.is_decimal_digit());
    }
}
