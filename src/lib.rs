#![doc = include_str!("../README.md")]

pub mod char;
pub mod error;
pub mod input;
pub mod parse;
pub mod parser;
pub mod prelude;
pub mod reply;
pub mod traits;

pub use error::ParseError;
pub use input::Stream;
pub use parser::{Parser, ParserExt};
pub use reply::{Forked, Outcome, Reply};
