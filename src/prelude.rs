//! A convenience prelude for `descent`.

pub use crate::{
    char::{none_of, one_of, Alpha, Classify, Digit, Space},
    error::ParseError,
    input::Stream,
    parse::{parse_all, parse_prefix},
    parser::{
        choice::{sum, try_or, Sum, Try},
        collect::{collect, Collect},
        item::{is, Char, Is},
        many::{one_or_more, zero_or_more, OneOrMore, ZeroOrMore},
        prim::{constant, fail, Any, Const, Eof, Fail, RefParser},
        then::{bind, drop_first, drop_second, seq, Bind, DropFirst, DropSecond, Seq},
        Parser, ParserExt,
    },
    reply::{Forked, Outcome, Reply},
    traits::{Concat, IntoList, IntoSeq},
};
