//! # Prelude
//!
//! Construction helpers and re-exports for building parser trees without
//! spelling out combinator struct names.

pub use crate::combinators::{AndThen, Byte, Literal};
pub use crate::core::{ParseError, ParseResult, Parser};
pub use crate::input::Input;

/// Matches a single literal byte.
pub fn byte(byte: u8) -> Byte {
    Byte::new(byte)
}

/// Matches a literal byte string.
pub fn literal<'p>(pattern: impl Into<Input<'p>>) -> Literal<'p> {
    Literal::new(pattern.into())
}

/// Applies `first` and `second` in sequence, combining their outputs into a
/// tuple.
pub fn and_then<P1, P2, O1, O2>(first: P1, second: P2) -> AndThen<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    AndThen::new(first, second)
}
