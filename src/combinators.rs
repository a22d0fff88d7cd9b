//! # Parser Combinators
//!
//! This module implements the parsing units the engine is built from.
//!
//! ## Combinator Types
//!
//! * **Primitive Combinators**: Parsers that match literal content,
//!   [`Byte`] and [`Literal`]
//! * **Sequential Combinators**: [`AndThen`], which chains two parsers and
//!   combines their outputs
//!
//! Sequencing is strict, ordered, and non-backtracking; it is the only way
//! to build compound grammars in this engine.

use std::marker::PhantomData;

use crate::core::{ParseError, ParseResult, Parser};
use crate::input::Input;

/// Byte: Matches a single literal byte at the front of the input
///
/// This parser succeeds if the first input byte equals the configured byte.
/// It consumes one byte from the input on success.
#[derive(Clone)]
pub struct Byte {
    /// The byte to match against
    byte: u8,
}

impl Byte {
    /// Creates a new Byte parser
    ///
    /// # Arguments
    ///
    /// * `byte` - The byte to match
    pub fn new(byte: u8) -> Self {
        Self { byte }
    }
}

impl Parser<u8> for Byte {
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, u8> {
        match input.byte_at(0) {
            Some(found) if found == self.byte => Ok((found, input.advance(1))),
            Some(_) => Err(ParseError::Failure),
            None => Err(ParseError::InputExhausted),
        }
    }
}

/// Literal: Matches a literal byte string at the front of the input
///
/// This parser succeeds if the input is at least as long as the configured
/// pattern and starts with its bytes. The success value is the stored
/// pattern view itself; the pattern stays owned by the parser's
/// configuration, not by the result.
#[derive(Clone)]
pub struct Literal<'p> {
    /// The pattern to match against
    pattern: Input<'p>,
}

impl<'p> Literal<'p> {
    /// Creates a new Literal parser
    ///
    /// # Arguments
    ///
    /// * `pattern` - The byte string to match
    pub fn new(pattern: Input<'p>) -> Self {
        Self { pattern }
    }
}

impl<'p> Parser<Input<'p>> for Literal<'p> {
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, Input<'p>> {
        if input.len() < self.pattern.len() {
            return Err(ParseError::InputExhausted);
        }
        if &input.as_bytes()[..self.pattern.len()] != self.pattern.as_bytes() {
            return Err(ParseError::Failure);
        }
        Ok((self.pattern, input.advance(self.pattern.len())))
    }
}

/// AndThen: Applies two parsers in sequence
///
/// This parser runs `first` on the input and, on success, runs `second` on
/// the remaining input, combining both outputs into a tuple that owns its
/// two fields. A failure of either child is returned verbatim; when the
/// second child fails, the first child's output is dropped at that point.
#[derive(Clone)]
pub struct AndThen<P1, P2, O1, O2> {
    /// The parser applied first
    first: P1,
    /// The parser applied to what the first one leaves
    second: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> AndThen<P1, P2, O1, O2> {
    /// Creates a new AndThen parser
    ///
    /// # Arguments
    ///
    /// * `first` - The parser applied first
    /// * `second` - The parser applied to the remaining input
    pub fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O2> Parser<(O1, O2)> for AndThen<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, (O1, O2)> {
        let (first, rest) = self.first.parse(input)?;
        match self.second.parse(rest) {
            Ok((second, rest)) => Ok(((first, second), rest)),
            Err(e) => {
                tracing::trace!(
                    target: "parser::and_then",
                    error = ?e,
                    "second parser failed, first result dropped"
                );
                Err(e)
            }
        }
    }
}
