//! # Core Parser Definitions
//!
//! This module defines the fundamental parser interface and error types
//! that form the foundation of the combinator engine.

use thiserror::Error;

use crate::input::Input;

/// Parser trait defines the core parsing interface.
///
/// All parsers in the engine implement this trait, which takes an input
/// view and returns either a success result with the parsed value and the
/// remaining input, or a parse error.
///
/// Parsers borrow the input for the duration of a single invocation and
/// hold no mutable state between calls; configuration is immutable after
/// construction, so a parser tree can be invoked any number of times.
///
/// # Type Parameters
///
/// * `O` - The output value type
pub trait Parser<O> {
    /// Attempts to parse the front of the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - The input view to parse
    ///
    /// # Returns
    ///
    /// * `Ok((output, remaining))` - If parsing succeeds, returns the parsed
    ///   value and the unconsumed rest of the input
    /// * `Err(error)` - If parsing fails, returns a ParseError
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, O>;
}

/// Result type for parsing operations.
///
/// On success, returns a tuple of the parsed value and the remaining input.
/// On failure, returns a ParseError. The success arm owns the parsed value;
/// whichever caller ends up holding it is responsible for it from then on.
pub type ParseResult<'a, O> = Result<(O, Input<'a>), ParseError>;

/// Error type for parsing operations.
///
/// The taxonomy is flat and carries no positional context: composite
/// parsers propagate a child's error verbatim and unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input's content did not match what the parser required.
    #[error("input did not match the expected content")]
    Failure,
    /// The input ran out before the parser could determine a match or
    /// mismatch.
    #[error("input exhausted before a match could be decided")]
    InputExhausted,
    /// The underlying input source failed. Reserved for parsers backed by
    /// external data sources; no combinator in this crate constructs it.
    #[error("underlying input source failed")]
    Io,
}

impl<O, P> Parser<O> for &P
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, O> {
        (**self).parse(input)
    }
}

impl<O, P> Parser<O> for Box<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, input: Input<'a>) -> ParseResult<'a, O> {
        (**self).parse(input)
    }
}

/// Runs a parser tree once against the given input.
///
/// A thin entry point over [`Parser::parse`] that reports the outcome at
/// debug level.
#[tracing::instrument(level = "debug", skip(parser, input))]
pub fn run<'a, O, P>(parser: &P, input: Input<'a>) -> ParseResult<'a, O>
where
    P: Parser<O>,
{
    let result = parser.parse(input);
    if let Err(error) = &result {
        tracing::debug!(target: "parser::run", %error, "parse failed");
    }
    result
}
