//! # Tsumugi: Minimal Parser Combinator Engine
//!
//! Tsumugi builds recursive-descent parsers by composing small, reusable
//! parsing units over a borrowed view of input bytes.
//!
//! ## Core Components
//!
//! * **Input** ([`input`]): a borrowed, read-only byte view that parsers
//!   consume and narrow as they match
//! * **Parser Trait** ([`core`]): the single-method parsing capability all
//!   combinators implement
//! * **Combinators** ([`combinators`]): literal byte, literal byte string,
//!   and sequential composition
//! * **Prelude** ([`prelude`]): construction helpers for building trees
//!
//! ## Architecture Design
//!
//! 1. **Core Parser Interface**: the `Parser` trait defines the parsing
//!    contract; configuration lives in the implementing struct and is
//!    immutable after construction
//! 2. **Combinators**: small, composable parser units combined into trees
//! 3. **Fail-Fast Errors**: a flat error taxonomy propagated verbatim, with
//!    no recovery and no partial results
//! 4. **Tree-Shaped Ownership**: success values are owned by their current
//!    holder; combined results drop their children recursively
//!
//! ## Processing Model
//!
//! ```text
//! Input bytes → Parser tree → (parsed value, remaining Input) | ParseError
//! ```
//!
//! Execution is synchronous and single-threaded; each invocation is a pure
//! read of the input and a pure construction of a new result.
//!
//! ## Usage Example
//!
//! ```rust
//! use tsumugi::prelude::*;
//!
//! let parser = and_then(byte(b'('), and_then(literal("bebou"), byte(b')')));
//!
//! let ((open, (body, close)), remaining) =
//!     parser.parse(Input::from("(bebou)")).unwrap();
//! assert_eq!((open, close), (b'(', b')'));
//! assert_eq!(body, Input::from("bebou"));
//! assert!(remaining.is_empty());
//! ```

pub mod combinators;
pub mod core;
pub mod input;
pub mod prelude;

// Re-exports
pub use crate::core::run;
pub use crate::core::ParseError;
pub use crate::core::ParseResult;
pub use crate::core::Parser;
pub use crate::input::Input;
