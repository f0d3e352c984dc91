//! # scoped-json
//!
//! `scoped-json` decodes JSON text into a native [`JsonValue`] tree without
//! relying on any other JSON implementation.
//!
//! Decoding is a strict three-stage pipeline; each stage finishes before
//! the next one starts:
//!
//! 1. [`tokenize`] turns the text into [`Token`]s with an ordered table of
//!    lexical rules (first match wins) and drops whitespace.
//! 2. [`parse`] validates the tokens with a scope-tracking state machine and
//!    builds an arena [`Tree`] of [`Node`]s.
//! 3. [`materialize`] walks the tree and produces the [`JsonValue`].
//!
//! [`parse_json`] runs all three.
//!
//! ## Quick Start
//!
//! ```
//! use scoped_json::{parse_json, JsonValue};
//!
//! let value = parse_json(r#"{ "name": "Babbage", "ids": [1815, -0.5e2] }"#).unwrap();
//! assert_eq!(value["name"].as_str(), Some("Babbage"));
//! assert_eq!(value["ids"][1], JsonValue::Number(-50.0));
//! ```
//!
//! ## Behavior worth knowing
//!
//! * The top-level value must be an object or an array.
//! * String literals are not unescaped: `"a\nb"` decodes to the four
//!   characters `a`, `\`, `n`, `b`, and a `\"` inside a string ends it.
//! * Numbers decode to `f64`. A fraction must end in a non-zero digit, so
//!   `1.0` is rejected while `1.5` and `1e3` are accepted.
//! * An object that repeats a key is an error.

/// Contains the primary `ParseError` type for the library.
pub mod error;
/// Contains the arena tree built by the structural parser.
pub mod node;
/// Contains `ParserOptions` and the default limits.
pub mod options;
/// Contains the structural parser and its transition table.
pub mod parser;
/// Contains the `Token` and `TokenKind` types.
pub mod token;
/// Contains the rule-table tokenizer.
pub mod tokenizer;
/// Contains `JsonValue` and the materializer.
pub mod value;

pub use error::ParseError;
pub use node::{Node, NodeId, NodeKind, Scope, Tree};
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_with};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
pub use value::{materialize, JsonValue};

use tracing::debug;

/// Parses a JSON string into a `JsonValue` using the default options.
///
/// # Errors
/// * `ParseError::Lex` when some part of the input matches no lexical rule.
/// * `ParseError::Syntax` when a token is out of place or the input ends early.
/// * `ParseError::DuplicateKey` when an object repeats a key.
/// * `ParseError::DepthExceeded` when containers nest deeper than
///   [`DEFAULT_MAX_DEPTH`]. The input size is not capped.
///
/// # Examples
/// ```
/// use scoped_json::{parse_json, ParseError};
///
/// assert!(parse_json("[1, 2]").is_ok());
/// assert!(matches!(parse_json("[1, 2,]"), Err(ParseError::Syntax { .. })));
/// ```
pub fn parse_json(text: &str) -> Result<JsonValue, ParseError> {
    parse_json_with(text, &ParserOptions::default())
}

/// Parses a JSON string into a `JsonValue` under explicit limits.
///
/// Fails with `ParseError::InputTooLarge` only when `options` sets a size cap.
pub fn parse_json_with(text: &str, options: &ParserOptions) -> Result<JsonValue, ParseError> {
    run_pipeline(text, options).map_err(|error| {
        debug!(%error, "failed to parse JSON");
        error
    })
}

fn run_pipeline(text: &str, options: &ParserOptions) -> Result<JsonValue, ParseError> {
    if let Some(max) = options.max_input_bytes {
        if text.len() > max {
            return Err(ParseError::InputTooLarge {
                len: text.len(),
                max,
            });
        }
    }
    let tokens = tokenize(text)?;
    let tree = parse_with(&tokens, options)?;
    materialize(&tree)
}
