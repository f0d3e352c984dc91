//! Contains the primary `ParseError` type for the library.
use thiserror::Error;

/// How many characters of the unconsumed input a lexical error shows.
const REMAINDER_PREVIEW_CHARS: usize = 24;

/// The error type for every stage of the pipeline.
///
/// All variants are terminal: the pipeline stops at the first one and
/// no partial value is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No lexical rule matches at the current input position.
    #[error("unexpected token: {}", preview(.remainder))]
    Lex {
        /// Everything from the failing position to the end of the input.
        remainder: String,
    },

    /// A token is not allowed in the current container/scope state,
    /// or the input ended while containers were still open.
    #[error("unexpected token: {token}")]
    Syntax {
        /// The offending lexeme, or `"end of input"`.
        token: String,
    },

    /// An object defines the same key twice.
    #[error("duplicate key '{key}' in object")]
    DuplicateKey { key: String },

    #[error("input of {len} bytes exceeds the maximum of {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    #[error("maximum nesting depth of {max} exceeded")]
    DepthExceeded { max: usize },
}

impl ParseError {
    /// The `token` used when the input runs out with containers still open.
    pub const END_OF_INPUT: &'static str = "end of input";

    pub(crate) fn syntax(token: impl Into<String>) -> Self {
        ParseError::Syntax {
            token: token.into(),
        }
    }

    pub(crate) fn end_of_input() -> Self {
        Self::syntax(Self::END_OF_INPUT)
    }
}

fn preview(remainder: &str) -> String {
    let mut chars = remainder.chars();
    let head: String = chars.by_ref().take(REMAINDER_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParseError::syntax("]");
        assert_eq!(error.to_string(), "unexpected token: ]");

        let error = ParseError::DuplicateKey {
            key: "a".to_string(),
        };
        assert_eq!(error.to_string(), "duplicate key 'a' in object");

        assert_eq!(
            ParseError::end_of_input().to_string(),
            "unexpected token: end of input"
        );
    }

    #[test]
    fn test_lex_error_truncates_long_remainder() {
        let error = ParseError::Lex {
            remainder: "?".repeat(100),
        };
        assert_eq!(
            error.to_string(),
            format!("unexpected token: {}...", "?".repeat(REMAINDER_PREVIEW_CHARS))
        );

        let short = ParseError::Lex {
            remainder: "@}".to_string(),
        };
        assert_eq!(short.to_string(), "unexpected token: @}");
    }
}
