//! Defines the `Token` and `TokenKind` types.
//!
//! These are the intermediate representation between the `Tokenizer`
//! and the structural parser.

/// The specific type of a `Token`, carrying its decoded scalar where
/// the lexeme has one.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind<'a> {
    /// A string literal with its surrounding quotes stripped. Escape
    /// sequences are kept verbatim.
    String(&'a str),
    /// A number literal, e.g. `-325.45e6`
    Number(f64),
    /// `true` or `false`
    Boolean(bool),
    /// `null`
    Null,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
}

/// A single token produced by the `Tokenizer`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    /// The type of the token.
    pub kind: TokenKind<'a>,
    /// The raw lexeme as it appeared in the input. Errors name tokens by it.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token from its kind and the matched input slice.
    pub fn new(kind: TokenKind<'a>, text: &'a str) -> Self {
        Token { kind, text }
    }
}
