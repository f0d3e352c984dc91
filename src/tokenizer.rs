//! The tokenizer (lexer).
//!
//! It consumes the raw input `&str` and produces `Token`s by trying an
//! ordered table of lexical rules at the cursor. The first rule whose
//! pattern matches there wins, so the order of `RULES` is significant.

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use memchr::memchr;
use tracing::debug;

/// What a lexical rule matches at the start of the remaining input.
enum Pattern {
    /// `"`, then everything up to the next `"` on the same line.
    String,
    /// `-?(0|[1-9][0-9]*)(\.[0-9]*[1-9])?([eE][+-]?[0-9]+)?`
    Number,
    /// A fixed spelling such as `true` or `{`.
    Literal(&'static str),
    /// A single whitespace character.
    Whitespace,
}

/// What a lexical rule turns its lexeme into.
enum Emit {
    String,
    Number,
    Fixed(TokenKind<'static>),
    Discard,
}

struct LexRule {
    pattern: Pattern,
    emit: Emit,
}

static RULES: [LexRule; 12] = [
    LexRule { pattern: Pattern::String, emit: Emit::String },
    LexRule { pattern: Pattern::Number, emit: Emit::Number },
    LexRule { pattern: Pattern::Literal("true"), emit: Emit::Fixed(TokenKind::Boolean(true)) },
    LexRule { pattern: Pattern::Literal("false"), emit: Emit::Fixed(TokenKind::Boolean(false)) },
    LexRule { pattern: Pattern::Literal("null"), emit: Emit::Fixed(TokenKind::Null) },
    LexRule { pattern: Pattern::Literal("{"), emit: Emit::Fixed(TokenKind::LeftBrace) },
    LexRule { pattern: Pattern::Literal("}"), emit: Emit::Fixed(TokenKind::RightBrace) },
    LexRule { pattern: Pattern::Literal("["), emit: Emit::Fixed(TokenKind::LeftBracket) },
    LexRule { pattern: Pattern::Literal("]"), emit: Emit::Fixed(TokenKind::RightBracket) },
    LexRule { pattern: Pattern::Literal(","), emit: Emit::Fixed(TokenKind::Comma) },
    LexRule { pattern: Pattern::Literal(":"), emit: Emit::Fixed(TokenKind::Colon) },
    LexRule { pattern: Pattern::Whitespace, emit: Emit::Discard },
];

impl Pattern {
    /// Returns the byte length of the match at the start of `rest`, if any.
    fn scan(&self, rest: &str) -> Option<usize> {
        match self {
            Pattern::String => scan_string(rest),
            Pattern::Number => scan_number(rest.as_bytes()),
            Pattern::Literal(spelling) => rest.starts_with(*spelling).then(|| spelling.len()),
            Pattern::Whitespace => rest
                .chars()
                .next()
                .filter(|&c| is_whitespace(c))
                .map(char::len_utf8),
        }
    }
}

fn scan_string(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }
    // The closing quote is the first one after the opening quote.
    let close = memchr(b'"', &bytes[1..])?;
    let content = &rest[1..1 + close];
    if content.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return None;
    }
    Some(close + 2)
}

fn scan_number(bytes: &[u8]) -> Option<usize> {
    let digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end += 1;
    }

    // Integer part: a lone zero, or a digit run without a leading zero.
    match bytes.get(end) {
        Some(b'0') => end += 1,
        Some(b'1'..=b'9') => {
            end += 1;
            while digit_at(end) {
                end += 1;
            }
        }
        _ => return None,
    }

    // Fraction: ends at its last non-zero digit, or is absent.
    if bytes.get(end) == Some(&b'.') {
        let mut i = end + 1;
        let mut last_non_zero = None;
        while digit_at(i) {
            if bytes[i] != b'0' {
                last_non_zero = Some(i);
            }
            i += 1;
        }
        if let Some(last) = last_non_zero {
            end = last + 1;
        }
    }

    // Exponent: only taken when at least one digit follows.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut i = end + 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let digits_start = i;
        while digit_at(i) {
            i += 1;
        }
        if i > digits_start {
            end = i;
        }
    }

    Some(end)
}

/// The whitespace set of ECMAScript's `\s` class.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// The tokenizer over one input string.
///
/// Yields tokens in order, skipping whitespace. After the first error it
/// yields nothing more.
pub struct Tokenizer<'a> {
    /// The whole input.
    input: &'a str,
    /// Byte offset of the first unconsumed character.
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, cursor: 0 }
    }

    fn lex_error(&mut self) -> ParseError {
        let remainder = self.input[self.cursor..].to_string();
        // Fuse: nothing after a lexical failure is meaningful.
        self.cursor = self.input.len();
        ParseError::Lex { remainder }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let input = self.input;
            let rest = &input[self.cursor..];
            if rest.is_empty() {
                return None;
            }

            let Some((rule, len)) = RULES
                .iter()
                .find_map(|rule| rule.pattern.scan(rest).map(|len| (rule, len)))
            else {
                return Some(Err(self.lex_error()));
            };

            let lexeme = &rest[..len];
            let kind = match &rule.emit {
                Emit::Discard => {
                    self.cursor += len;
                    continue;
                }
                Emit::String => TokenKind::String(&lexeme[1..lexeme.len() - 1]),
                Emit::Number => match lexeme.parse::<f64>() {
                    Ok(number) => TokenKind::Number(number),
                    Err(_) => return Some(Err(self.lex_error())),
                },
                Emit::Fixed(kind) => *kind,
            };

            self.cursor += len;
            return Some(Ok(Token::new(kind, lexeme)));
        }
    }
}

/// Converts the whole input into tokens, failing on the first position
/// no rule matches.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let tokens = Tokenizer::new(text).collect::<Result<Vec<_>, _>>()?;
    debug!(tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}
