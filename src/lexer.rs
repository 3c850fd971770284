//! Comment stripping and tokenization.
//!
//! Input goes through two total steps before parsing:
//!
//! 1. [`preprocess`] removes `##` and `//` comments up to end of line and
//!    trims the text.
//! 2. [`tokenize`] scans each non-blank line left to right, producing quoted
//!    strings, the punctuation `{ } : ;`, and word chunks. Whitespace inside a
//!    word chunk is collapsed to `.`, so `group dmx_out` becomes the single
//!    identifier `group.dmx_out`.
//!
//! Neither step can fail: any character sequence ends up in some token.
//!
//! ```rust
//! use lightconf::lexer::{lex, TokenKind};
//!
//! let kinds: Vec<TokenKind> = lex("group dmx_out: 5 // universe one")
//!     .into_iter()
//!     .map(|t| t.kind)
//!     .collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Word("group.dmx_out".to_string()),
//!         TokenKind::Colon,
//!         TokenKind::Word("5".to_string()),
//!     ]
//! );
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Comment from either marker to end of line. The earliest marker on a line wins.
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:##|//).*").unwrap());

/// Alternation order matters: a quote at the match position starts a quoted
/// segment, otherwise punctuation, otherwise the longest run without punctuation.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*"|[{}:;]|[^{}:;]+"#).unwrap());

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Line boundaries: `\r\n`, `\n`, a lone `\r`, and the other separators
/// (vertical tab, form feed, `\x1c`-`\x1e`, NEL, U+2028, U+2029).
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// The kind of a token, carrying its text where it has one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A chunk starting with `"`, kept verbatim including its quotes.
    QuotedString(String),
    OpenBrace,
    CloseBrace,
    Colon,
    Semicolon,
    /// Any other chunk, with internal whitespace runs replaced by `.`.
    Word(String),
}

impl TokenKind {
    /// The source text of the token. For quoted strings this includes the quotes.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            TokenKind::QuotedString(text) | TokenKind::Word(text) => text,
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
        }
    }

    #[must_use]
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenBrace | TokenKind::CloseBrace | TokenKind::Colon | TokenKind::Semicolon
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// A token and where it starts in the raw input (1-based).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.kind.lexeme()
    }
}

/// Removes `##` and `//` comments and trims surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use lightconf::lexer::preprocess;
///
/// assert_eq!(preprocess("\n  a: 1 ## note\n// gone\n"), "a: 1");
/// ```
#[must_use]
pub fn preprocess(text: &str) -> String {
    strip_comments(text).trim().to_string()
}

fn strip_comments(text: &str) -> std::borrow::Cow<'_, str> {
    COMMENT_REGEX.replace_all(text, "")
}

/// Preprocesses and tokenizes raw input, with positions in the raw input.
#[must_use]
pub fn lex(input: &str) -> Vec<Token> {
    // Whole-text trimming only removes blank lines and line-edge whitespace,
    // which tokenizing drops anyway; skipping it keeps positions exact.
    tokenize(&strip_comments(input))
}

/// Tokenizes comment-free text. Positions are 1-based and relative to `text`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, raw_line) in LINE_BREAK_REGEX.split(text).enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let indent = raw_line.len() - raw_line.trim_start().len();
        // columns count characters; advance from the previous token
        let mut counted = 0;
        let mut column = 1;

        for part in TOKEN_REGEX.find_iter(line) {
            let chunk = part.as_str();
            let trimmed = chunk.trim();
            if trimmed.is_empty() {
                continue;
            }
            let offset = indent + part.start() + (chunk.len() - chunk.trim_start().len());
            column += raw_line[counted..offset].chars().count();
            counted = offset;
            tokens.push(Token {
                kind: classify(trimmed),
                line: index + 1,
                column,
            });
        }
    }

    tokens
}

fn classify(chunk: &str) -> TokenKind {
    match chunk {
        "{" => TokenKind::OpenBrace,
        "}" => TokenKind::CloseBrace,
        ":" => TokenKind::Colon,
        ";" => TokenKind::Semicolon,
        _ if chunk.starts_with('"') => TokenKind::QuotedString(chunk.to_string()),
        _ => TokenKind::Word(WHITESPACE_REGEX.replace_all(chunk, ".").into_owned()),
    }
}
