//! Block parser.
//!
//! Turns the token stream from [`lexer`](crate::lexer) into a [`Document`].
//! Open blocks live on an explicit stack of frames rather than the call
//! stack, so nesting depth is limited only by memory.
//!
//! ## Grammar
//!
//! ```text
//! document := entry*
//! entry    := key ':' value [';']
//!           | key '{' entry* ('}' | ';')
//! ```
//!
//! Inside a block, `;` closes the block exactly like `}`. A `;` directly
//! after a value belongs to that entry and closes nothing.
//!
//! ## Lenient recovery
//!
//! In the default [`Mode::Lenient`](crate::Mode::Lenient):
//!
//! - a key followed by neither `:` nor `{` is dropped
//! - a `{` where a key is expected inside a block is skipped
//! - `key :` at end of input binds nothing
//! - blocks still open at end of input are closed
//! - at top level every token is read as a key, punctuation included
//!
//! [`Mode::Strict`](crate::Mode::Strict) reports each of these as an error
//! instead, except a bare `;` between top-level entries, which it skips.
//! Input accepted in strict mode parses to the same document in both modes.

use crate::lexer::{Token, TokenKind};
use crate::{coerce, DuplicateKeys, Error, Map, ParseOptions, Result, Value};
use std::ops::Deref;

/// The complete result of parsing one input text: the top-level mapping.
///
/// Dereferences to [`Map`] for lookups and iteration.
///
/// # Examples
///
/// ```rust
/// use lightconf::{parse, Value};
///
/// let doc = parse("rack { size: 4 }");
/// assert_eq!(doc.get_path(&["rack", "size"]), Some(&Value::Integer(4)));
/// assert_eq!(doc.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document(Map);

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Document(Map::new())
    }

    #[must_use]
    pub fn as_map(&self) -> &Map {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map {
        self.0
    }

    /// Follows `path` through nested mappings.
    ///
    /// Returns `None` as soon as a segment is missing or a scalar is reached
    /// before the path ends.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.0.get(first)?;
        for segment in rest {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Number of mapping levels below the document root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.values().map(Value::depth).max().unwrap_or(0)
    }
}

impl Deref for Document {
    type Target = Map;

    fn deref(&self) -> &Map {
        &self.0
    }
}

impl From<Map> for Document {
    fn from(map: Map) -> Self {
        Document(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Mapping(doc.0)
    }
}

impl serde::Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Mapping(map) => Ok(Document(map)),
            other => Err(serde::de::Error::invalid_type(
                serde::de::Unexpected::Other(other.kind()),
                &"a mapping",
            )),
        }
    }
}

/// A block that has been opened but not yet closed.
struct Frame {
    key: String,
    map: Map,
    line: usize,
    column: usize,
}

/// Single-pass parser over a token slice.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    options: &'a ParseOptions,
    root: Map,
    open: Vec<Frame>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], options: &'a ParseOptions) -> Self {
        Parser {
            tokens,
            position: 0,
            options,
            root: Map::new(),
            open: Vec::new(),
        }
    }

    /// Consumes every token and returns the document.
    ///
    /// # Errors
    ///
    /// Never fails in lenient mode without a depth limit. Otherwise see
    /// [`Error`] for the strict-mode diagnostics.
    pub fn parse(mut self) -> Result<Document> {
        while let Some(token) = self.next_token() {
            if self.open.is_empty() {
                self.top_level_entry(token)?;
            } else {
                self.block_entry(token)?;
            }
        }
        self.finish()
    }

    fn next_token(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.position).map(|t| &t.kind)
    }

    fn top_level_entry(&mut self, key: &'a Token) -> Result<()> {
        if self.options.is_strict() {
            match key.kind {
                TokenKind::Semicolon => return Ok(()),
                TokenKind::OpenBrace | TokenKind::CloseBrace | TokenKind::Colon => {
                    return Err(unexpected(key, "a key"));
                }
                _ => {}
            }
        }
        self.entry(key)
    }

    fn block_entry(&mut self, token: &'a Token) -> Result<()> {
        match token.kind {
            TokenKind::CloseBrace | TokenKind::Semicolon => self.close_block(),
            TokenKind::OpenBrace => {
                if self.options.is_strict() {
                    return Err(unexpected(token, "a key or the end of the block"));
                }
                tracing::trace!(line = token.line, column = token.column, "skipping stray '{{'");
                Ok(())
            }
            TokenKind::Colon if self.options.is_strict() => Err(unexpected(token, "a key")),
            _ => self.entry(token),
        }
    }

    /// Handles whatever follows a key that has already been consumed.
    fn entry(&mut self, key: &'a Token) -> Result<()> {
        match self.peek_kind() {
            Some(TokenKind::OpenBrace) => {
                let tokens = self.tokens;
                let brace = &tokens[self.position];
                self.position += 1;
                self.open_block(key, brace)
            }
            Some(TokenKind::Colon) => {
                self.position += 1;
                self.scalar(key)
            }
            _ => self.orphan(key),
        }
    }

    fn scalar(&mut self, key: &'a Token) -> Result<()> {
        let Some(value) = self.next_token() else {
            if self.options.is_strict() {
                return Err(Error::missing_value(key.line, key.column, key.lexeme()));
            }
            tracing::trace!(key = key.lexeme(), "dropping key with no value at end of input");
            return Ok(());
        };

        if self.options.is_strict() && value.kind.is_punctuation() {
            return Err(unexpected(value, "a value"));
        }

        self.bind(key.lexeme(), coerce(value.lexeme()), key.line, key.column)?;

        if self.peek_kind() == Some(&TokenKind::Semicolon) {
            self.position += 1;
        }
        Ok(())
    }

    fn orphan(&mut self, key: &'a Token) -> Result<()> {
        if self.options.is_strict() {
            return Err(match self.tokens.get(self.position) {
                Some(next) => unexpected(next, "':' or '{'"),
                None => Error::missing_value(key.line, key.column, key.lexeme()),
            });
        }
        tracing::trace!(
            key = key.lexeme(),
            line = key.line,
            column = key.column,
            "dropping key without ':' or '{{'"
        );
        Ok(())
    }

    fn open_block(&mut self, key: &'a Token, brace: &'a Token) -> Result<()> {
        if let Some(limit) = self.options.max_depth {
            if self.open.len() >= limit {
                return Err(Error::depth_limit_exceeded(brace.line, brace.column, limit));
            }
        }
        self.open.push(Frame {
            key: key.lexeme().to_string(),
            map: Map::new(),
            line: key.line,
            column: key.column,
        });
        Ok(())
    }

    fn close_block(&mut self) -> Result<()> {
        match self.open.pop() {
            Some(frame) => self.bind(&frame.key, Value::Mapping(frame.map), frame.line, frame.column),
            None => Ok(()),
        }
    }

    fn bind(&mut self, key: &str, value: Value, line: usize, column: usize) -> Result<()> {
        let reject = self.options.duplicate_keys == DuplicateKeys::Reject;
        let target = match self.open.last_mut() {
            Some(frame) => &mut frame.map,
            None => &mut self.root,
        };
        if target.contains_key(key) {
            if reject {
                return Err(Error::duplicate_key(line, column, key));
            }
            tracing::trace!(key, line, "overwriting earlier value");
        }
        target.insert(key.to_string(), value);
        Ok(())
    }

    fn finish(mut self) -> Result<Document> {
        if self.options.is_strict() {
            if let Some(frame) = self.open.last() {
                return Err(Error::unterminated_block(frame.line, frame.column, &frame.key));
            }
        }
        while !self.open.is_empty() {
            if let Some(frame) = self.open.last() {
                tracing::debug!(key = %frame.key, line = frame.line, "closing unterminated block");
            }
            self.close_block()?;
        }
        Ok(Document(self.root))
    }
}

fn unexpected(token: &Token, expected: &str) -> Error {
    Error::unexpected_token(token.line, token.column, token.lexeme(), expected)
}
