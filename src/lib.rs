//! # lightconf
//!
//! A parser for the LightCommander block configuration language, the format
//! used to describe lighting maps, racks, sequences and show objects.
//! Parsed documents convert to JSON or deserialize into your own types with
//! Serde.
//!
//! ## The Language
//!
//! ```text
//! .map {
//!     items {
//!         item {
//!             value: "helloworld"   ## quoted strings keep their spaces
//!         };
//!     };
//! };
//! ```
//!
//! Blocks nest with `{`, and close with `}` or `;`. Scalars follow a `:` and
//! are typed by a fixed set of rules (booleans, null, `@x` hex strings,
//! integers, floats, strings). See [`grammar`] for the full reference.
//!
//! ## Key Features
//!
//! - **Total by default**: any text parses; malformed shapes are dropped
//!   instead of failing the whole file
//! - **Strict mode**: opt in to line/column diagnostics for the same shapes
//! - **Unbounded nesting**: parsing and JSON output use explicit stacks
//! - **Ordered**: keys keep source order through to the JSON output
//! - **Serde Compatible**: read documents into `#[derive(Deserialize)]` types
//!
//! ## Quick Start
//!
//! ```rust
//! use lightconf::{convert, parse, Value};
//!
//! let source = ".map {\n    items {\n        item {\n            value: \"helloworld\"\n        };\n    };\n};";
//!
//! let doc = parse(source);
//! assert_eq!(
//!     doc.get_path(&[".map", "items", "item", "value"]),
//!     Some(&Value::String("helloworld".to_string()))
//! );
//!
//! let json = convert(source);
//! assert!(json.starts_with("{\n    \".map\": {"));
//! ```
//!
//! ### Typed Configuration
//!
//! ```rust
//! use lightconf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Output {
//!     universe: u8,
//!     enabled: bool,
//! }
//!
//! let out: Output = from_str("universe: 2 // second line\nenabled: True").unwrap();
//! assert_eq!(out.universe, 2);
//! assert!(out.enabled);
//! ```
//!
//! ## Pipeline
//!
//! text → [`lexer::preprocess`] → [`lexer::tokenize`] → [`parser::Parser`]
//! (typing scalars with [`coerce()`]) → [`Document`] → [`JsonWriter`].
//!
//! Every stage is a pure function of its input, so independent texts can be
//! parsed on as many threads as you like.

pub mod coerce;
pub mod de;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use coerce::coerce;
pub use error::{Error, Result};
pub use map::Map;
pub use options::{DuplicateKeys, JsonOptions, Mode, ParseOptions};
pub use parser::{Document, Parser};
pub use ser::JsonWriter;
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;

/// Parses text with the default lenient rules. Never fails.
///
/// # Examples
///
/// ```rust
/// use lightconf::{parse, Value};
///
/// let doc = parse("group dmx_out: 5\norphan\nspeed: 0.5");
/// assert_eq!(doc.get("group.dmx_out"), Some(&Value::Integer(5)));
/// assert_eq!(doc.get("orphan"), None);
/// assert_eq!(doc.get("speed"), Some(&Value::Float(0.5)));
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    // lenient parsing without a depth limit has no error path
    parse_with_options(text, &ParseOptions::default()).unwrap_or_default()
}

/// Parses text with the given options.
///
/// # Examples
///
/// ```rust
/// use lightconf::{parse_with_options, Error, ParseOptions};
///
/// let err = parse_with_options("rack {\n  size\n}", &ParseOptions::strict()).unwrap_err();
/// assert_eq!(err.position(), Some((3, 1)));
/// ```
///
/// # Errors
///
/// In strict mode, returns the first malformed shape found. In either mode,
/// returns an error when a configured depth limit or duplicate key policy is
/// violated.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Document> {
    let tokens = lexer::lex(text);
    let doc = Parser::new(&tokens, options).parse()?;
    tracing::debug!(
        tokens = tokens.len(),
        entries = doc.len(),
        mode = ?options.mode,
        "parsed document"
    );
    Ok(doc)
}

/// Serializes a document to compact JSON.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, JsonOptions::compact())
}

/// Serializes a document to JSON indented by 4 spaces per level.
///
/// # Examples
///
/// ```rust
/// use lightconf::{parse, to_string_pretty};
///
/// let json = to_string_pretty(&parse("a: 1"));
/// assert_eq!(json, "{\n    \"a\": 1\n}");
/// ```
#[must_use]
pub fn to_string_pretty(doc: &Document) -> String {
    to_string_with_options(doc, JsonOptions::new())
}

#[must_use]
pub fn to_string_with_options(doc: &Document, options: JsonOptions) -> String {
    let mut writer = JsonWriter::new(Vec::with_capacity(256), options);
    if let Err(err) = writer.write_document(doc) {
        // only reachable through a failing sink, and a Vec never fails
        tracing::error!(%err, "writing JSON to memory failed");
    }
    match String::from_utf8(writer.into_inner()) {
        Ok(json) => json,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Writes a document as pretty JSON to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, JsonOptions::new())
}

/// Writes a document as JSON to `writer` with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer_with_options<W>(writer: W, doc: &Document, options: JsonOptions) -> Result<()>
where
    W: io::Write,
{
    JsonWriter::new(writer, options).write_document(doc)
}

/// Converts configuration text to pretty JSON text.
///
/// This is the unit of work a batch converter performs for each file.
///
/// # Examples
///
/// ```rust
/// use lightconf::convert;
///
/// assert_eq!(convert("mask: @xFF"), "{\n    \"mask\": \"0xFF\"\n}");
/// ```
#[must_use]
pub fn convert(text: &str) -> String {
    to_string_pretty(&parse(text))
}

/// Converts configuration text to JSON with custom parse and output options.
///
/// # Errors
///
/// Returns any error [`parse_with_options`] reports.
pub fn convert_with_options(
    text: &str,
    parse_options: &ParseOptions,
    json_options: JsonOptions,
) -> Result<String> {
    let doc = parse_with_options(text, parse_options)?;
    Ok(to_string_with_options(&doc, json_options))
}

/// Parses text and deserializes the document into `T`.
///
/// # Examples
///
/// ```rust
/// use lightconf::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: -2").unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// Returns an error if the document does not match the shape of `T`.
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Value::from(parse(text)))
}

/// Reads all of `reader`, then behaves like [`from_str`].
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the
/// document does not match the shape of `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserializes `T` from UTF-8 bytes of configuration text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the document does
/// not match the shape of `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
