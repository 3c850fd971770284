//! JSON output.
//!
//! [`JsonWriter`] renders a [`Document`] or [`Value`] as JSON with keys in
//! insertion order. Formatting, escaping and number output come from
//! `serde_json`'s [`PrettyFormatter`] (4 spaces per level by default) and
//! [`CompactFormatter`], so the text is byte-for-byte what `serde_json`
//! produces for the same tree. Non-ASCII text is written as-is.
//!
//! Floats always carry a `.` or an exponent so that reading the JSON back
//! yields a float again. Non-finite floats are written as `null`.
//!
//! ## Usage
//!
//! ```rust
//! use lightconf::{parse, to_string, to_string_pretty};
//!
//! let doc = parse("fixture { channel: 12\n gain: 1.0 }");
//!
//! assert_eq!(to_string(&doc), r#"{"fixture":{"channel":12,"gain":1.0}}"#);
//! assert_eq!(
//!     to_string_pretty(&doc),
//!     "{\n    \"fixture\": {\n        \"channel\": 12,\n        \"gain\": 1.0\n    }\n}"
//! );
//! ```
//!
//! Nested mappings are written with an explicit stack, so arbitrarily deep
//! documents do not grow the call stack.

use crate::{Document, JsonOptions, Map, Result, Value};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io;

/// Writes JSON to any [`io::Write`].
///
/// # Examples
///
/// ```rust
/// use lightconf::{parse, JsonOptions, JsonWriter};
///
/// let doc = parse("a: @x0A");
/// let mut writer = JsonWriter::new(Vec::new(), JsonOptions::compact());
/// writer.write_document(&doc).unwrap();
/// assert_eq!(writer.into_inner(), br#"{"a":"0x0A"}"#);
/// ```
pub struct JsonWriter<W> {
    writer: W,
    options: JsonOptions,
}

impl<W> JsonWriter<W>
where
    W: io::Write,
{
    pub fn new(writer: W, options: JsonOptions) -> Self {
        JsonWriter { writer, options }
    }

    /// Writes the document's top-level mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_document(&mut self, doc: &Document) -> Result<()> {
        let map = doc.as_map();
        match self.indent() {
            Some(indent) => {
                let mut formatter = PrettyFormatter::with_indent(&indent);
                write_mapping(&mut self.writer, &mut formatter, map)
            }
            None => write_mapping(&mut self.writer, &mut CompactFormatter, map),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match self.indent() {
            Some(indent) => {
                let mut formatter = PrettyFormatter::with_indent(&indent);
                write_value(&mut self.writer, &mut formatter, value)
            }
            None => write_value(&mut self.writer, &mut CompactFormatter, value),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn indent(&self) -> Option<Vec<u8>> {
        self.options
            .pretty
            .then(|| vec![b' '; self.options.indent])
    }
}

fn write_value<W, F>(writer: &mut W, formatter: &mut F, value: &Value) -> Result<()>
where
    W: io::Write,
    F: Formatter,
{
    match value {
        Value::Null => formatter.write_null(writer)?,
        Value::Boolean(b) => formatter.write_bool(writer, *b)?,
        Value::Integer(i) => formatter.write_i64(writer, *i)?,
        Value::Float(f) if f.is_finite() => formatter.write_f64(writer, *f)?,
        Value::Float(_) => formatter.write_null(writer)?,
        Value::String(s) => serde_json::to_writer(&mut *writer, s)?,
        Value::Mapping(map) => write_mapping(writer, formatter, map)?,
    }
    Ok(())
}

/// Drives the formatter through nested mappings with an explicit stack of
/// open iterators, in the same call order `serde_json::Serializer` uses.
fn write_mapping<W, F>(writer: &mut W, formatter: &mut F, root: &Map) -> Result<()>
where
    W: io::Write,
    F: Formatter,
{
    formatter.begin_object(writer)?;
    let mut open = vec![(root.iter(), true)];

    while let Some((entries, first)) = open.last_mut() {
        match entries.next() {
            Some((key, value)) => {
                formatter.begin_object_key(writer, *first)?;
                *first = false;
                serde_json::to_writer(&mut *writer, key)?;
                formatter.end_object_key(writer)?;
                formatter.begin_object_value(writer)?;
                if let Value::Mapping(child) = value {
                    formatter.begin_object(writer)?;
                    open.push((child.iter(), true));
                } else {
                    write_value(writer, formatter, value)?;
                    formatter.end_object_value(writer)?;
                }
            }
            None => {
                open.pop();
                formatter.end_object(writer)?;
                if !open.is_empty() {
                    formatter.end_object_value(writer)?;
                }
            }
        }
    }
    Ok(())
}
