//! Configuration for parsing and JSON output.
//!
//! - [`ParseOptions`]: lenient or strict parsing, duplicate key policy, depth limit
//! - [`JsonOptions`]: indentation and pretty/compact output
//!
//! ## Examples
//!
//! ```rust
//! use lightconf::{parse_with_options, DuplicateKeys, ParseOptions};
//!
//! let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
//! assert!(parse_with_options("a: 1\na: 2", &options).is_err());
//! ```

/// How the parser reacts to malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drop orphan keys, skip stray `{`, close unterminated blocks at end of input.
    #[default]
    Lenient,
    /// Report every recovery the lenient parser would make as an error.
    Strict,
}

/// What happens when a key is written twice in the same block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one; the key keeps its first position.
    #[default]
    Overwrite,
    /// Fail with [`Error::DuplicateKey`](crate::Error::DuplicateKey).
    Reject,
}

/// Parser configuration.
///
/// The default is the lenient, total parser: every input produces a document.
///
/// # Examples
///
/// ```rust
/// use lightconf::{Mode, ParseOptions};
///
/// let options = ParseOptions::strict().with_max_depth(64);
/// assert_eq!(options.mode, Mode::Strict);
/// assert_eq!(options.max_depth, Some(64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub mode: Mode,
    pub duplicate_keys: DuplicateKeys,
    /// Maximum number of nested blocks. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Creates default options (lenient, last write wins, no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for strict parsing.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            mode: Mode::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }

    /// Limits how deeply blocks may nest. Exceeding the limit is an error in
    /// both modes.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }
}

/// Configuration options for JSON output.
///
/// # Examples
///
/// ```rust
/// use lightconf::JsonOptions;
///
/// let options = JsonOptions::new();
/// assert_eq!(options.indent, 4);
/// assert!(options.pretty);
///
/// let options = JsonOptions::new().with_indent(2);
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 4,
            pretty: true,
        }
    }
}

impl JsonOptions {
    /// Creates default options (pretty, 4-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output with no whitespace.
    #[must_use]
    pub fn compact() -> Self {
        JsonOptions {
            pretty: false,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
