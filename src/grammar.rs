//! Language Reference
//!
//! This module documents the block configuration language as implemented by
//! this crate. It contains no code.
//!
//! # Overview
//!
//! Files describe lighting maps, racks, sequences and show objects as nested
//! blocks of key/value pairs:
//!
//! ```text
//! ## rack layout for the front truss
//! rack front {
//!     universe: 1
//!     label: "Front Truss"
//!     dimmer {
//!         address: 12
//!         curve: linear
//!         mask: @x00FF
//!     };
//! };
//! ```
//!
//! parses to
//!
//! ```text
//! {
//!     "rack.front": {
//!         "universe": 1,
//!         "label": "Front Truss",
//!         "dimmer": {
//!             "address": 12,
//!             "curve": "linear",
//!             "mask": "0x00FF"
//!         }
//!     }
//! }
//! ```
//!
//! # Comments
//!
//! `##` and `//` start a comment that runs to the end of the line. Comments
//! are removed before anything else happens, including inside quotes:
//! `url: "http://host"` loses everything after `http:`.
//!
//! # Tokens
//!
//! Each line is scanned left to right for, in order of preference at each
//! position:
//!
//! | Token | Pattern |
//! |-------|---------|
//! | Quoted string | `"` up to the next `"` |
//! | Punctuation | one of `{ } : ;` |
//! | Word | the longest run containing none of `{ } : ;` |
//!
//! Words are trimmed, and every run of whitespace inside them becomes a
//! single `.`: `group dmx_out` is the key `group.dmx_out`. A quote in the
//! middle of a word does not start a quoted string.
//!
//! # Entries
//!
//! | Form | Meaning |
//! |------|---------|
//! | `key: value` | scalar entry; an optional `;` may follow |
//! | `key { ... }` | nested block |
//! | `}` or `;` inside a block | closes that block |
//!
//! Because `;` closes a block, `item { ... };` closes both `item` and the
//! block containing it. Keys are used exactly as written: a quoted key keeps
//! its quotes.
//!
//! # Scalar types
//!
//! | Written | Type | Example |
//! |---------|------|---------|
//! | `"..."` | string, quotes removed | `"front wash"` |
//! | `true`, `false` (any case) | boolean | `TRUE` |
//! | `null` (any case) | null | `Null` |
//! | `@x` prefix | string with `0x` prefix | `@xFF00` → `"0xFF00"` |
//! | `-?[0-9]+` | integer | `-42` |
//! | `-?[0-9]+.[0-9]+` | float | `3.14` |
//! | anything else | string | `linear` |
//!
//! # Duplicate keys
//!
//! Writing a key twice in the same block keeps the later value at the
//! earlier position. [`DuplicateKeys::Reject`](crate::DuplicateKeys::Reject)
//! turns this into an error.
//!
//! # Malformed input
//!
//! The default parser accepts any text. A key with no `:` or `{` after it is
//! dropped, a `{` where a key belongs inside a block is ignored, and blocks
//! left open at the end are closed. See [`parser`](crate::parser) for the
//! strict mode that reports these instead.
