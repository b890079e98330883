//! # csvee
//!
//! Map CSV records onto typed structs and maps.
//!
//! ## Overview
//!
//! csvee provides:
//! - **Column schemas**: name each field position explicitly, or take the
//!   names from a header line
//! - **Shape-driven conversion**: every field is converted according to the
//!   type of the struct member (or map value) it lands in
//! - **Time columns**: per-column formats, RFC 3339 by default, `"unix"` for
//!   epoch seconds, or any strftime pattern
//! - **Sequences**: comma separated fields fill `Vec` members
//! - **Streaming**: `read_all` converts and decodes in a pipeline without
//!   buffering the whole input
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csvee::{Reader, ReaderOptions, Timestamp, TIME_FORMAT_UNIX};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Row {
//!     id: u32,
//!     tags: Vec<String>,
//!     created: Timestamp,
//! }
//!
//! fn main() -> csvee::Result<()> {
//!     let data = "7,\"a,b\",1613235342\n";
//!     let options = ReaderOptions::new()
//!         .with_column_names(["id", "tags", "created"])
//!         .with_column_format("created", TIME_FORMAT_UNIX);
//!
//!     let mut reader = Reader::new(data.as_bytes(), options)?;
//!     let mut rows: Vec<Row> = Vec::new();
//!     reader.read_all(&mut rows)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Mapping rules
//!
//! - Integer, float and boolean members are parsed from the field text.
//! - String members receive the field text unchanged.
//! - Time members (`Timestamp`, or `DateTime<Utc>` with
//!   `#[serde(with = "csvee::datetime")]`) are parsed with the column's
//!   format and normalized to RFC 3339 before decoding.
//! - `Vec` members split the field on `,`. Commas cannot be escaped inside
//!   sequence elements. An empty field is an empty `Vec`.
//! - `Option` and `Box` wrappers are transparent.
//! - Columns without a matching struct member are ignored. Map targets
//!   receive every column.
//! - Struct members without a column are not zero-filled: give them
//!   `#[serde(default)]` or make them `Option`, otherwise the read fails with
//!   `Error::Decode` naming the member.
//! - Width checks happen while decoding, so `300` into a `u8` member is an
//!   `Error::Decode` naming the column.
//!
//! ## Features
//!
//! - `json` - load `ReaderOptions` from JSON
//! - `yaml` - load `ReaderOptions` from YAML
//! - `miette` - pretty error reporting with miette

pub mod codec;
pub mod config;
pub mod datetime;
pub mod error;
pub mod reader;
pub mod shape;

// Re-exports for convenience
pub use codec::{FieldValue, TIME_FORMAT_UNIX, TimeError, TimeFormat};
pub use config::{ReaderOptions, TokenizerOptions};
pub use datetime::Timestamp;
pub use error::{Error, Result};
pub use reader::{Reader, Records};
pub use shape::{FieldShape, RecordKind, RecordShape, ScalarKind};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReadDiagnostic;
