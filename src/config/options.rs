//! Reader options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TokenizerOptions;
#[cfg(any(feature = "json", feature = "yaml"))]
use crate::error::{Error, Result};

/// Options accepted by `Reader::new`.
///
/// Can be built in code or loaded from a config file:
///
/// ```yaml
/// read_headers: false
/// column_names: [id, created, tags]
/// column_formats:
///   created: unix
/// tokenizer:
///   delimiter: ";"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Take column names from the first line; overrides `column_names`
    pub read_headers: bool,
    /// Column name for each field position
    pub column_names: Vec<String>,
    /// Time format per column: "unix" or a strftime pattern
    pub column_formats: HashMap<String, String>,
    /// Tokenizer settings
    pub tokenizer: TokenizerOptions,
}

impl ReaderOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column names.
    pub fn with_column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the time format for one column.
    pub fn with_column_format(
        mut self,
        column: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        self.column_formats.insert(column.into(), format.into());
        self
    }

    /// Derive column names from the first line.
    pub fn with_read_headers(mut self, read_headers: bool) -> Self {
        self.read_headers = read_headers;
        self
    }

    /// Set the tokenizer settings.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerOptions) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Parse options from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Options(e.to_string()))
    }

    /// Parse options from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| Error::Options(e.to_string()))
    }
}
