//! Pass-through settings for the underlying CSV tokenizer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tokenizer settings forwarded to `csv::ReaderBuilder`.
///
/// Header handling and record-length checks are not configurable here: the
/// reader always tokenizes the header itself and reports field-count
/// mismatches as `Error::ColumnNamesMismatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Field delimiter
    pub delimiter: char,
    /// Quote character
    pub quote: char,
    /// Whether quotes are recognized at all
    pub quoting: bool,
    /// Whether `""` inside a quoted field is an escaped quote
    pub double_quote: bool,
    /// Escape character used instead of doubled quotes
    pub escape: Option<char>,
    /// Lines starting with this character are skipped
    pub comment: Option<char>,
    /// Trim surrounding whitespace from every field, header included
    pub trim: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            quoting: true,
            double_quote: true,
            escape: None,
            comment: None,
            trim: false,
        }
    }
}

fn ascii(name: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(Error::Options(format!("{name} must be an ASCII character, got '{c}'")))
    }
}

impl TokenizerOptions {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the comment character.
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Enable or disable whitespace trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Build the csv reader configuration.
    pub(crate) fn builder(&self) -> Result<csv::ReaderBuilder> {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(ascii("delimiter", self.delimiter)?)
            .quote(ascii("quote", self.quote)?)
            .quoting(self.quoting)
            .double_quote(self.double_quote)
            .escape(self.escape.map(|c| ascii("escape", c)).transpose()?)
            .comment(self.comment.map(|c| ascii("comment", c)).transpose()?)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        Ok(builder)
    }
}
