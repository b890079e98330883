//! Configuration types for readers.
//!
//! This module provides:
//! - `ReaderOptions`: column names, column formats and header mode
//! - `TokenizerOptions`: settings passed through to the CSV tokenizer

mod options;
mod tokenizer;

pub use options::ReaderOptions;
pub use tokenizer::TokenizerOptions;
