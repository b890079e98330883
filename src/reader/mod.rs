//! The record reader.
//!
//! A `Reader` owns the tokenizer cursor, the column schema and the column
//! formats. Each call to `read` consumes one line:
//!
//! 1. tokenize the next line (end of input is `Ok(None)`);
//! 2. reject it if the field count differs from the number of column names;
//! 3. resolve the target's shape (once per type, then cached);
//! 4. convert every field whose column names a member of the target;
//! 5. decode the converted fields into the target.
//!
//! Steps 1-4 produce an `AssembledRecord`; `read_all` runs them on a producer
//! thread and step 5 on the caller (see `stream`).

use std::any::TypeId;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::codec::{self, TimeFormat};
use crate::config::ReaderOptions;
use crate::error::{Error, Result};
use crate::shape::RecordShape;

mod record;
mod stream;

pub(crate) use record::AssembledRecord;
pub use stream::Records;

/// Reads CSV lines into structs or maps.
#[derive(Debug)]
pub struct Reader<R> {
    csv: csv::Reader<R>,
    column_names: Vec<String>,
    column_formats: HashMap<String, TimeFormat>,
    shapes: HashMap<TypeId, Arc<RecordShape>>,
    line: csv::StringRecord,
}

impl Reader<File> {
    /// Open a file and create a reader over it.
    pub fn from_path(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let file = File::open(path)?;
        Reader::new(file, options)
    }
}

impl<R: io::Read> Reader<R> {
    /// Create a reader over `source`.
    ///
    /// With `read_headers` set, the first line is consumed here and becomes
    /// the column schema; failures are reported as header errors.
    pub fn new(source: R, options: ReaderOptions) -> Result<Self> {
        let csv = options.tokenizer.builder()?.from_reader(source);
        let column_formats = options
            .column_formats
            .iter()
            .map(|(column, format)| (column.clone(), TimeFormat::from_format_str(format)))
            .collect();

        let mut reader = Self {
            csv,
            column_names: Vec::new(),
            column_formats,
            shapes: HashMap::new(),
            line: csv::StringRecord::new(),
        };

        reader.column_names = if options.read_headers {
            reader.read_header()?
        } else {
            options.column_names
        };

        Ok(reader)
    }

    fn read_header(&mut self) -> Result<Vec<String>> {
        let mut header = csv::StringRecord::new();
        if !self.csv.read_record(&mut header).map_err(Error::Header)? {
            return Err(Error::EmptyHeader);
        }
        let names: Vec<String> = header.iter().map(unquote).collect();
        debug!(columns = names.len(), "derived column names from header");
        Ok(names)
    }

    /// Column name for each field position.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Time format per column.
    pub fn column_formats(&self) -> &HashMap<String, TimeFormat> {
        &self.column_formats
    }

    /// Position of the tokenizer in the input.
    pub fn position(&self) -> &csv::Position {
        self.csv.position()
    }

    /// Read the next line into a `T`.
    ///
    /// Returns `Ok(None)` once the input is exhausted. `T` must be a struct
    /// or a map keyed by `String`; columns without a matching struct field
    /// are skipped.
    pub fn read<T: DeserializeOwned + 'static>(&mut self) -> Result<Option<T>> {
        match self.assemble::<T>()? {
            Some(record) => record.decode().map(Some),
            None => Ok(None),
        }
    }

    /// Iterate over the remaining lines, decoding each into a `T`.
    ///
    /// The iterator ends after the first error.
    pub fn records<T: DeserializeOwned + 'static>(&mut self) -> Records<'_, R, T> {
        Records::new(self)
    }

    fn shape<T: DeserializeOwned + 'static>(&mut self) -> Result<Arc<RecordShape>> {
        let id = TypeId::of::<T>();
        if let Some(shape) = self.shapes.get(&id) {
            return Ok(Arc::clone(shape));
        }
        let shape = Arc::new(RecordShape::resolve::<T>()?);
        debug!(
            target_type = std::any::type_name::<T>(),
            kind = ?shape.kind(),
            "resolved record shape"
        );
        self.shapes.insert(id, Arc::clone(&shape));
        Ok(shape)
    }

    /// Tokenize and convert the next line for a `T` target.
    pub(crate) fn assemble<T: DeserializeOwned + 'static>(
        &mut self,
    ) -> Result<Option<AssembledRecord>> {
        if !self.csv.read_record(&mut self.line)? {
            return Ok(None);
        }
        let line = self
            .line
            .position()
            .map_or_else(|| self.csv.position().line(), csv::Position::line);

        if self.line.len() != self.column_names.len() {
            return Err(Error::ColumnNamesMismatch {
                line,
                expected: self.column_names.len(),
                found: self.line.len(),
            });
        }

        let shape = self.shape::<T>()?;
        let mut fields = Vec::with_capacity(self.line.len());
        for (column, raw) in self.column_names.iter().zip(self.line.iter()) {
            let Some(field) = shape.field(column) else {
                continue;
            };
            let (kind, sequence) = field.parts().ok_or_else(|| Error::InvalidFieldType {
                column: column.clone(),
            })?;
            let value = codec::encode(
                raw,
                kind,
                sequence,
                column,
                self.column_formats.get(column),
            )?;
            fields.push((column.clone(), value));
        }

        trace!(line, fields = fields.len(), "assembled record");
        Ok(Some(AssembledRecord { line, fields }))
    }
}

/// Strip one leading and one trailing quote character (`"` or `'`).
///
/// The two ends are checked independently, so `"name'` becomes `name`.
pub(crate) fn unquote(name: &str) -> String {
    let name = name.strip_prefix(['"', '\'']).unwrap_or(name);
    let name = name.strip_suffix(['"', '\'']).unwrap_or(name);
    name.to_string()
}
