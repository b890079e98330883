//! Type-shape resolution for record targets.
//!
//! This module provides:
//! - `ScalarKind`: the closed set of primitive categories a column can fill
//! - `FieldShape`: scalar, sequence of scalars, or an explicit rejection
//! - `RecordShape`: struct (per-field shapes) or map (one value shape)
//!
//! Shapes are discovered by running the target's `Deserialize` impl against
//! probing deserializers (see `probe`) and recording which part of the serde
//! data model it asks for. Field wrappers (`Option`, `Box`, newtype structs)
//! resolve to the shape of what they wrap; a record target may be boxed.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

mod probe;

/// Primitive value categories a single text field can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// i8, i16, i32, i64
    SignedInteger,
    /// u8, u16, u32, u64
    UnsignedInteger,
    /// f32, f64
    Float,
    Boolean,
    String,
    /// A field marked with `datetime` or `Timestamp`
    Time,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::SignedInteger => write!(f, "signed integer"),
            ScalarKind::UnsignedInteger => write!(f, "unsigned integer"),
            ScalarKind::Float => write!(f, "float"),
            ScalarKind::Boolean => write!(f, "boolean"),
            ScalarKind::String => write!(f, "string"),
            ScalarKind::Time => write!(f, "time"),
        }
    }
}

/// Shape of one target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single scalar value
    Scalar(ScalarKind),
    /// A homogeneous sequence of scalars, read from a comma separated field
    Sequence(ScalarKind),
    /// Anything that cannot be filled from one text field
    Unsupported,
}

impl FieldShape {
    /// Scalar kind and whether the field is a sequence, or `None` when
    /// the shape is unsupported.
    pub fn parts(self) -> Option<(ScalarKind, bool)> {
        match self {
            FieldShape::Scalar(kind) => Some((kind, false)),
            FieldShape::Sequence(kind) => Some((kind, true)),
            FieldShape::Unsupported => None,
        }
    }
}

/// Whether a target is a struct or a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Struct,
    Map,
}

/// Resolved shape of a record target type.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape {
    /// Named fields, keyed by their serialized names
    Struct {
        fields: HashMap<&'static str, FieldShape>,
    },
    /// Every column becomes an entry with the map's value shape
    Map { values: FieldShape },
}

impl RecordShape {
    /// Resolve the shape of `T`.
    ///
    /// Fails with `UnsupportedTargetType` when `T` is not a struct or a map
    /// with string keys. Unsupported field types do not fail here; they are
    /// reported when a column maps onto them.
    pub fn resolve<T: DeserializeOwned>() -> Result<Self> {
        match probe::record_kind::<T>() {
            Some(probe::Record::Struct(names)) => {
                let fields = names
                    .iter()
                    .map(|&name| {
                        let shape =
                            probe::field_shape::<T>(name).unwrap_or(FieldShape::Unsupported);
                        (name, shape)
                    })
                    .collect();
                Ok(RecordShape::Struct { fields })
            }
            Some(probe::Record::Map) => {
                // A non-string key type fails the key probe, which leaves
                // no field shape behind.
                let values = probe::field_shape::<T>("").ok_or(Error::UnsupportedTargetType)?;
                Ok(RecordShape::Map { values })
            }
            None => Err(Error::UnsupportedTargetType),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RecordShape::Struct { .. } => RecordKind::Struct,
            RecordShape::Map { .. } => RecordKind::Map,
        }
    }

    /// Shape of the member named `column`, or `None` if the target has no
    /// such member.
    pub fn field(&self, column: &str) -> Option<FieldShape> {
        match self {
            RecordShape::Struct { fields } => fields.get(column).copied(),
            RecordShape::Map { values } => Some(*values),
        }
    }
}
