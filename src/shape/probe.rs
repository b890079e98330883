//! Probing deserializers.
//!
//! Each probe stands in for real input and stops the target's `Deserialize`
//! impl at the first request that reveals a shape. The finding travels back
//! through the error channel as a `Signal`.

use std::fmt;

use serde::de::value::StrDeserializer;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, SeqAccess, Visitor,
};
use serde::forward_to_deserialize_any;

use super::{FieldShape, ScalarKind};
use crate::datetime::TIME_MARKER;

#[derive(Debug)]
pub(super) enum Record {
    Struct(&'static [&'static str]),
    Map,
}

#[derive(Debug)]
enum Signal {
    Record(Record),
    Field(FieldShape),
    Other(String),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Record(record) => write!(f, "probed record: {record:?}"),
            Signal::Field(shape) => write!(f, "probed field: {shape:?}"),
            Signal::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Signal {}

impl de::Error for Signal {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Signal::Other(msg.to_string())
    }
}

pub(super) fn record_kind<T: DeserializeOwned>() -> Option<Record> {
    match T::deserialize(RecordProbe { field: None }) {
        Err(Signal::Record(record)) => Some(record),
        _ => None,
    }
}

pub(super) fn field_shape<T: DeserializeOwned>(name: &'static str) -> Option<FieldShape> {
    match T::deserialize(RecordProbe { field: Some(name) }) {
        Err(Signal::Field(shape)) => Some(shape),
        _ => None,
    }
}

/// Stands in for a whole record. Without a field it reports the record kind;
/// with one it opens the record and offers that single entry.
struct RecordProbe {
    field: Option<&'static str>,
}

impl RecordProbe {
    fn open<'de, V: Visitor<'de>>(name: &'static str, visitor: V) -> Result<V::Value, Signal> {
        visitor.visit_map(SingleEntry { key: Some(name) })
    }
}

impl<'de> de::Deserializer<'de> for RecordProbe {
    type Error = Signal;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Signal> {
        Err(Signal::Other("not a struct or map".to_string()))
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Signal> {
        match self.field {
            None => Err(Signal::Record(Record::Map)),
            Some(name) => Self::open(name, visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Signal> {
        match self.field {
            None => Err(Signal::Record(Record::Struct(fields))),
            Some(name) => Self::open(name, visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct enum identifier ignored_any
    }
}

struct SingleEntry {
    key: Option<&'static str>,
}

impl<'de> MapAccess<'de> for SingleEntry {
    type Error = Signal;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Signal> {
        match self.key.take() {
            Some(key) => {
                let key: StrDeserializer<'_, Signal> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Signal> {
        seed.deserialize(ValueProbe { in_sequence: false })
    }
}

struct SequenceProbe;

impl<'de> SeqAccess<'de> for SequenceProbe {
    type Error = Signal;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Signal> {
        seed.deserialize(ValueProbe { in_sequence: true }).map(Some)
    }
}

/// Stands in for one field value, or one sequence element.
#[derive(Clone, Copy)]
struct ValueProbe {
    in_sequence: bool,
}

impl ValueProbe {
    fn found(self, kind: ScalarKind) -> Signal {
        if self.in_sequence {
            Signal::Field(FieldShape::Sequence(kind))
        } else {
            Signal::Field(FieldShape::Scalar(kind))
        }
    }

    fn rejected() -> Signal {
        Signal::Field(FieldShape::Unsupported)
    }
}

macro_rules! probe_scalar {
    ($($method:ident => $kind:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Signal> {
                Err(self.found(ScalarKind::$kind))
            }
        )*
    };
}

macro_rules! probe_reject {
    ($($method:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Signal> {
                Err(Self::rejected())
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueProbe {
    type Error = Signal;

    // Types that accept anything are handed the raw text.
    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Signal> {
        Err(self.found(ScalarKind::String))
    }

    probe_scalar! {
        deserialize_bool => Boolean,
        deserialize_i8 => SignedInteger,
        deserialize_i16 => SignedInteger,
        deserialize_i32 => SignedInteger,
        deserialize_i64 => SignedInteger,
        deserialize_u8 => UnsignedInteger,
        deserialize_u16 => UnsignedInteger,
        deserialize_u32 => UnsignedInteger,
        deserialize_u64 => UnsignedInteger,
        deserialize_f32 => Float,
        deserialize_f64 => Float,
        deserialize_str => String,
        deserialize_string => String,
    }

    probe_reject! {
        deserialize_char,
        deserialize_bytes,
        deserialize_byte_buf,
        deserialize_unit,
        deserialize_map,
        deserialize_identifier,
        deserialize_ignored_any,
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Signal> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Signal> {
        if name == TIME_MARKER {
            Err(self.found(ScalarKind::Time))
        } else {
            visitor.visit_newtype_struct(self)
        }
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Signal> {
        if self.in_sequence {
            Err(Self::rejected())
        } else {
            visitor.visit_seq(SequenceProbe)
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _visitor: V,
    ) -> Result<V::Value, Signal> {
        Err(Self::rejected())
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value, Signal> {
        Err(Self::rejected())
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value, Signal> {
        Err(Self::rejected())
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Signal> {
        Err(Self::rejected())
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Signal> {
        Err(Self::rejected())
    }
}
