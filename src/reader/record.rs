//! Assembled records.

use std::vec;

use serde::de::{self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, Visitor};
use serde::de::value::StringDeserializer;
use serde::forward_to_deserialize_any;

use crate::codec::FieldValue;
use crate::error::{Error, Result};

/// One line after conversion, before decoding into the caller's type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssembledRecord {
    pub(crate) line: u64,
    pub(crate) fields: Vec<(String, FieldValue)>,
}

impl AssembledRecord {
    /// Decode into `T`. Works for both struct and map targets: both accept a
    /// serde map of column name to value.
    ///
    /// Failures while decoding a value name the column they came from.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<T> {
        T::deserialize(self)
    }
}

impl<'de> de::Deserializer<'de> for AssembledRecord {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_map(Columns {
            fields: self.fields.into_iter(),
            current: None,
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Column/value pairs, remembering the column whose value is being decoded.
struct Columns {
    fields: vec::IntoIter<(String, FieldValue)>,
    current: Option<(String, FieldValue)>,
}

impl<'de> MapAccess<'de> for Columns {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        let Some((column, value)) = self.fields.next() else {
            return Ok(None);
        };
        let key: StringDeserializer<Error> = column.clone().into_deserializer();
        let key = seed.deserialize(key).map_err(|e| e.in_column(&column))?;
        self.current = Some((column, value));
        Ok(Some(key))
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        let (column, value) = self
            .current
            .take()
            .ok_or_else(|| <Error as de::Error>::custom("value requested before its column"))?;
        seed.deserialize(value).map_err(|e| e.in_column(&column))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.len() + usize::from(self.current.is_some()))
    }
}
