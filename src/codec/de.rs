//! `FieldValue` as a serde deserializer.

use serde::de::value::{SeqDeserializer, StringDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

use super::FieldValue;
use crate::datetime::{self, TIME_MARKER};
use crate::error::Error;

impl<'de> de::Deserializer<'de> for FieldValue {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            FieldValue::Int(v) => visitor.visit_i64(v),
            FieldValue::Uint(v) => visitor.visit_u64(v),
            FieldValue::Float(v) => visitor.visit_f64(v),
            FieldValue::Bool(v) => visitor.visit_bool(v),
            FieldValue::Str(v) => visitor.visit_string(v),
            FieldValue::Time(t) => visitor.visit_string(datetime::render(&t)),
            FieldValue::Seq(items) => {
                let mut seq: SeqDeserializer<_, Error> = SeqDeserializer::new(items.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self {
            FieldValue::Time(t) if name == TIME_MARKER => {
                let text: StringDeserializer<Error> = datetime::render(&t).into_deserializer();
                visitor.visit_newtype_struct(text)
            }
            other => visitor.visit_newtype_struct(other),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct enum
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for FieldValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}
