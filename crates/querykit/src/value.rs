//! Bound parameter values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A value bound to one placeholder.
///
/// The builder never inspects values; they travel positionally next to the
/// SQL text until a driver sends them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeUtc(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    DateTime<Utc> => DateTimeUtc,
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::I64(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use std::error::Error;

    use bytes::BytesMut;
    use tokio_postgres::types::{IsNull, ToSql, Type};

    use super::Value;

    /// Forward to the wrapped value; `Null` is SQL NULL for any type.
    macro_rules! forward {
        ($value:expr, $v:ident => $call:expr) => {
            match $value {
                Value::Null => Ok(IsNull::Yes),
                Value::Bool($v) => $call,
                Value::I16($v) => $call,
                Value::I32($v) => $call,
                Value::I64($v) => $call,
                Value::F32($v) => $call,
                Value::F64($v) => $call,
                Value::Text($v) => $call,
                Value::Bytes($v) => $call,
                Value::Json($v) => $call,
                Value::Uuid($v) => $call,
                Value::Date($v) => $call,
                Value::DateTime($v) => $call,
                Value::DateTimeUtc($v) => $call,
            }
        };
    }

    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            forward!(self, v => v.to_sql(ty, out))
        }

        // The variant is only known at runtime; the type check happens in
        // `to_sql_checked` against the wrapped value.
        fn accepts(_ty: &Type) -> bool {
            true
        }

        fn to_sql_checked(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            forward!(self, v => v.to_sql_checked(ty, out))
        }
    }
}
