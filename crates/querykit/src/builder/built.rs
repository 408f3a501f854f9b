use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// A rendered statement: SQL text and the values for its placeholders.
///
/// `params()[i]` belongs to the i-th placeholder in `sql()`, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    sql: String,
    params: Vec<Value>,
}

impl Query {
    pub(super) fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Parameters as references compatible with tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
