//! Statement builder.
//!
//! A [`QueryBuilder`] accumulates declarations (table, columns, predicates,
//! joins, ordering, pagination, mutation payloads) and renders them on
//! [`build`](QueryBuilder::build) into a [`Query`]: SQL text plus the values
//! bound to its placeholders, in placeholder order.
//!
//! ## Design
//!
//! - Declarations never fail; [`QueryBuilder::issues`] reports structural
//!   problems for callers that want to check before building.
//! - Placeholders are numbered by the renderer. UPDATE numbers its SET values
//!   first and the WHERE clause continues the same count.
//! - Names pass through the [`sanitize`](crate::sanitize) layer; operators and
//!   join conditions through its permissive filter. Values are never inlined.

use std::fmt;

mod built;
mod delete;
mod insert;
mod join;
mod query;
mod select;
mod update;
mod validate;
mod where_clause;

pub use built::Query;
pub use join::{JoinKind, JoinSpec};
pub use query::QueryBuilder;
pub use where_clause::{Joiner, Predicate};

/// Which renderer `build` dispatches to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatementKind {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create a builder targeting `name`.
///
/// # Example
/// ```
/// let mut qb = querykit::table("users");
/// qb.select(["id", "name"]).and_where("age", ">", 18);
/// assert_eq!(qb.build().sql(), "select id, name from users where age > $1");
/// ```
pub fn table(name: &str) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.table(name);
    qb
}
