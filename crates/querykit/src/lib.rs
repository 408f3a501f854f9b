//! # querykit
//!
//! A fluent assembler for parameterized SQL statements.
//!
//! ## Features
//!
//! - **One builder, four statements**: SELECT, INSERT, UPDATE and DELETE from
//!   the same [`QueryBuilder`]; the last statement-kind call wins
//! - **Values are never inlined**: every value becomes a placeholder (`?` or
//!   `$n`) and is returned alongside the SQL in placeholder order
//! - **Continuous numbering**: UPDATE numbers its SET values first and the
//!   WHERE clause picks up where they left off
//! - **Identifier filtering**: names, operators and join conditions pass
//!   through a denylist filter; [`IdentPolicy::Allowlist`] keeps
//!   grammar-valid names untouched
//! - **Optional validation**: [`QueryBuilder::issues`] and
//!   [`QueryBuilder::try_build`] report what `build` would silently drop
//!
//! ```
//! use querykit::{Value, table};
//!
//! let mut qb = table("users");
//! qb.select(["id", "name", "email"])
//!     .and_where("age", ">", 18)
//!     .and_where("active", "=", true)
//!     .order_by("name")
//!     .limit(10);
//!
//! let query = qb.build();
//! assert_eq!(
//!     query.sql(),
//!     "select id, name, email from users where age > $1 and active = $2 order by name limit 10"
//! );
//! assert_eq!(query.params(), &[Value::I32(18), Value::Bool(true)]);
//! ```
//!
//! ## Safety
//!
//! The sanitizer is a best-effort denylist. It mangles legitimate names that
//! contain keywords (`created_at` renders as `"d_at"`) and does not make
//! arbitrary input safe. Prefer fixed identifiers in code, or opt into
//! [`IdentPolicy::Allowlist`].

pub mod builder;
pub mod config;
pub mod error;
pub mod ident;
pub mod placeholder;
pub mod sanitize;
pub mod value;

pub use builder::{
    JoinKind, JoinSpec, Joiner, Predicate, Query, QueryBuilder, StatementKind, table,
};
pub use config::BuilderConfig;
pub use error::{BuildError, BuildResult, Issue};
pub use ident::{Ident, IdentPart};
pub use placeholder::ParamStyle;
pub use sanitize::{
    IdentContext, IdentPolicy, is_apparently_safe, safe_identifier, sanitize_strict,
    strip_keywords,
};
pub use value::Value;
