use std::borrow::Cow;

use super::StatementKind;
use super::built::Query;
use super::join::{JoinKind, JoinSpec};
use super::where_clause::{Joiner, Predicate};
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};
use crate::placeholder::ParamStyle;
use crate::sanitize::{IdentContext, IdentPolicy, render_identifier};
use crate::value::Value;

/// Fluent statement builder.
///
/// Declarations mutate the record in place and return `&mut Self`; nothing is
/// rendered until [`build`](Self::build), which can be called any number of
/// times with identical output.
///
/// ```
/// use querykit::{ParamStyle, QueryBuilder, Value};
///
/// let mut qb = QueryBuilder::new();
/// qb.table("users").delete().and_where("id", "=", 1);
/// qb.param_style(ParamStyle::QuestionMark);
///
/// let query = qb.build();
/// assert_eq!(query.sql(), "delete from users where id = ?");
/// assert_eq!(query.params(), &[Value::I32(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    /// Renderer selected by the last select/insert/update/delete call
    pub(super) kind: StatementKind,
    pub(super) table: String,
    pub(super) table_alias: Option<String>,
    /// Projection (default `["*"]`)
    pub(super) columns: Vec<String>,
    pub(super) predicates: Vec<Predicate>,
    pub(super) joins: Vec<JoinSpec>,
    pub(super) order: Option<String>,
    pub(super) limit: Option<u64>,
    pub(super) offset: Option<u64>,
    pub(super) param_style: ParamStyle,
    pub(super) ident_policy: IdentPolicy,
    pub(super) insert_columns: Vec<String>,
    pub(super) insert_values: Vec<Value>,
    /// SET assignments, in declaration order
    pub(super) assignments: Vec<(String, Value)>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::with_config(&BuilderConfig::default())
    }
}

impl QueryBuilder {
    /// Empty SELECT builder: wildcard projection, `$n` placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder seeded with `config`.
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            kind: StatementKind::Select,
            table: String::new(),
            table_alias: None,
            columns: vec!["*".to_string()],
            predicates: Vec::new(),
            joins: Vec::new(),
            order: None,
            limit: None,
            offset: None,
            param_style: config.param_style,
            ident_policy: config.ident_policy,
            insert_columns: Vec::new(),
            insert_values: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Placeholder style for the whole statement.
    pub fn param_style(&mut self, style: ParamStyle) -> &mut Self {
        self.param_style = style;
        self
    }

    pub fn ident_policy(&mut self, policy: IdentPolicy) -> &mut Self {
        self.ident_policy = policy;
        self
    }

    pub fn table(&mut self, name: &str) -> &mut Self {
        self.table = name.to_string();
        self
    }

    /// Alias for the table in FROM position. Empty clears it.
    pub fn alias(&mut self, alias: &str) -> &mut Self {
        self.table_alias = non_empty(alias);
        self
    }

    // ==================== Statement kinds ====================

    /// Switch to SELECT. An empty column list keeps the current projection.
    pub fn select<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = StatementKind::Select;
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if !columns.is_empty() {
            self.columns = columns;
        }
        self
    }

    /// Switch to INSERT with `(column, value)` pairs, replacing any previous
    /// payload. Pair order is the rendered column order.
    pub fn insert<I, K, V>(&mut self, data: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.kind = StatementKind::Insert;
        let (columns, values) = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        self.insert_columns = columns;
        self.insert_values = values;
        self
    }

    /// Switch to INSERT and replace the column list.
    pub fn insert_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = StatementKind::Insert;
        self.insert_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the INSERT value list (positional with `insert_columns`).
    pub fn values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.insert_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Switch to UPDATE with `(column, value)` pairs, replacing any previous
    /// assignments.
    pub fn update<I, K, V>(&mut self, data: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.kind = StatementKind::Update;
        self.assignments = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Switch to UPDATE and append one assignment.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.kind = StatementKind::Update;
        self.assignments.push((column.to_string(), value.into()));
        self
    }

    pub fn delete(&mut self) -> &mut Self {
        self.kind = StatementKind::Delete;
        self
    }

    // ==================== Conditions ====================

    fn push_predicate(
        &mut self,
        column: &str,
        operator: &str,
        value: Value,
        joiner: Joiner,
    ) -> &mut Self {
        self.predicates.push(Predicate {
            column: column.to_string(),
            operator: operator.to_string(),
            value,
            joiner,
        });
        self
    }

    /// Add `column operator ?` joined with AND.
    pub fn and_where(
        &mut self,
        column: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.push_predicate(column, operator, value.into(), Joiner::And)
    }

    /// Add `column operator ?` joined with OR.
    pub fn or_where(
        &mut self,
        column: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.push_predicate(column, operator, value.into(), Joiner::Or)
    }

    // ==================== Joins ====================

    /// Add a join of any kind. An empty alias is the same as `None`.
    pub fn join_with(
        &mut self,
        kind: JoinKind,
        table: &str,
        alias: Option<&str>,
        condition: &str,
    ) -> &mut Self {
        self.joins.push(JoinSpec {
            kind,
            table: table.to_string(),
            alias: alias.and_then(non_empty),
            condition: condition.to_string(),
        });
        self
    }

    pub fn join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Join, table, None, condition)
    }

    pub fn left_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Left, table, None, condition)
    }

    pub fn right_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Right, table, None, condition)
    }

    pub fn inner_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Inner, table, None, condition)
    }

    pub fn full_join(&mut self, table: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Full, table, None, condition)
    }

    pub fn join_as(&mut self, table: &str, alias: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Join, table, Some(alias), condition)
    }

    pub fn left_join_as(&mut self, table: &str, alias: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Left, table, Some(alias), condition)
    }

    pub fn right_join_as(&mut self, table: &str, alias: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Right, table, Some(alias), condition)
    }

    pub fn inner_join_as(&mut self, table: &str, alias: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Inner, table, Some(alias), condition)
    }

    pub fn full_join_as(&mut self, table: &str, alias: &str, condition: &str) -> &mut Self {
        self.join_with(JoinKind::Full, table, Some(alias), condition)
    }

    // ==================== Ordering & pagination ====================

    /// Single free-text ordering expression. Empty clears it.
    pub fn order_by(&mut self, expr: &str) -> &mut Self {
        self.order = non_empty(expr);
        self
    }

    /// `limit(0)` renders `limit 0`; only never calling it omits the clause.
    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    // ==================== SQL build ====================

    /// Render the statement. Never fails and never mutates the record.
    pub fn build(&self) -> Query {
        let query = match self.kind {
            StatementKind::Select => self.render_select(),
            StatementKind::Insert => self.render_insert(),
            StatementKind::Update => self.render_update(),
            StatementKind::Delete => self.render_delete(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "querykit::sql",
            kind = %self.kind,
            param_count = query.params().len(),
            sql = query.sql(),
            "statement assembled"
        );

        query
    }

    /// Fail with every structural issue, if any.
    pub fn validate(&self) -> BuildResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(BuildError::Invalid { issues })
        }
    }

    /// [`validate`](Self::validate), then [`build`](Self::build).
    pub fn try_build(&self) -> BuildResult<Query> {
        self.validate()?;
        Ok(self.build())
    }

    // ==================== Render helpers ====================

    pub(super) fn name<'a>(&self, input: &'a str, context: IdentContext) -> Cow<'a, str> {
        render_identifier(input, self.ident_policy, context)
    }

    pub(super) fn push_order_by(&self, sql: &mut String) {
        if let Some(order) = &self.order {
            sql.push_str(" order by ");
            sql.push_str(&self.name(order, IdentContext::OrderBy));
        }
    }

    pub(super) fn push_limit(&self, sql: &mut String) {
        if let Some(limit) = self.limit {
            sql.push_str(" limit ");
            sql.push_str(&limit.to_string());
        }
    }

    pub(super) fn push_offset(&self, sql: &mut String) {
        if let Some(offset) = self.offset {
            sql.push_str(" offset ");
            sql.push_str(&offset.to_string());
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
