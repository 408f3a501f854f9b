//! Structural checks over the statement record.

use std::borrow::Cow;

use super::StatementKind;
use super::query::QueryBuilder;
use crate::error::{BuildError, Issue};
use crate::ident::Ident;
use crate::sanitize::{IdentContext, IdentPolicy, filter_identifier, strip_keywords};

impl QueryBuilder {
    /// Every structural problem in the current record.
    ///
    /// Covers missing pieces, clauses the selected renderer ignores, inputs
    /// the safety filter would rewrite and, under
    /// [`IdentPolicy::Allowlist`], names outside the identifier grammar.
    /// An empty list means `build` renders exactly what was declared.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        if self.table.trim().is_empty() {
            issues.push(Issue::MissingTable);
        }

        let kind = self.kind;
        let mut ignored = |present: bool, clause: &'static str| {
            if present {
                issues.push(Issue::ClauseIgnored { kind, clause });
            }
        };
        match kind {
            StatementKind::Select => {}
            StatementKind::Insert => {
                ignored(self.table_alias.is_some(), "alias");
                ignored(!self.joins.is_empty(), "join");
                ignored(!self.predicates.is_empty(), "where");
                ignored(self.order.is_some(), "order by");
                ignored(self.limit.is_some(), "limit");
                ignored(self.offset.is_some(), "offset");
            }
            StatementKind::Update | StatementKind::Delete => {
                ignored(self.table_alias.is_some(), "alias");
                ignored(!self.joins.is_empty(), "join");
                ignored(self.offset.is_some(), "offset");
            }
        }

        match kind {
            StatementKind::Insert if self.insert_columns.len() != self.insert_values.len() => {
                issues.push(Issue::ColumnValueMismatch {
                    kind,
                    columns: self.insert_columns.len(),
                    values: self.insert_values.len(),
                });
            }
            StatementKind::Update if self.assignments.is_empty() => {
                issues.push(Issue::EmptySet);
            }
            _ => {}
        }

        for (context, input) in self.rendered_names() {
            if context == IdentContext::Table && input.is_empty() {
                continue;
            }
            if self.ident_policy == IdentPolicy::Allowlist && context.is_name() {
                if let Err(err) = Ident::parse(input) {
                    let reason = match err {
                        BuildError::Identifier(reason) => reason,
                        other => other.to_string(),
                    };
                    issues.push(Issue::InvalidIdentifier {
                        context,
                        name: input.to_string(),
                        reason,
                    });
                }
            }
            if let Cow::Owned(rendered) = filter_identifier(input, self.ident_policy) {
                issues.push(Issue::SanitizedIdentifier {
                    context,
                    original: input.to_string(),
                    rendered,
                });
            }
        }

        for (context, input) in self.rendered_expressions() {
            if let Cow::Owned(rendered) = strip_keywords(input) {
                issues.push(Issue::SanitizedIdentifier {
                    context,
                    original: input.to_string(),
                    rendered,
                });
            }
        }

        issues
    }

    /// Names the selected renderer will emit, in rendering order.
    fn rendered_names(&self) -> Vec<(IdentContext, &str)> {
        let mut names = Vec::new();
        match self.kind {
            StatementKind::Select => {
                names.extend(self.columns.iter().map(|c| (IdentContext::Column, c.as_str())));
                names.push((IdentContext::Table, self.table.as_str()));
                if let Some(alias) = &self.table_alias {
                    names.push((IdentContext::TableAlias, alias.as_str()));
                }
                for join in &self.joins {
                    names.push((IdentContext::JoinTable, join.table.as_str()));
                    if let Some(alias) = &join.alias {
                        names.push((IdentContext::JoinAlias, alias.as_str()));
                    }
                }
            }
            StatementKind::Insert => {
                names.push((IdentContext::Table, self.table.as_str()));
                names.extend(
                    self.insert_columns
                        .iter()
                        .map(|c| (IdentContext::InsertColumn, c.as_str())),
                );
                return names;
            }
            StatementKind::Update => {
                names.push((IdentContext::Table, self.table.as_str()));
                names.extend(
                    self.assignments
                        .iter()
                        .map(|(c, _)| (IdentContext::SetColumn, c.as_str())),
                );
            }
            StatementKind::Delete => {
                names.push((IdentContext::Table, self.table.as_str()));
            }
        }
        names.extend(
            self.predicates
                .iter()
                .map(|p| (IdentContext::PredicateColumn, p.column.as_str())),
        );
        if let Some(order) = &self.order {
            names.push((IdentContext::OrderBy, order.as_str()));
        }
        names
    }

    /// Operators and join conditions the selected renderer will emit.
    fn rendered_expressions(&self) -> Vec<(IdentContext, &str)> {
        let mut exprs = Vec::new();
        if self.kind == StatementKind::Insert {
            return exprs;
        }
        if self.kind == StatementKind::Select {
            exprs.extend(
                self.joins
                    .iter()
                    .map(|j| (IdentContext::JoinCondition, j.condition.as_str())),
            );
        }
        exprs.extend(
            self.predicates
                .iter()
                .map(|p| (IdentContext::Operator, p.operator.as_str())),
        );
        exprs
    }
}
