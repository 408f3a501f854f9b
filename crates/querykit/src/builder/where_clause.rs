//! WHERE clause composition shared by SELECT, UPDATE and DELETE.

use crate::placeholder::ParamStyle;
use crate::sanitize::{IdentContext, IdentPolicy, render_expression, render_identifier};
use crate::value::Value;

/// How a predicate attaches to the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl Joiner {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// One `column operator placeholder` filter.
///
/// The joiner of the first predicate is never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub operator: String,
    pub value: Value,
    pub joiner: Joiner,
}

/// Rendered WHERE clause.
#[derive(Debug, Default)]
pub(super) struct WhereFragment {
    /// `" where ..."`, or empty when there are no predicates
    pub sql: String,
    /// Values in placeholder order
    pub params: Vec<Value>,
    /// Last ordinal used, for callers that keep numbering
    pub param_count: usize,
}

/// Render `predicates` in declaration order, numbering placeholders after
/// `param_count`.
pub(super) fn render_where(
    predicates: &[Predicate],
    style: ParamStyle,
    policy: IdentPolicy,
    mut param_count: usize,
) -> WhereFragment {
    if predicates.is_empty() {
        return WhereFragment {
            param_count,
            ..WhereFragment::default()
        };
    }

    let mut sql = String::from(" where ");
    let mut params = Vec::with_capacity(predicates.len());
    for (i, pred) in predicates.iter().enumerate() {
        if i > 0 {
            sql.push(' ');
            sql.push_str(pred.joiner.as_sql());
            sql.push(' ');
        }
        sql.push_str(&render_identifier(
            &pred.column,
            policy,
            IdentContext::PredicateColumn,
        ));
        sql.push(' ');
        sql.push_str(&render_expression(&pred.operator, IdentContext::Operator));
        sql.push(' ');
        param_count += 1;
        style.write_placeholder(&mut sql, param_count);
        params.push(pred.value.clone());
    }

    WhereFragment {
        sql,
        params,
        param_count,
    }
}
