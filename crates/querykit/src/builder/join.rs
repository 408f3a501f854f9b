use crate::sanitize::{IdentContext, IdentPolicy, render_expression, render_identifier};

/// Join flavour. Rendered upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Join,
    Left,
    Right,
    Inner,
    Full,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Inner => "INNER JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

/// A declared join. `condition` is literal SQL; joins never bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,
    pub condition: String,
}

/// Render every join as `" KIND table[ as alias] on condition"`.
pub(super) fn render_joins(joins: &[JoinSpec], policy: IdentPolicy) -> String {
    let mut sql = String::new();
    for join in joins {
        sql.push(' ');
        sql.push_str(join.kind.as_sql());
        sql.push(' ');
        sql.push_str(&render_identifier(&join.table, policy, IdentContext::JoinTable));
        if let Some(alias) = &join.alias {
            sql.push_str(" as ");
            sql.push_str(&render_identifier(alias, policy, IdentContext::JoinAlias));
        }
        sql.push_str(" on ");
        sql.push_str(&render_expression(&join.condition, IdentContext::JoinCondition));
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_spec(kind: JoinKind, table: &str, alias: Option<&str>, condition: &str) -> JoinSpec {
        JoinSpec {
            kind,
            table: table.to_string(),
            alias: alias.map(str::to_string),
            condition: condition.to_string(),
        }
    }

    #[test]
    fn renders_in_declared_order() {
        let joins = [
            join_spec(JoinKind::Left, "customers", None, "customers.id = orders.customer_id"),
            join_spec(JoinKind::Inner, "order_items", Some("oi"), "oi.order_id = orders.id"),
        ];
        assert_eq!(
            render_joins(&joins, IdentPolicy::Denylist),
            " LEFT JOIN customers on customers.id = orders.customer_id \
             INNER JOIN order_items as oi on oi.order_id = orders.id"
        );
    }

    #[test]
    fn every_kind_is_upper_case() {
        let kinds = [
            (JoinKind::Join, "JOIN"),
            (JoinKind::Left, "LEFT JOIN"),
            (JoinKind::Right, "RIGHT JOIN"),
            (JoinKind::Inner, "INNER JOIN"),
            (JoinKind::Full, "FULL JOIN"),
        ];
        for (kind, sql) in kinds {
            assert_eq!(kind.as_sql(), sql);
        }
    }

    #[test]
    fn condition_keeps_syntax_but_loses_keywords() {
        let joins = [join_spec(
            JoinKind::Join,
            "accounts",
            None,
            "accounts.id = users.account_id; DROP TABLE logs; --",
        )];
        assert_eq!(
            render_joins(&joins, IdentPolicy::Denylist),
            " JOIN accounts on accounts.id = users.account_id;  TABLE logs; --"
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_joins(&[], IdentPolicy::Denylist), "");
    }
}
