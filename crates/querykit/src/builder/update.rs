use super::built::Query;
use super::query::QueryBuilder;
use super::where_clause::render_where;
use crate::sanitize::IdentContext;

impl QueryBuilder {
    /// `update table set col = $1, ...[ where][ order by][ limit]`
    ///
    /// SET values take ordinals 1..=N and WHERE continues from N+1.
    pub(super) fn render_update(&self) -> Query {
        let mut sql = String::from("update ");
        sql.push_str(&self.name(&self.table, IdentContext::Table));
        sql.push_str(" set ");

        let mut params = Vec::with_capacity(self.assignments.len() + self.predicates.len());
        let mut param_count = 0;
        for (i, (col, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&self.name(col, IdentContext::SetColumn));
            sql.push_str(" = ");
            param_count += 1;
            self.param_style.write_placeholder(&mut sql, param_count);
            params.push(value.clone());
        }

        let filter = render_where(
            &self.predicates,
            self.param_style,
            self.ident_policy,
            param_count,
        );
        sql.push_str(&filter.sql);
        params.extend(filter.params);

        self.push_order_by(&mut sql);
        self.push_limit(&mut sql);

        Query::new(sql, params)
    }
}
