use super::built::Query;
use super::query::QueryBuilder;
use super::where_clause::render_where;
use crate::sanitize::IdentContext;

impl QueryBuilder {
    /// `delete from table[ where][ order by][ limit]`
    pub(super) fn render_delete(&self) -> Query {
        let mut sql = String::from("delete from ");
        sql.push_str(&self.name(&self.table, IdentContext::Table));

        let filter = render_where(&self.predicates, self.param_style, self.ident_policy, 0);
        sql.push_str(&filter.sql);

        self.push_order_by(&mut sql);
        self.push_limit(&mut sql);

        Query::new(sql, filter.params)
    }
}
