use super::built::Query;
use super::join::render_joins;
use super::query::QueryBuilder;
use super::where_clause::render_where;
use crate::sanitize::IdentContext;

impl QueryBuilder {
    /// `select cols from table[ as alias][ joins][ where][ order by][ limit][ offset]`
    ///
    /// Only the WHERE clause binds values, so numbering starts at 1 there.
    pub(super) fn render_select(&self) -> Query {
        let mut sql = String::from("select ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&self.name(col, IdentContext::Column));
        }

        sql.push_str(" from ");
        sql.push_str(&self.name(&self.table, IdentContext::Table));
        if let Some(alias) = &self.table_alias {
            sql.push_str(" as ");
            sql.push_str(&self.name(alias, IdentContext::TableAlias));
        }

        sql.push_str(&render_joins(&self.joins, self.ident_policy));

        let filter = render_where(&self.predicates, self.param_style, self.ident_policy, 0);
        sql.push_str(&filter.sql);

        self.push_order_by(&mut sql);
        self.push_limit(&mut sql);
        self.push_offset(&mut sql);

        Query::new(sql, filter.params)
    }
}
