use super::built::Query;
use super::query::QueryBuilder;
use crate::sanitize::IdentContext;

impl QueryBuilder {
    /// `insert into table (cols) values (placeholders)`
    ///
    /// Without declared columns only `insert into table` is rendered and no
    /// value is bound. One placeholder is emitted per declared value.
    pub(super) fn render_insert(&self) -> Query {
        let mut sql = String::from("insert into ");
        sql.push_str(&self.name(&self.table, IdentContext::Table));

        if self.insert_columns.is_empty() {
            return Query::new(sql, Vec::new());
        }

        sql.push_str(" (");
        for (i, col) in self.insert_columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&self.name(col, IdentContext::InsertColumn));
        }
        sql.push_str(") values (");
        for ordinal in 1..=self.insert_values.len() {
            if ordinal > 1 {
                sql.push_str(", ");
            }
            self.param_style.write_placeholder(&mut sql, ordinal);
        }
        sql.push(')');

        Query::new(sql, self.insert_values.clone())
    }
}
