use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Builds `UPDATE <table> SET a = ?, b = ? WHERE <key> = ?` from a sparse patch.
///
/// Columns and values are stored as pairs in one list; both the SET clause
/// and the bind order are derived from it, so the n-th placeholder always
/// receives the n-th value. The key is bound last.
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<(&'static str, QueryValue)>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
        }
    }

    /// Assign a column
    pub fn set(&mut self, column: &'static str, value: impl Into<QueryValue>) -> &mut Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Assign a column only when a value is present
    pub fn set_opt<V: Into<QueryValue>>(
        &mut self,
        column: &'static str,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Build the statement, or `None` when there is nothing to assign
    /// (a bare `SET WHERE ...` is not valid SQL)
    pub fn build_sql(&self, key_column: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let set_clause = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table, set_clause, key_column
        ))
    }

    /// Apply the assignment values to a SQLx query, in SET clause order
    pub fn apply_bindings<'q>(
        &self,
        mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        for (_, value) in &self.assignments {
            query = match value {
                QueryValue::Text(s) => query.bind(s.clone()),
                QueryValue::Integer(i) => query.bind(*i),
                QueryValue::Float(f) => query.bind(*f),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_has_no_sql() {
        let builder = UpdateBuilder::new("dishes");
        assert!(builder.is_empty());
        assert_eq!(builder.build_sql("id"), None);
    }

    #[test]
    fn test_single_assignment() {
        let mut builder = UpdateBuilder::new("dishes");
        builder.set("price", 6.0_f64);
        assert_eq!(
            builder.build_sql("id").as_deref(),
            Some("UPDATE dishes SET price = ? WHERE id = ?")
        );
    }

    #[test]
    fn test_set_opt_skips_absent_values() {
        let mut builder = UpdateBuilder::new("dishes");
        builder
            .set_opt("name", None::<String>)
            .set_opt("price", Some(6.0_f64))
            .set_opt("weight", Some(300_i64));
        assert_eq!(
            builder.build_sql("id").as_deref(),
            Some("UPDATE dishes SET price = ?, weight = ? WHERE id = ?")
        );
    }

    #[test]
    fn test_assignment_order_follows_insertion() {
        let mut builder = UpdateBuilder::new("dishes");
        builder
            .set("weight", 120_i64)
            .set("name", "Borscht".to_string());
        assert_eq!(
            builder.build_sql("id").as_deref(),
            Some("UPDATE dishes SET weight = ?, name = ? WHERE id = ?")
        );
        let values: Vec<_> = builder.assignments.iter().map(|(_, v)| v.clone()).collect();
        assert_eq!(
            values,
            vec![
                QueryValue::Integer(120),
                QueryValue::Text("Borscht".to_string())
            ]
        );
    }
}
