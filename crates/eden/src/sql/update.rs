//! UPDATE statement builder.

use std::fmt;

use super::delete::DeleteBuilder;
use super::traits::{Filter, SqlBuilder};
use super::value::SqlValue;
use super::where_clause::WhereClause;
use crate::error::{EdenError, EdenResult};
use crate::ident::Ident;

/// UPDATE statement builder.
///
/// Table and WHERE handling come from an inner [`DeleteBuilder`]; this type
/// only adds the SET list.
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    base: DeleteBuilder,
    /// SET clauses in first-set order
    set_fields: Vec<(String, SqlValue)>,
}

impl UpdateBuilder {
    /// Create a new UPDATE builder.
    pub fn new(table: &str) -> Self {
        Self {
            base: DeleteBuilder::new(table),
            set_fields: Vec::new(),
        }
    }

    /// Replace the target table.
    pub fn table(mut self, table: &str) -> Self {
        self.base = self.base.table(table);
        self
    }

    pub fn table_name(&self) -> &str {
        self.base.table_name()
    }

    pub fn where_clause(&self) -> &WhereClause {
        self.base.where_clause()
    }

    /// Assign `value` to `key`.
    ///
    /// Setting a key again replaces its value but keeps its position.
    pub fn set(mut self, key: &str, value: impl Into<SqlValue>) -> Self {
        let value = value.into();
        match self.set_fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.set_fields.push((key.to_string(), value)),
        }
        self
    }

    /// Set an optional column (None => skip).
    pub fn set_opt<T: Into<SqlValue>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Assign a single-quoted string literal.
    pub fn set_quoted(self, key: &str, text: &str) -> Self {
        self.set(key, SqlValue::quoted(text))
    }

    /// Current assignments in render order.
    pub fn assignments(&self) -> &[(String, SqlValue)] {
        &self.set_fields
    }

    /// Allow UPDATE without WHERE conditions.
    ///
    /// By default an UPDATE without conditions renders `WHERE 1=0` (no-op).
    pub fn allow_update_all(mut self, allow: bool) -> Self {
        self.base.set_allow_all(allow);
        self
    }

    pub fn allows_update_all(&self) -> bool {
        self.base.allows_all()
    }
}

impl From<DeleteBuilder> for UpdateBuilder {
    fn from(base: DeleteBuilder) -> Self {
        Self {
            base,
            set_fields: Vec::new(),
        }
    }
}

impl Filter for UpdateBuilder {
    fn where_clause_mut(&mut self) -> &mut WhereClause {
        self.base.where_clause_mut()
    }
}

impl SqlBuilder for UpdateBuilder {
    fn build_sql(&self) -> String {
        let table = self.base.table_name();
        if self.set_fields.is_empty() {
            return format!("UPDATE {table} SET _error_no_set_fields = 1 WHERE 1=0;");
        }

        let set = self
            .set_fields
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("UPDATE {table} SET {set}");
        self.base.push_where(&mut sql);
        sql.push(';');
        sql
    }

    fn validate(&self) -> EdenResult<()> {
        if self.set_fields.is_empty() {
            return Err(EdenError::validation("UPDATE: SET clause cannot be empty"));
        }
        for (key, value) in &self.set_fields {
            Ident::parse(key)
                .map_err(|e| EdenError::validation(format!("invalid SET column: {e}")))?;
            if !value.is_finite() {
                return Err(EdenError::validation(format!(
                    "SET column {key}: {value} is not a finite number"
                )));
            }
        }
        self.base.validate()
    }
}

impl fmt::Display for UpdateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_sql())
    }
}
