//! DELETE statement builder.

use std::fmt;

use super::traits::{Filter, SqlBuilder};
use super::where_clause::WhereClause;
use crate::error::{EdenError, EdenResult};
use crate::ident::Ident;

/// DELETE statement builder.
///
/// Also the base of [`UpdateBuilder`](super::UpdateBuilder), which reuses its
/// table and WHERE state.
#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    /// Table name
    table: String,
    /// WHERE conditions
    where_clause: WhereClause,
    /// Whether to allow DELETE without WHERE
    allow_delete_all: bool,
}

impl DeleteBuilder {
    /// Create a new DELETE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Replace the target table.
    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn where_clause(&self) -> &WhereClause {
        &self.where_clause
    }

    /// Allow DELETE without WHERE conditions.
    ///
    /// By default a DELETE without conditions renders `WHERE 1=0` (no-op).
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
        self
    }

    pub(crate) fn allows_all(&self) -> bool {
        self.allow_delete_all
    }

    pub(crate) fn set_allow_all(&mut self, allow: bool) {
        self.allow_delete_all = allow;
    }

    /// Append ` WHERE ...` (or the no-op guard) to `sql`.
    pub(crate) fn push_where(&self, sql: &mut String) {
        if self.where_clause.is_empty() {
            if !self.allow_delete_all {
                sql.push_str(" WHERE 1=0");
            }
            return;
        }
        sql.push_str(" WHERE ");
        sql.push_str(&self.where_clause.build_clause());
    }
}

impl Filter for DeleteBuilder {
    fn where_clause_mut(&mut self) -> &mut WhereClause {
        &mut self.where_clause
    }
}

impl SqlBuilder for DeleteBuilder {
    fn build_sql(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.table);
        self.push_where(&mut sql);
        sql.push(';');
        sql
    }

    fn validate(&self) -> EdenResult<()> {
        if self.table.is_empty() {
            return Err(EdenError::validation("table name is not set"));
        }
        Ident::parse(&self.table)
            .map_err(|e| EdenError::validation(format!("invalid table name: {e}")))?;
        self.where_clause.validate()
    }
}

impl fmt::Display for DeleteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_sql())
    }
}
