//! Shared WHERE clause state for DELETE and UPDATE.

use super::value::SqlValue;
use crate::error::{BuildError, EdenResult};
use crate::ident::Ident;

/// Ordered WHERE conditions, joined with `AND` when rendered.
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    /// Rendered conditions (without leading AND)
    conditions: Vec<String>,
    /// First invalid column or value seen by a typed helper
    build_error: BuildError,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any conditions have been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Conditions in insertion order.
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Get the build error, if any.
    pub fn build_error(&self) -> Option<&str> {
        self.build_error.message()
    }

    /// Report the first recorded column or value error.
    pub fn validate(&self) -> EdenResult<()> {
        self.build_error.check()
    }

    /// Build the WHERE clause string (without "WHERE" prefix).
    pub fn build_clause(&self) -> String {
        self.conditions.join(" AND ")
    }

    fn check_column(&mut self, col: &str) {
        if let Err(e) = Ident::parse(col) {
            self.build_error.record(format!("invalid WHERE column: {e}"));
        }
    }

    fn check_value(&mut self, col: &str, value: &SqlValue) {
        if !value.is_finite() {
            self.build_error
                .record(format!("WHERE column {col}: {value} is not a finite number"));
        }
    }

    /// `col op value`. A NULL value turns `=` into `IS NULL` and `!=` into
    /// `IS NOT NULL`; ordering against NULL is recorded as an error.
    fn add_compare(&mut self, col: &str, op: &str, value: SqlValue) {
        self.check_column(col);
        let condition = match (op, value.is_null()) {
            ("=", true) => format!("{col} IS NULL"),
            ("!=", true) => format!("{col} IS NOT NULL"),
            (_, true) => {
                self.build_error
                    .record(format!("WHERE column {col}: cannot compare {op} NULL"));
                format!("{col} {op} NULL")
            }
            (_, false) => {
                self.check_value(col, &value);
                format!("{col} {op} {value}")
            }
        };
        self.conditions.push(condition);
    }

    /// Add a raw condition exactly as given. Blank text adds nothing.
    pub fn and_raw(&mut self, cond: &str) {
        if !cond.trim().is_empty() {
            self.conditions.push(cond.to_string());
        }
    }

    pub fn and_eq(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, "=", value);
    }

    pub fn and_ne(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, "!=", value);
    }

    pub fn and_lt(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, "<", value);
    }

    pub fn and_lte(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, "<=", value);
    }

    pub fn and_gt(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, ">", value);
    }

    pub fn and_gte(&mut self, col: &str, value: SqlValue) {
        self.add_compare(col, ">=", value);
    }

    pub fn and_is_null(&mut self, col: &str) {
        self.check_column(col);
        self.conditions.push(format!("{col} IS NULL"));
    }

    pub fn and_is_not_null(&mut self, col: &str) {
        self.check_column(col);
        self.conditions.push(format!("{col} IS NOT NULL"));
    }

    /// Add `col IN (...)`. An empty list matches nothing.
    pub fn and_in(&mut self, col: &str, values: Vec<SqlValue>) {
        self.check_column(col);
        if values.is_empty() {
            self.conditions.push("1=0".to_string());
            return;
        }
        for value in &values {
            self.check_value(col, value);
        }
        let list = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.conditions.push(format!("{col} IN ({list})"));
    }

    /// Add a parenthesized OR group. A single condition is added as-is and
    /// blank entries are skipped.
    pub fn and_any(&mut self, conds: &[&str]) {
        let parts: Vec<&str> = conds
            .iter()
            .copied()
            .filter(|c| !c.trim().is_empty())
            .collect();
        match parts.len() {
            0 => {}
            1 => self.conditions.push(parts[0].to_string()),
            _ => self.conditions.push(format!("({})", parts.join(" OR "))),
        }
    }
}
