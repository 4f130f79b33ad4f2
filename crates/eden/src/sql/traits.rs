//! Trait definitions for statement builders.

use super::value::SqlValue;
use super::where_clause::WhereClause;
use crate::error::EdenResult;

/// Base trait for all statement builders.
pub trait SqlBuilder {
    /// Render the statement. Never fails; see [`SqlBuilder::to_sql`].
    fn build_sql(&self) -> String;

    /// Validate builder state.
    fn validate(&self) -> EdenResult<()> {
        Ok(())
    }

    /// Validate, then render the statement.
    fn to_sql(&self) -> EdenResult<String> {
        if let Err(e) = self.validate() {
            tracing::debug!(target: "eden.sql", error = %e, "statement rejected");
            return Err(e);
        }
        let sql = self.build_sql();
        tracing::debug!(target: "eden.sql", sql = %sql, "statement built");
        Ok(sql)
    }
}

/// WHERE helpers shared by every builder that carries conditions.
///
/// Implementors only expose their [`WhereClause`]; every method here appends
/// one condition and hands the builder back for chaining.
pub trait Filter: Sized {
    fn where_clause_mut(&mut self) -> &mut WhereClause;

    /// Add a raw condition exactly as given. Blank text adds nothing.
    fn where_raw(mut self, cond: &str) -> Self {
        self.where_clause_mut().and_raw(cond);
        self
    }

    /// Add several raw conditions in order.
    fn where_all<I, S>(mut self, conds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clause = self.where_clause_mut();
        for cond in conds {
            clause.and_raw(cond.as_ref());
        }
        self
    }

    /// Add WHERE: column = value (`IS NULL` for a NULL value)
    fn and_eq(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_eq(col, value.into());
        self
    }

    /// Add WHERE: column != value (`IS NOT NULL` for a NULL value)
    fn and_ne(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_ne(col, value.into());
        self
    }

    /// Add WHERE: column < value
    fn and_lt(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_lt(col, value.into());
        self
    }

    /// Add WHERE: column <= value
    fn and_lte(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_lte(col, value.into());
        self
    }

    /// Add WHERE: column > value
    fn and_gt(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_gt(col, value.into());
        self
    }

    /// Add WHERE: column >= value
    fn and_gte(mut self, col: &str, value: impl Into<SqlValue>) -> Self {
        self.where_clause_mut().and_gte(col, value.into());
        self
    }

    /// Add WHERE: column IN (values...)
    fn and_in<V, I>(mut self, col: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.where_clause_mut().and_in(col, values);
        self
    }

    /// Add WHERE: column IS NULL
    fn and_is_null(mut self, col: &str) -> Self {
        self.where_clause_mut().and_is_null(col);
        self
    }

    /// Add WHERE: column IS NOT NULL
    fn and_is_not_null(mut self, col: &str) -> Self {
        self.where_clause_mut().and_is_not_null(col);
        self
    }

    /// Add WHERE: (a OR b OR ...)
    fn and_any(mut self, conds: &[&str]) -> Self {
        self.where_clause_mut().and_any(conds);
        self
    }
}
