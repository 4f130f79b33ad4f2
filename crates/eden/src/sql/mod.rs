//! SQL statement builders.
//!
//! Builders collect table, conditions and assignments through chained calls
//! and render a single statement string. Nothing is executed here; hand the
//! string to your own driver.
//!
//! ## Design
//!
//! - Values are rendered verbatim ([`SqlValue`]); use [`SqlValue::quoted`]
//!   for untrusted text.
//! - Safe defaults: DELETE and UPDATE without WHERE render `WHERE 1=0`
//!   unless explicitly allowed; UPDATE requires SET.
//! - [`SqlBuilder::to_sql`] validates identifiers before rendering.
//!
//! ```
//! use eden::sql::{self, Filter, SqlBuilder};
//!
//! let sql = sql::update("user")
//!     .set("user_name", "'Chris'")
//!     .set("user_age", 30)
//!     .and_eq("user_id", 1)
//!     .to_sql()?;
//! assert_eq!(sql, "UPDATE user SET user_name = 'Chris', user_age = 30 WHERE user_id = 1;");
//! # Ok::<(), eden::EdenError>(())
//! ```

mod delete;
mod traits;
mod update;
mod value;
mod where_clause;

pub use delete::DeleteBuilder;
pub use traits::{Filter, SqlBuilder};
pub use update::UpdateBuilder;
pub use value::SqlValue;
pub use where_clause::WhereClause;

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Alias for `delete`.
pub fn delete_from(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}
