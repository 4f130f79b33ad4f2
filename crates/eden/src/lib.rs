//! # eden
//!
//! Fluent, chainable builders for two unrelated jobs.
//!
//! ## SQL statements (`sql`)
//!
//! A base → DELETE → UPDATE chain of builders that render a statement string.
//! Nothing is executed; pass the string to your own driver.
//!
//! ```
//! use eden::sql::{self, Filter, SqlBuilder};
//!
//! let sql = sql::delete("session")
//!     .where_raw("session_expires < NOW()")
//!     .to_sql()?;
//! assert_eq!(sql, "DELETE FROM session WHERE session_expires < NOW();");
//! # Ok::<(), eden::EdenError>(())
//! ```
//!
//! - **Safe defaults**: DELETE/UPDATE without WHERE render `WHERE 1=0`;
//!   UPDATE requires SET
//! - **Ordered output**: SET pairs keep first-set order, conditions keep
//!   insertion order
//!
//! ## Twitter v1 endpoints (`twitter`, default feature)
//!
//! `TwitterClient::accounts()` and `TwitterClient::users()` return builders
//! whose setters map one-to-one onto request parameters. Terminal calls send
//! a single GET or POST and decode the JSON reply. OAuth signing and rate
//! limit handling stay with the caller.

pub mod error;
pub mod ident;
pub mod sql;

#[cfg(feature = "twitter")]
pub mod twitter;

pub use error::{BuildError, EdenError, EdenResult};
pub use ident::Ident;
pub use sql::{DeleteBuilder, Filter, SqlBuilder, SqlValue, UpdateBuilder};

#[cfg(feature = "twitter")]
pub use twitter::{TwitterClient, TwitterConfig};
