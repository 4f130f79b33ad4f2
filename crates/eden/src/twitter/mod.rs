//! Twitter v1 REST endpoint builders.
//!
//! Each builder collects settings through chained setters and turns them
//! into a single GET or POST on a terminal call:
//!
//! ```no_run
//! # async fn run() -> eden::EdenResult<()> {
//! use eden::twitter::{TwitterClient, TwitterConfig};
//!
//! let client = TwitterClient::new(&TwitterConfig::from_env()?)?;
//!
//! let me = client
//!     .accounts()
//!     .set_location("Manila")
//!     .set_description("Building things")
//!     .update_profile()
//!     .await?;
//!
//! let found = client.users().set_per_page(5).search(&me.name).await?;
//! # let _ = found;
//! # Ok(())
//! # }
//! ```
//!
//! Request signing is out of scope: the transport forwards a pre-computed
//! `Authorization` value from [`TwitterConfig`].

mod accounts;
mod client;
mod config;
mod params;
mod transport;
mod types;
mod users;

pub use accounts::Accounts;
pub use client::TwitterClient;
pub use config::TwitterConfig;
pub use params::ParamList;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
pub use types::{ProfileImageSize, RateLimitStatus, User};
pub use users::{MAX_LOOKUP, MAX_SEARCH_PER_PAGE, Users};

#[cfg(test)]
mod fake;
#[cfg(test)]
mod tests;
