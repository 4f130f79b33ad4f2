//! Twitter v1 response types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A v1 user object.
///
/// Fields not modelled here land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub id_str: String,
    pub screen_name: String,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: u64,
    pub friends_count: u64,
    pub statuses_count: u64,
    pub created_at: Option<String>,
    pub profile_background_color: Option<String>,
    pub profile_link_color: Option<String>,
    pub profile_sidebar_border_color: Option<String>,
    pub profile_sidebar_fill_color: Option<String>,
    pub profile_text_color: Option<String>,
    /// Most recent tweet, absent when `skip_status` was set
    pub status: Option<Value>,
    /// Present when `include_entities` was set
    pub entities: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of `account/rate_limit_status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitStatus {
    pub remaining_hits: u32,
    pub hourly_limit: u32,
    pub reset_time_in_seconds: u64,
    pub reset_time: Option<String>,
}

impl RateLimitStatus {
    pub fn is_exhausted(&self) -> bool {
        self.remaining_hits == 0
    }
}

/// Size variants served by `users/profile_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileImageSize {
    /// 73x73
    Bigger,
    /// 48x48
    Normal,
    /// 24x24
    Mini,
    /// Uploaded size
    Original,
}

impl ProfileImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bigger => "bigger",
            Self::Normal => "normal",
            Self::Mini => "mini",
            Self::Original => "original",
        }
    }
}

impl std::fmt::Display for ProfileImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
