//! `account/*` endpoints.

use serde_json::Value;

use super::client::TwitterClient;
use super::params::ParamList;
use super::transport::Transport;
use super::types::{RateLimitStatus, User};
use crate::error::{BuildError, EdenResult};

const RATE_LIMIT_STATUS: &str = "account/rate_limit_status.json";
const VERIFY_CREDENTIALS: &str = "account/verify_credentials.json";
const END_SESSION: &str = "account/end_session.json";
const UPDATE_PROFILE: &str = "account/update_profile.json";
const UPDATE_BACKGROUND: &str = "account/update_profile_background_image.json";
const UPDATE_COLORS: &str = "account/update_profile_colors.json";

const MAX_NAME: usize = 20;
const MAX_URL: usize = 100;
const MAX_LOCATION: usize = 30;
const MAX_DESCRIPTION: usize = 160;

/// Builder for the authenticated account's settings and session.
///
/// Setters only record state; nothing is sent until a terminal call such as
/// [`Accounts::update_profile`]. An invalid argument is remembered and
/// reported by the next terminal call.
#[derive(Debug, Clone)]
pub struct Accounts<'a, T> {
    client: &'a TwitterClient<T>,
    include_entities: bool,
    skip_status: bool,
    use_image: bool,
    name: Option<String>,
    url: Option<String>,
    location: Option<String>,
    description: Option<String>,
    image: Option<String>,
    tile: Option<bool>,
    background_color: Option<String>,
    link_color: Option<String>,
    border_color: Option<String>,
    fill_color: Option<String>,
    text_color: Option<String>,
    build_error: BuildError,
}

impl<'a, T: Transport> Accounts<'a, T> {
    pub(crate) fn new(client: &'a TwitterClient<T>) -> Self {
        Self {
            client,
            include_entities: false,
            skip_status: false,
            use_image: false,
            name: None,
            url: None,
            location: None,
            description: None,
            image: None,
            tile: None,
            background_color: None,
            link_color: None,
            border_color: None,
            fill_color: None,
            text_color: None,
            build_error: BuildError::default(),
        }
    }

    fn checked_text(&mut self, field: &str, value: &str, max: usize) -> String {
        let count = value.chars().count();
        if count > max {
            self.build_error
                .record(format!("{field} is {count} characters, at most {max} allowed"));
        }
        value.to_string()
    }

    fn checked_color(&mut self, field: &str, value: &str) -> Option<String> {
        match normalize_color(value) {
            Some(color) => Some(color),
            None => {
                self.build_error.record(format!(
                    "{field} must be a 3 or 6 digit hex color, got '{value}'"
                ));
                None
            }
        }
    }

    /// Profile background color (`profile_background_color`).
    pub fn set_background_color(mut self, color: &str) -> Self {
        self.background_color = self.checked_color("background color", color);
        self
    }

    /// Profile link color (`profile_link_color`).
    pub fn set_link_color(mut self, color: &str) -> Self {
        self.link_color = self.checked_color("link color", color);
        self
    }

    /// Sidebar border color (`profile_sidebar_border_color`).
    pub fn set_border_color(mut self, color: &str) -> Self {
        self.border_color = self.checked_color("border color", color);
        self
    }

    /// Sidebar fill color (`profile_sidebar_fill_color`).
    pub fn set_fill_color(mut self, color: &str) -> Self {
        self.fill_color = self.checked_color("fill color", color);
        self
    }

    /// Profile text color (`profile_text_color`).
    pub fn set_text_color(mut self, color: &str) -> Self {
        self.text_color = self.checked_color("text color", color);
        self
    }

    /// Base64-encoded background image.
    pub fn set_image(mut self, image: &str) -> Self {
        if image.trim().is_empty() {
            self.build_error.record("image data is empty");
        }
        self.image = Some(image.to_string());
        self
    }

    /// Tile the background image instead of centering it.
    pub fn set_tile(mut self, tile: bool) -> Self {
        self.tile = Some(tile);
        self
    }

    pub fn set_name(mut self, name: &str) -> Self {
        self.name = Some(self.checked_text("name", name, MAX_NAME));
        self
    }

    pub fn set_url(mut self, url: &str) -> Self {
        self.url = Some(self.checked_text("url", url, MAX_URL));
        self
    }

    pub fn set_location(mut self, location: &str) -> Self {
        self.location = Some(self.checked_text("location", location, MAX_LOCATION));
        self
    }

    pub fn set_description(mut self, description: &str) -> Self {
        self.description = Some(self.checked_text("description", description, MAX_DESCRIPTION));
        self
    }

    /// Display the uploaded background image (`use=true`).
    pub fn use_image(mut self) -> Self {
        self.use_image = true;
        self
    }

    /// Ask for the `entities` node (`include_entities=true`).
    pub fn include_entities(mut self) -> Self {
        self.include_entities = true;
        self
    }

    /// Leave the user's latest status out (`skip_status=true`).
    pub fn skip_status(mut self) -> Self {
        self.skip_status = true;
        self
    }

    /// Report the first invalid argument, if any.
    pub fn validate(&self) -> EdenResult<()> {
        self.build_error.check()
    }

    fn base_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params
            .push_flag("include_entities", self.include_entities)
            .push_flag("skip_status", self.skip_status);
        params
    }

    /// Parameters sent by [`Accounts::update_profile`].
    pub fn profile_params(&self) -> ParamList {
        let mut params = self.base_params();
        params
            .push_opt("name", self.name.as_deref())
            .push_opt("url", self.url.as_deref())
            .push_opt("location", self.location.as_deref())
            .push_opt("description", self.description.as_deref());
        params
    }

    /// Parameters sent by [`Accounts::update_background`].
    pub fn background_params(&self) -> ParamList {
        let mut params = self.base_params();
        params
            .push_flag("use", self.use_image)
            .push_opt("image", self.image.as_deref())
            .push_opt("tile", self.tile);
        params
    }

    /// Parameters sent by [`Accounts::update_color`].
    pub fn color_params(&self) -> ParamList {
        let mut params = self.base_params();
        params
            .push_opt("profile_background_color", self.background_color.as_deref())
            .push_opt("profile_link_color", self.link_color.as_deref())
            .push_opt("profile_sidebar_border_color", self.border_color.as_deref())
            .push_opt("profile_sidebar_fill_color", self.fill_color.as_deref())
            .push_opt("profile_text_color", self.text_color.as_deref());
        params
    }

    /// Remaining API calls for the current hour.
    pub async fn get_limit(&self) -> EdenResult<RateLimitStatus> {
        self.client.get(RATE_LIMIT_STATUS, ParamList::new()).await
    }

    /// The authenticated user, if the credentials are valid.
    pub async fn get_credentials(&self) -> EdenResult<User> {
        self.validate()?;
        self.client.get(VERIFY_CREDENTIALS, self.base_params()).await
    }

    /// End the session of the authenticated user.
    pub async fn log_out(&self) -> EdenResult<Value> {
        self.client.post(END_SESSION, ParamList::new()).await
    }

    /// Update name, url, location and description. Only set fields are sent.
    pub async fn update_profile(&self) -> EdenResult<User> {
        self.validate()?;
        self.client.post(UPDATE_PROFILE, self.profile_params()).await
    }

    /// Update or toggle the profile background image.
    pub async fn update_background(&self) -> EdenResult<User> {
        self.validate()?;
        self.client.post(UPDATE_BACKGROUND, self.background_params()).await
    }

    /// Update the profile colors. Only set colors are sent.
    pub async fn update_color(&self) -> EdenResult<User> {
        self.validate()?;
        self.client.post(UPDATE_COLORS, self.color_params()).await
    }
}

/// Strip a leading `#` and check for 3 or 6 hex digits.
fn normalize_color(value: &str) -> Option<String> {
    let hex = value.trim().trim_start_matches('#');
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| hex.to_ascii_uppercase())
}
