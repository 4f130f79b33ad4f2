//! `users/*` endpoints.

use super::client::TwitterClient;
use super::params::ParamList;
use super::transport::{Method, Transport};
use super::types::{ProfileImageSize, User};
use crate::error::{BuildError, EdenError, EdenResult};

const LOOKUP: &str = "users/lookup.json";
const PROFILE_IMAGE: &str = "users/profile_image.json";
const SEARCH: &str = "users/search.json";
const SHOW: &str = "users/show.json";
const CONTRIBUTEES: &str = "users/contributees.json";
const CONTRIBUTORS: &str = "users/contributors.json";

/// Most users `users/lookup` accepts in one call.
pub const MAX_LOOKUP: usize = 100;
/// Largest `per_page` accepted by `users/search`.
pub const MAX_SEARCH_PER_PAGE: u32 = 20;

/// Builder for user lookups and searches.
#[derive(Debug, Clone)]
pub struct Users<'a, T> {
    client: &'a TwitterClient<T>,
    ids: Vec<u64>,
    names: Vec<String>,
    size: Option<ProfileImageSize>,
    page: Option<u32>,
    per_page: Option<u32>,
    include_entities: bool,
    skip_status: bool,
    build_error: BuildError,
}

impl<'a, T: Transport> Users<'a, T> {
    pub(crate) fn new(client: &'a TwitterClient<T>) -> Self {
        Self {
            client,
            ids: Vec::new(),
            names: Vec::new(),
            size: None,
            page: None,
            per_page: None,
            include_entities: false,
            skip_status: false,
            build_error: BuildError::default(),
        }
    }

    /// Target a single user id.
    pub fn set_id(mut self, id: u64) -> Self {
        self.ids = vec![id];
        self
    }

    /// Target several user ids (for [`Users::lookup_friends`]).
    pub fn set_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Target a single screen name. A leading `@` is dropped.
    pub fn set_name(self, name: &str) -> Self {
        self.set_names([name])
    }

    /// Target several screen names (for [`Users::lookup_friends`]).
    pub fn set_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cleaned = Vec::new();
        for name in names {
            let name = name.as_ref().trim().trim_start_matches('@');
            if name.is_empty() {
                self.build_error.record("screen name is empty");
                continue;
            }
            cleaned.push(name.to_string());
        }
        self.names = cleaned;
        self
    }

    /// Profile image size for [`Users::get_profile_image`].
    pub fn set_size(mut self, size: ProfileImageSize) -> Self {
        self.size = Some(size);
        self
    }

    /// 1-based result page for [`Users::search`].
    pub fn set_page(mut self, page: u32) -> Self {
        if page == 0 {
            self.build_error.record("page starts at 1");
        }
        self.page = Some(page);
        self
    }

    /// Results per page for [`Users::search`], 1 to 20.
    pub fn set_per_page(mut self, per_page: u32) -> Self {
        if !(1..=MAX_SEARCH_PER_PAGE).contains(&per_page) {
            self.build_error.record(format!(
                "per_page must be between 1 and {MAX_SEARCH_PER_PAGE}, got {per_page}"
            ));
        }
        self.per_page = Some(per_page);
        self
    }

    /// Ask for the `entities` node (`include_entities=true`).
    pub fn include_entities(mut self) -> Self {
        self.include_entities = true;
        self
    }

    /// Leave each user's latest status out (`skip_status=true`).
    pub fn skip_status(mut self) -> Self {
        self.skip_status = true;
        self
    }

    /// Report the first invalid argument, if any.
    pub fn validate(&self) -> EdenResult<()> {
        self.build_error.check()
    }

    fn single_target(&self, call: &str) -> EdenResult<()> {
        if self.ids.is_empty() && self.names.is_empty() {
            return Err(EdenError::validation(format!(
                "{call} needs a user id or screen name"
            )));
        }
        if self.ids.len() > 1 || self.names.len() > 1 {
            return Err(EdenError::validation(format!(
                "{call} takes at most one user id and one screen name"
            )));
        }
        Ok(())
    }

    /// Parameters sent by [`Users::lookup_friends`].
    pub fn lookup_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params
            .push_flag("include_entities", self.include_entities)
            .push_list("user_id", self.ids.iter())
            .push_list("screen_name", self.names.iter());
        params
    }

    /// Parameters sent by [`Users::get_profile_image`].
    pub fn profile_image_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params
            .push_opt("screen_name", self.names.first())
            .push_opt("size", self.size);
        params
    }

    /// Parameters sent by [`Users::search`].
    pub fn search_params(&self, query: &str) -> ParamList {
        let mut params = ParamList::new();
        params
            .push("q", query.trim())
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_flag("include_entities", self.include_entities);
        params
    }

    /// Parameters sent by [`Users::get_contributees`] and [`Users::get_contributors`].
    pub fn contributor_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params
            .push_opt("user_id", self.ids.first())
            .push_opt("screen_name", self.names.first())
            .push_flag("include_entities", self.include_entities)
            .push_flag("skip_status", self.skip_status);
        params
    }

    /// Extended information for up to 100 users, by id and/or screen name.
    pub async fn lookup_friends(&self) -> EdenResult<Vec<User>> {
        self.validate()?;
        let total = self.ids.len() + self.names.len();
        if total == 0 {
            return Err(EdenError::validation(
                "lookup_friends needs at least one user id or screen name",
            ));
        }
        if total > MAX_LOOKUP {
            return Err(EdenError::validation(format!(
                "lookup_friends accepts at most {MAX_LOOKUP} users, got {total}"
            )));
        }
        self.client.get(LOOKUP, self.lookup_params()).await
    }

    /// URL of the profile image for the configured screen name.
    ///
    /// The endpoint answers with a redirect; the final image URL is returned.
    pub async fn get_profile_image(&self) -> EdenResult<String> {
        self.validate()?;
        if self.names.len() != 1 {
            return Err(EdenError::validation(
                "get_profile_image needs exactly one screen name",
            ));
        }
        let response = self
            .client
            .call(Method::Get, PROFILE_IMAGE, self.profile_image_params())
            .await?;
        Ok(response.url)
    }

    /// Search users by free text.
    pub async fn search(&self, query: &str) -> EdenResult<Vec<User>> {
        self.validate()?;
        if query.trim().is_empty() {
            return Err(EdenError::validation("search query is empty"));
        }
        self.client.get(SEARCH, self.search_params(query)).await
    }

    /// Extended information about one user.
    pub async fn get_detail(&self, id: u64) -> EdenResult<User> {
        self.validate()?;
        let mut params = ParamList::new();
        params
            .push("user_id", id)
            .push_flag("include_entities", self.include_entities);
        self.client.get(SHOW, params).await
    }

    /// Accounts the configured user can contribute to.
    pub async fn get_contributees(&self) -> EdenResult<Vec<User>> {
        self.validate()?;
        self.single_target("get_contributees")?;
        self.client.get(CONTRIBUTEES, self.contributor_params()).await
    }

    /// Accounts that can contribute to the configured user.
    pub async fn get_contributors(&self) -> EdenResult<Vec<User>> {
        self.validate()?;
        self.single_target("get_contributors")?;
        self.client.get(CONTRIBUTORS, self.contributor_params()).await
    }
}
