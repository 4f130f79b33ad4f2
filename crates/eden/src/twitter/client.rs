//! Twitter v1 REST API client.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::accounts::Accounts;
use super::config::TwitterConfig;
use super::params::ParamList;
use super::transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
use super::users::Users;
use crate::error::EdenResult;

/// Entry point for the endpoint builders.
///
/// ```no_run
/// # async fn run() -> eden::EdenResult<()> {
/// use eden::twitter::{TwitterClient, TwitterConfig};
///
/// let client = TwitterClient::new(&TwitterConfig::from_env()?)?;
/// let me = client.accounts().skip_status().get_credentials().await?;
/// println!("signed in as @{}", me.screen_name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TwitterClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
}

impl TwitterClient<ReqwestTransport> {
    /// Create a client using the reqwest transport.
    pub fn new(config: &TwitterConfig) -> EdenResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> TwitterClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: &TwitterConfig, transport: T) -> EdenResult<Self> {
        Ok(Self {
            transport,
            base_url: config.base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builder for the `account/*` endpoints.
    pub fn accounts(&self) -> Accounts<'_, T> {
        Accounts::new(self)
    }

    /// Builder for the `users/*` endpoints.
    pub fn users(&self) -> Users<'_, T> {
        Users::new(self)
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> EdenResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    #[instrument(skip(self, params), fields(params = params.len()))]
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        params: ParamList,
    ) -> EdenResult<ApiResponse> {
        let url = self.endpoint(path)?;
        debug!(target: "eden.twitter", method = method.as_str(), %url, "sending request");
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url,
                params,
            })
            .await?;
        debug!(target: "eden.twitter", status = response.status, "response received");
        Ok(response)
    }

    /// GET `path` and decode the body into `R`.
    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: ParamList,
    ) -> EdenResult<R> {
        let response = self.call(Method::Get, path, params).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// POST `path` and decode the body into `R`.
    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        params: ParamList,
    ) -> EdenResult<R> {
        let response = self.call(Method::Post, path, params).await?;
        Ok(serde_json::from_value(response.body)?)
    }
}
