//! HTTP transport seam.
//!
//! [`TwitterClient`](super::TwitterClient) only needs something that can send
//! an [`ApiRequest`] and hand back the decoded body. [`ReqwestTransport`] is
//! the default; tests swap in a recording fake.

use std::future::Future;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::warn;
use url::Url;

use super::config::TwitterConfig;
use super::params::ParamList;
use crate::error::{EdenError, EdenResult};

/// HTTP method of an endpoint call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully resolved endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub params: ParamList,
}

/// A successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    /// Parsed JSON body; `Null` when the body is empty or not JSON
    pub body: Value,
}

/// Sends endpoint calls.
///
/// Implementations map non-2xx statuses to [`EdenError::Api`] or
/// [`EdenError::RateLimited`].
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> impl Future<Output = EdenResult<ApiResponse>> + Send;
}

/// [`Transport`] backed by `reqwest`.
///
/// GET parameters go into the query string, POST parameters into a
/// form-encoded body. No retries are attempted.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    authorization: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &TwitterConfig) -> EdenResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            authorization: config.authorization_header(),
        })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = EdenResult<ApiResponse>> + Send {
        async move {
            let ApiRequest {
                method,
                url,
                params,
            } = request;

            let mut req = match method {
                Method::Get => self.client.get(url).query(params.as_pairs()),
                Method::Post => self.client.post(url).form(params.as_pairs()),
            };
            if let Some(auth) = &self.authorization {
                req = req.header(AUTHORIZATION, auth);
            }

            let response = req.send().await?;
            handle_response(response).await
        }
    }
}

async fn handle_response(response: Response) -> EdenResult<ApiResponse> {
    let status = response.status();
    let url = response.url().to_string();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let reset = response
            .headers()
            .get("x-rate-limit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        warn!(target: "eden.twitter", %url, ?reset, "rate limited");
        return Err(EdenError::RateLimited { reset });
    }

    let bytes = response.bytes().await?;
    let body = parse_body(&bytes);

    if !status.is_success() {
        let (message, code) = parse_api_error(&body).unwrap_or_else(|| {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            (reason.to_string(), None)
        });
        warn!(target: "eden.twitter", status = status.as_u16(), %url, %message, "request failed");
        return Err(EdenError::Api {
            status: status.as_u16(),
            message,
            code,
        });
    }

    Ok(ApiResponse {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Decode a body as JSON, falling back to `Null`.
pub(crate) fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// Extract message and code from a v1 error body.
///
/// Handles both `{"errors":[{"message":..,"code":..}]}` and
/// `{"error":"..."}`.
pub(crate) fn parse_api_error(body: &Value) -> Option<(String, Option<i32>)> {
    if let Some(first) = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = first.get("message").and_then(Value::as_str)?;
        let code = first
            .get("code")
            .and_then(Value::as_i64)
            .and_then(|c| i32::try_from(c).ok());
        return Some((message.to_string(), code));
    }
    if let Some(message) = body.get("errors").and_then(Value::as_str) {
        return Some((message.to_string(), None));
    }
    body.get("error")
        .and_then(Value::as_str)
        .map(|message| (message.to_string(), None))
}
