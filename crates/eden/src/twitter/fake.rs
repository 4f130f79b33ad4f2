//! Recording transport for unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::{EdenError, EdenResult};

/// Records every request and answers from a queue of canned replies.
///
/// With an empty queue it answers `200` with a `null` body.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<EdenResult<ApiResponse>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply_json(self, body: Value) -> Self {
        self.push_reply(Ok(ApiResponse {
            status: 200,
            url: String::new(),
            body,
        }))
    }

    pub(crate) fn reply_redirected(self, url: &str) -> Self {
        self.push_reply(Ok(ApiResponse {
            status: 200,
            url: url.to_string(),
            body: Value::Null,
        }))
    }

    pub(crate) fn reply_error(self, error: EdenError) -> Self {
        self.push_reply(Err(error))
    }

    fn push_reply(self, reply: EdenResult<ApiResponse>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = EdenResult<ApiResponse>> + Send {
        let url = request.url.to_string();
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        async move {
            reply.unwrap_or(Ok(ApiResponse {
                status: 200,
                url,
                body: Value::Null,
            }))
        }
    }
}
