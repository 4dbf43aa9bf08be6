//! Test doubles shared by the unit tests of this crate.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use wishlist_common::config::ClientConfig;

use crate::error::{ClientError, Result};
use crate::request::{ApiRequest, ApiResponse};
use crate::transport::Transport;

enum Reply {
    Json(Value),
    Fail(u16, String),
}

/// Records every request it receives and answers with a canned reply.
pub(crate) struct RecordingTransport {
    sent: Mutex<Vec<(ClientConfig, ApiRequest)>>,
    reply: Reply,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::responding(Value::Null)
    }
}

impl RecordingTransport {
    pub(crate) fn responding(body: Value) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reply: Reply::Json(body),
        }
    }

    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reply: Reply::Fail(status, message.to_owned()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    pub(crate) fn configs(&self) -> Vec<ClientConfig> {
        self.sent.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn dispatch(&self, config: &ClientConfig, request: ApiRequest) -> Result<ApiResponse> {
        self.sent.lock().unwrap().push((config.clone(), request));
        match &self.reply {
            Reply::Json(body) => Ok(ApiResponse::new(StatusCode::OK, serde_json::to_vec(body)?)),
            Reply::Fail(status, message) => Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
