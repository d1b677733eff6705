use crate::domain::ports::{Transport, TransportResponse};
use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A request as seen by [`CannedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub content_type: String,
    pub body: String,
}

/// A transport that answers every request with the same status and body.
///
/// Requests are recorded behind an `Arc<RwLock<_>>`, so clones share the log.
/// Used to replay stored gateway replies and to drive the client in tests.
#[derive(Debug, Clone)]
pub struct CannedTransport {
    status: u16,
    body: String,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl CannedTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::default(),
        }
    }

    /// Answers with HTTP 200 and `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            content_type: content_type.to_string(),
            body,
        });
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
