use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Arc;

/// Status line and body of a gateway HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` with the given `Content-Type`.
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError>;
}

pub type TransportRef = Arc<dyn Transport>;
