use crate::domain::ports::{Transport, TransportResponse};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Sends gateway requests over HTTPS with `reqwest`.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with no deadline of its own; callers bound requests
    /// with [`GatewayClient::with_timeout`](crate::application::client::GatewayClient::with_timeout).
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
