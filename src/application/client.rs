use crate::domain::order::{Credentials, OrderRequest};
use crate::domain::ports::{TransportRef, TransportResponse};
use crate::domain::response::OrderResponse;
use crate::domain::status::{self, SUCCESS_CODE};
use crate::error::{GatewayError, Result, TransportError};
use crate::interfaces::form::{FORM_CONTENT_TYPE, encode_order};
use crate::interfaces::xml::response_parser::ResponseParser;
use std::time::Duration;

/// The gateway's order endpoint.
pub const API_URL: &str = "https://ssl.smse.com.tw/api/SPPayment.asp";

/// Submits orders to the SmilePay gateway.
///
/// The client holds only immutable state, so one instance can be shared
/// across tasks (for example behind an `Arc`) and used concurrently.
pub struct GatewayClient {
    credentials: Credentials,
    transport: TransportRef,
    parser: ResponseParser,
    timeout: Option<Duration>,
}

impl GatewayClient {
    /// Creates a client for the given merchant.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Merchant code, parameter code and verification key.
    /// * `transport` - The HTTP transport used to reach the gateway.
    pub fn new(credentials: Credentials, transport: TransportRef) -> Self {
        Self {
            credentials,
            transport,
            parser: ResponseParser::new(),
            timeout: None,
        }
    }

    /// Gives up on the HTTP call once `timeout` has elapsed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the form body that [`submit_order`](Self::submit_order) would send.
    pub fn encode_order(&self, order: &OrderRequest) -> Result<String> {
        encode_order(order, &self.credentials)
    }

    /// Submits one order and classifies the gateway's answer.
    ///
    /// Returns the decoded reply only when its status is `"1"`. Any other
    /// known code becomes [`GatewayError::GatewayRejected`], an undocumented
    /// one [`GatewayError::UnknownStatus`].
    #[tracing::instrument(
        skip_all,
        fields(
            dcvc = self.credentials.dcvc(),
            data_id = order.order_id.as_deref().unwrap_or_default(),
        )
    )]
    pub async fn submit_order(&self, order: &OrderRequest) -> Result<OrderResponse> {
        let body = self.encode_order(order)?;
        tracing::debug!(fields = order.present_fields(), "submitting order");

        let response = match self.post(body).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "gateway request failed");
                return Err(e.into());
            }
        };
        tracing::debug!(status = response.status, "gateway answered");
        if response.status != 200 {
            tracing::error!(status = response.status, "gateway returned a non-200 status");
            return Err(TransportError::Status(response.status).into());
        }

        let parsed = self.parser.parse(&response.body)?;
        classify(parsed)
    }

    async fn post(&self, body: String) -> std::result::Result<TransportResponse, TransportError> {
        let call = self.transport.post(API_URL, FORM_CONTENT_TYPE, body);
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| TransportError::Timeout(timeout))?,
            None => call.await,
        }
    }
}

/// Turns a decoded reply into success, a documented rejection, or an
/// unknown-status failure.
pub fn classify(response: OrderResponse) -> Result<OrderResponse> {
    if response.status == SUCCESS_CODE {
        return Ok(response);
    }

    match status::describe(&response.status) {
        Some(description) => {
            tracing::warn!(code = %response.status, description, "gateway rejected order");
            Err(GatewayError::GatewayRejected {
                code: response.status,
                description,
            })
        }
        None => {
            tracing::warn!(code = %response.status, "gateway returned an unknown status");
            Err(GatewayError::UnknownStatus(response.status))
        }
    }
}
