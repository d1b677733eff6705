use miette::Diagnostic;
use thiserror::Error;

/// Failures raised before the gateway produced a usable HTTP 200 reply.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(String),
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Coarse view of where a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The order could not be turned into a request body.
    Request,
    /// The gateway was never reached, or did not answer with HTTP 200.
    Transport,
    /// The gateway answered with a body that could not be decoded.
    Response,
    /// The gateway answered with a non-success status code.
    Rejected,
}

#[derive(Error, Diagnostic, Debug)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    #[diagnostic(
        code(smilepay::transport),
        help("the gateway was not reached or did not answer with HTTP 200")
    )]
    Transport(#[from] TransportError),

    #[error("Invalid XML response format: {0}")]
    #[diagnostic(code(smilepay::malformed_response))]
    MalformedResponse(String),

    #[error("SmilePay error: {description} ({code})")]
    #[diagnostic(code(smilepay::rejected))]
    GatewayRejected {
        code: String,
        description: &'static str,
    },

    #[error("Unknown SmilePay error: {0}")]
    #[diagnostic(
        code(smilepay::unknown_status),
        help("the status code is not part of the documented gateway table")
    )]
    UnknownStatus(String),

    #[error("could not encode order: {0}")]
    #[diagnostic(code(smilepay::encoding))]
    Encoding(#[from] serde_urlencoded::ser::Error),

    #[error("CSV error: {0}")]
    #[diagnostic(code(smilepay::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(smilepay::io))]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    pub fn stage(&self) -> FailureStage {
        match self {
            Self::Encoding(_) | Self::Csv(_) | Self::Io(_) => FailureStage::Request,
            Self::Transport(_) => FailureStage::Transport,
            Self::MalformedResponse(_) => FailureStage::Response,
            Self::GatewayRejected { .. } | Self::UnknownStatus(_) => FailureStage::Rejected,
        }
    }

    /// True when the gateway answered with HTTP 200, whatever the body said.
    pub fn reached_gateway(&self) -> bool {
        matches!(self.stage(), FailureStage::Response | FailureStage::Rejected)
    }

    /// The gateway status code carried by a rejection, if any.
    pub fn status_code(&self) -> Option<&str> {
        match self {
            Self::GatewayRejected { code, .. } | Self::UnknownStatus(code) => Some(code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failures_never_reach_gateway() {
        let err = GatewayError::from(TransportError::Status(500));
        assert_eq!(err.stage(), FailureStage::Transport);
        assert!(!err.reached_gateway());
        assert_eq!(err.to_string(), "transport error: HTTP error! status: 500");
    }

    #[test]
    fn test_rejections_reach_gateway() {
        let err = GatewayError::GatewayRejected {
            code: "-2001".to_string(),
            description: "無參數碼及商家代號錯誤",
        };
        assert!(err.reached_gateway());
        assert_eq!(err.status_code(), Some("-2001"));

        let err = GatewayError::UnknownStatus("-9999".to_string());
        assert!(err.reached_gateway());
        assert_eq!(err.to_string(), "Unknown SmilePay error: -9999");
    }

    #[test]
    fn test_malformed_response_stage() {
        let err = GatewayError::MalformedResponse("unexpected end of input".into());
        assert_eq!(err.stage(), FailureStage::Response);
        assert!(err.status_code().is_none());
    }
}
