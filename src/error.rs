use std::io;
use std::string::FromUtf8Error;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("endpoint_unavailable")]
    EndpointUnavailable,
    #[error("invalid_endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request_failed: {0}")]
    Request(String),
    #[error("request_timeout")]
    Timeout,
    #[error("unexpected_http_status: {status}")]
    HttpStatus { status: u16, body: String },
    #[error("invalid_response_body: {0}")]
    InvalidBody(#[from] FromUtf8Error),
    #[error("blocking_call_on_current_thread_runtime")]
    BlockingInAsyncContext,
    #[error("io_error: {0}")]
    Io(#[from] io::Error),
}

impl TransportError {
    /// Classifies a hyper failure, surfacing timeouts raised by the connector.
    pub(crate) fn from_hyper(err: hyper::Error) -> Self {
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            if let Some(io_err) = cause.downcast_ref::<io::Error>() {
                if io_err.kind() == io::ErrorKind::TimedOut {
                    return TransportError::Timeout;
                }
            }
            source = cause.source();
        }
        TransportError::Request(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid_json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response_id_mismatch: expected {expected}, got {actual}")]
    IdMismatch { expected: u64, actual: Value },
}

#[derive(Error, Debug)]
pub enum WalletRpcError {
    #[error("transport_error: {0}")]
    Transport(#[from] TransportError),
    #[error("rpc_error {code}: {message}")]
    Protocol {
        code: i64,
        message: String,
        data: Option<Value>,
    },
    #[error("decoding_error: {0}")]
    Decoding(#[from] DecodeError),
    #[error("encoding_error: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl WalletRpcError {
    pub fn is_transport(&self) -> bool {
        matches!(self, WalletRpcError::Transport(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, WalletRpcError::Protocol { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, WalletRpcError::Decoding(_))
    }
}
