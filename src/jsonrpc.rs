//! JSON-RPC 2.0 envelopes for the lotus wallet API.
//!
//! Every wallet call goes through [`RpcRequest`]: the method catalogue fixes
//! the wire name and request id, the caller supplies ordered params, and the
//! phantom result type drives decoding of the response.

use std::marker::PhantomData;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, WalletRpcError};
use crate::Result;

pub const JSONRPC_VERSION: &str = "2.0";

/// Id shared by every wallet call except verification.
pub const WALLET_REQUEST_ID: u64 = 101;
pub const VERIFY_REQUEST_ID: u64 = 202;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalletMethod {
    New,
    Export,
    Has,
    List,
    Sign,
    Verify,
    SignMessage,
}

impl WalletMethod {
    pub const ALL: [WalletMethod; 7] = [
        WalletMethod::New,
        WalletMethod::Export,
        WalletMethod::Has,
        WalletMethod::List,
        WalletMethod::Sign,
        WalletMethod::Verify,
        WalletMethod::SignMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WalletMethod::New => "Filecoin.WalletNew",
            WalletMethod::Export => "Filecoin.WalletExport",
            WalletMethod::Has => "Filecoin.WalletHas",
            WalletMethod::List => "Filecoin.WalletList",
            WalletMethod::Sign => "Filecoin.WalletSign",
            WalletMethod::Verify => "Filecoin.WalletVerify",
            WalletMethod::SignMessage => "Filecoin.WalletSignMessage",
        }
    }

    pub fn request_id(&self) -> u64 {
        match self {
            WalletMethod::Verify => VERIFY_REQUEST_ID,
            _ => WALLET_REQUEST_ID,
        }
    }
}

/// Serializes a single positional parameter.
pub fn param<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(WalletRpcError::Encoding)
}

#[derive(Serialize)]
struct RequestEnvelope<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: &'a [Value],
    id: u64,
}

#[derive(Debug)]
pub struct RpcRequest<R> {
    method: WalletMethod,
    params: Vec<Value>,
    result_type: PhantomData<fn() -> R>,
}

impl<R: DeserializeOwned> RpcRequest<R> {
    pub fn new(method: WalletMethod, params: Vec<Value>) -> Self {
        RpcRequest {
            method,
            params,
            result_type: PhantomData,
        }
    }

    pub fn method(&self) -> WalletMethod {
        self.method
    }

    pub fn id(&self) -> u64 {
        self.method.request_id()
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn to_json(&self) -> Result<String> {
        let envelope = RequestEnvelope {
            jsonrpc: JSONRPC_VERSION,
            method: self.method.name(),
            params: &self.params,
            id: self.id(),
        };
        serde_json::to_string(&envelope).map_err(WalletRpcError::Encoding)
    }

    pub fn decode_response(&self, text: &str) -> Result<R> {
        RpcResponse::parse(text)?.into_result(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    pub fn parse(text: &str) -> Result<Self> {
        let response: RpcResponse = serde_json::from_str(text).map_err(DecodeError::from)?;
        Ok(response)
    }

    /// Resolves the envelope into the typed result. A remote error wins over
    /// everything else; ids are only compared when the node echoed a number.
    pub fn into_result<R: DeserializeOwned>(self, expected_id: u64) -> Result<R> {
        if let Some(error) = self.error {
            warn!(
                "wallet rpc returned error {}: {}",
                error.code, error.message
            );
            return Err(WalletRpcError::Protocol {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        if let Some(id @ Value::Number(_)) = self.id {
            if id.as_u64() != Some(expected_id) {
                return Err(DecodeError::IdMismatch {
                    expected: expected_id,
                    actual: id,
                }
                .into());
            }
        }

        let result = self.result.unwrap_or(Value::Null);
        let decoded: R = serde_json::from_value(result).map_err(DecodeError::from)?;
        Ok(decoded)
    }
}
