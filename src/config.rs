use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::encoding::ByteEncoding;

pub const DEFAULT_RPC_PATH: &str = "/rpc/v0";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RpcConfig {
    /// Appended to the base URL on every call.
    pub rpc_path: String,
    pub byte_encoding: ByteEncoding,
    /// Lotus API token, sent as a bearer credential.
    pub auth_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        RpcConfig {
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            byte_encoding: ByteEncoding::default(),
            auth_token: None,
            timeout_secs: None,
        }
    }
}

impl RpcConfig {
    pub fn from_json(bytes: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(bytes).context("invalid wallet rpc config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_json(&bytes)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
