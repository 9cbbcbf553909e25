//! Typed JSON-RPC client for the lotus `Filecoin.Wallet*` API.
//!
//! Used to drive a remote wallet/signing node: every wallet method becomes a
//! blocking call returning a typed result or a [`WalletRpcError`].

mod client;
pub mod config;
mod encoding;
mod error;
pub mod jsonrpc;
pub mod transport;
mod types;

use core::result;

pub use crate::client::WalletRpcClient;
pub use crate::config::RpcConfig;
pub use crate::encoding::ByteEncoding;
pub use crate::error::{DecodeError, TransportError, WalletRpcError};
pub use crate::transport::{DeferredEndpoint, EndpointProvider, HttpTransport, Transport};
pub use crate::types::{
    Cid, SignatureType, WalletKey, WalletMessage, WalletSignature, WalletSignedMessage,
};

pub type Result<T> = result::Result<T, WalletRpcError>;
