use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::{RpcConfig, DEFAULT_RPC_PATH};
use crate::encoding::ByteEncoding;
use crate::jsonrpc::{param, RpcRequest, WalletMethod};
use crate::transport::{EndpointProvider, HttpTransport, Transport};
use crate::types::{
    SignatureType, WalletKey, WalletMessage, WalletSignature, WalletSignedMessage,
};
use crate::Result;

/// Typed, blocking client for the `Filecoin.Wallet*` JSON-RPC methods.
///
/// The base URL is asked from the endpoint provider on every call, so the
/// client can be built before the node it talks to is listening.
pub struct WalletRpcClient<T = HttpTransport> {
    transport: T,
    endpoint: Box<dyn EndpointProvider>,
    rpc_path: String,
    byte_encoding: ByteEncoding,
}

impl WalletRpcClient<HttpTransport> {
    pub fn from_config(config: &RpcConfig, endpoint: impl EndpointProvider + 'static) -> Self {
        let mut transport = HttpTransport::new();
        if let Some(token) = &config.auth_token {
            transport = transport.with_token(token.clone());
        }
        if let Some(timeout) = config.timeout() {
            transport = transport.with_timeout(timeout);
        }

        WalletRpcClient::new(transport, endpoint, config.rpc_path.clone())
            .with_byte_encoding(config.byte_encoding)
    }
}

impl<T: Transport> WalletRpcClient<T> {
    pub fn new(
        transport: T,
        endpoint: impl EndpointProvider + 'static,
        rpc_path: impl Into<String>,
    ) -> Self {
        WalletRpcClient {
            transport,
            endpoint: Box::new(endpoint),
            rpc_path: rpc_path.into(),
            byte_encoding: ByteEncoding::default(),
        }
    }

    pub fn with_default_path(transport: T, endpoint: impl EndpointProvider + 'static) -> Self {
        Self::new(transport, endpoint, DEFAULT_RPC_PATH)
    }

    pub fn with_byte_encoding(mut self, byte_encoding: ByteEncoding) -> Self {
        self.byte_encoding = byte_encoding;
        self
    }

    pub fn rpc_path(&self) -> &str {
        &self.rpc_path
    }

    pub fn byte_encoding(&self) -> ByteEncoding {
        self.byte_encoding
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoint_url(&self) -> Result<String> {
        let base_url = self.endpoint.base_url()?;
        Ok(format!("{}{}", base_url, self.rpc_path))
    }

    /// Creates a new key on the node and returns its address.
    pub fn create_wallet(&self, sig_type: SignatureType) -> Result<String> {
        self.call(RpcRequest::new(WalletMethod::New, vec![param(&sig_type)?]))
    }

    pub fn export_wallet(&self, address: &str) -> Result<WalletKey> {
        self.call(RpcRequest::new(WalletMethod::Export, vec![param(address)?]))
    }

    pub fn has_wallet(&self, address: &str) -> Result<bool> {
        self.call(RpcRequest::new(WalletMethod::Has, vec![param(address)?]))
    }

    /// Addresses in the order the node reports them.
    pub fn list_wallets(&self) -> Result<Vec<String>> {
        self.call(RpcRequest::new(WalletMethod::List, vec![]))
    }

    pub fn sign(&self, address: &str, data: &[u8]) -> Result<WalletSignature> {
        self.call(RpcRequest::new(
            WalletMethod::Sign,
            vec![param(address)?, param(&self.byte_encoding.encode(data))?],
        ))
    }

    pub fn verify(&self, address: &str, data: &[u8], signature: &WalletSignature) -> Result<bool> {
        self.call(RpcRequest::new(
            WalletMethod::Verify,
            vec![
                param(address)?,
                param(&self.byte_encoding.encode(data))?,
                param(signature)?,
            ],
        ))
    }

    pub fn sign_message(
        &self,
        address: &str,
        message: &WalletMessage,
    ) -> Result<WalletSignedMessage> {
        self.call(RpcRequest::new(
            WalletMethod::SignMessage,
            vec![param(address)?, param(message)?],
        ))
    }

    fn call<R: DeserializeOwned>(&self, request: RpcRequest<R>) -> Result<R> {
        let body = request.to_json()?;
        let url = self.endpoint_url()?;
        let method = request.method().name();

        debug!("{} -> {} (id {})", method, url, request.id());
        let response = self.transport.execute(&url, &body).map_err(|e| {
            warn!("{} failed on transport: {}", method, e);
            e
        })?;
        debug!("{} <- {} bytes", method, response.len());

        request.decode_response(&response)
    }
}
