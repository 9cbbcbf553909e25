#![allow(dead_code)]

use lotus_wallet_rpc::{
    Transport, TransportError, WalletMessage, WalletRpcClient, WalletSignature,
};
use parking_lot::Mutex;
use serde_json::{json, Value};

pub const TEST_BASE_URL: &str = "http://127.0.0.1:1234";
pub const TEST_ADDRESS: &str = "f1zlkjwo5pnm6petm4u4luj6gb6e64eecrw4t4stq";
pub const TEST_BLS_ADDRESS: &str =
    "f3qdyntx5snnwgmjkp2ztd6tf6hhcmurxfj53zylrqyympwvzvbznx6vnvdqloate5eviphnzrkupno4wheesa";

type Responder = dyn Fn(&Value) -> Result<String, TransportError> + Send + Sync;

/// Records every request and answers through a caller supplied closure.
pub struct StubTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl StubTransport {
    pub fn new(
        responder: impl Fn(&Value) -> Result<String, TransportError> + Send + Sync + 'static,
    ) -> Self {
        StubTransport {
            responder: Box::new(responder),
            requests: Mutex::new(vec![]),
        }
    }

    /// Answers each method with a well-formed success envelope.
    pub fn results(results: impl Fn(&str) -> Value + Send + Sync + 'static) -> Self {
        Self::new(move |request| {
            let result = results(request["method"].as_str().unwrap_or_default());
            Ok(json!({"jsonrpc": "2.0", "result": result, "id": request["id"]}).to_string())
        })
    }

    pub fn rpc_error(code: i64, message: &'static str) -> Self {
        Self::new(move |request| {
            Ok(json!({
                "jsonrpc": "2.0",
                "id": request["id"],
                "error": {"code": code, "message": message}
            })
            .to_string())
        })
    }

    pub fn raw(body: &'static str) -> Self {
        Self::new(move |_| Ok(body.to_string()))
    }

    pub fn refusing() -> Self {
        Self::new(|_| Err(TransportError::Request("connection refused".to_string())))
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().iter().map(|(_, r)| r.clone()).collect()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.lock().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn last_request(&self) -> Value {
        self.requests
            .lock()
            .last()
            .map(|(_, r)| r.clone())
            .expect("no request sent")
    }
}

impl Transport for StubTransport {
    fn execute(&self, url: &str, request: &str) -> Result<String, TransportError> {
        let parsed: Value = serde_json::from_str(request).expect("client sent invalid json");
        self.requests.lock().push((url.to_string(), parsed.clone()));
        (self.responder)(&parsed)
    }
}

pub fn client(transport: StubTransport) -> WalletRpcClient<StubTransport> {
    WalletRpcClient::new(transport, || TEST_BASE_URL.to_string(), "/rpc/v0")
}

pub fn sample_message() -> WalletMessage {
    WalletMessage {
        version: 0,
        to: TEST_ADDRESS.to_string(),
        from: "f12i3bop43tprlnymx2c75u6uvlq7iur2rcd7qsey".to_string(),
        nonce: 1,
        value: "10000000000000000".to_string(),
        gas_limit: 491585,
        gas_fee_cap: "151367".to_string(),
        gas_premium: "150313".to_string(),
        method: 0,
        params: None,
        cid: None,
    }
}

pub fn sample_signature() -> WalletSignature {
    WalletSignature {
        r#type: 1,
        data: "MCTI+WjYRozaU/7gYWAwSeOixkSmIHDWHwsU1NVPTrtH4IkXPUrgRcZh4DduJqvHLzoek31LYZxhWkGAzd0j9wA="
            .to_string(),
    }
}

/// Canned lotus results for each wallet method.
pub fn lotus_result(method: &str) -> Value {
    match method {
        "Filecoin.WalletNew" => json!(TEST_BLS_ADDRESS),
        "Filecoin.WalletExport" => json!({
            "Type": "secp256k1",
            "PrivateKey": "CuDXkkKFw5IemUhZTQsQCiSNmj2pbTPRIT9QOslXxFs="
        }),
        "Filecoin.WalletHas" => json!(true),
        "Filecoin.WalletList" => json!([TEST_ADDRESS, TEST_BLS_ADDRESS]),
        "Filecoin.WalletSign" => serde_json::to_value(sample_signature()).unwrap(),
        "Filecoin.WalletVerify" => json!(true),
        "Filecoin.WalletSignMessage" => json!({
            "Message": serde_json::to_value(sample_message()).unwrap(),
            "Signature": serde_json::to_value(sample_signature()).unwrap(),
            "CID": {"/": "bafy2bzacec6nqhpi35nwfmdc2two6gs6khs3cgxe7ao2ks6xdwz53qvp2boyu"}
        }),
        other => panic!("unexpected method {}", other),
    }
}

/// Invokes every wallet operation once, keeping only the outcome.
pub fn call_all<T: Transport>(
    client: &WalletRpcClient<T>,
) -> Vec<(&'static str, lotus_wallet_rpc::Result<()>)> {
    use lotus_wallet_rpc::SignatureType;

    vec![
        (
            "Filecoin.WalletNew",
            client.create_wallet(SignatureType::Bls).map(|_| ()),
        ),
        (
            "Filecoin.WalletExport",
            client.export_wallet(TEST_ADDRESS).map(|_| ()),
        ),
        (
            "Filecoin.WalletHas",
            client.has_wallet(TEST_ADDRESS).map(|_| ()),
        ),
        ("Filecoin.WalletList", client.list_wallets().map(|_| ())),
        (
            "Filecoin.WalletSign",
            client.sign(TEST_ADDRESS, b"hello").map(|_| ()),
        ),
        (
            "Filecoin.WalletVerify",
            client
                .verify(TEST_ADDRESS, b"hello", &sample_signature())
                .map(|_| ()),
        ),
        (
            "Filecoin.WalletSignMessage",
            client
                .sign_message(TEST_ADDRESS, &sample_message())
                .map(|_| ()),
        ),
    ]
}
