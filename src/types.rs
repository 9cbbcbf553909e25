use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Key scheme selector passed to `Filecoin.WalletNew`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize_repr,
    Deserialize_repr,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum SignatureType {
    Bls = 1,
    Secp256k1 = 2,
}

/// Exported key material, in the lotus `KeyInfo` layout.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletKey {
    #[serde(rename = "Type")]
    pub r#type: String,

    #[serde(rename = "PrivateKey")]
    pub private_key: String,
}

impl WalletKey {
    pub fn from_lotus(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<WalletKey>(bytes)
    }

    pub fn from_private_key(sig_type: SignatureType, private_key: &[u8]) -> Self {
        WalletKey {
            r#type: sig_type.to_string(),
            private_key: base64::encode(private_key),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn decode_private_key(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::decode(&self.private_key)
    }

    pub fn signature_type(&self) -> Result<SignatureType, strum::ParseError> {
        self.r#type.parse()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct WalletSignature {
    /// Signature tag exactly as the node reported it.
    #[serde(rename = "Type")]
    pub r#type: u8,

    #[serde(rename = "Data")]
    pub data: String,
}

impl WalletSignature {
    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::decode(&self.data)
    }
}

/// IPLD link as lotus renders it in JSON: `{"/": "bafy..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Cid {
    #[serde(rename = "/")]
    pub root: String,
}

/// Unsigned message. Token amounts are decimal attoFIL strings and `params`
/// is base64 CBOR (null when empty), both as lotus emits them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletMessage {
    #[serde(default)]
    pub version: u64,
    pub to: String,
    pub from: String,
    pub nonce: u64,
    pub value: String,
    pub gas_limit: i64,
    pub gas_fee_cap: String,
    pub gas_premium: String,
    pub method: u64,
    #[serde(default)]
    pub params: Option<String>,
    #[serde(rename = "CID", default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<Cid>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletSignedMessage {
    pub message: WalletMessage,
    pub signature: WalletSignature,
    #[serde(rename = "CID", default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<Cid>,
}
