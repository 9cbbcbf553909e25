use serde::{Deserialize, Serialize};

/// Wire representation of byte-sequence parameters.
///
/// Lotus marshals `[]byte` through Go's `encoding/json`, which emits padded
/// standard base64, so that is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteEncoding {
    #[default]
    Base64,
    Hex,
}

impl ByteEncoding {
    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            ByteEncoding::Base64 => base64::encode(data),
            ByteEncoding::Hex => hex::encode(data),
        }
    }
}
