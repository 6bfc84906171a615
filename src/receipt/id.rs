use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Borrow;
use std::fmt;

/// Content-derived receipt identifier: lowercase hex SHA-256 of the exact
/// submitted bytes.
///
/// Hashing happens before parsing, so two payloads that differ only in
/// whitespace or key order get different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        ReceiptId(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the store look entries up by `&str` without allocating
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let id = ReceiptId::from_bytes(b"abc");
        assert_eq!(
            id.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_same_bytes_same_id() {
        let a = ReceiptId::from_bytes(br#"{"retailer":"Target"}"#);
        let b = ReceiptId::from_bytes(br#"{"retailer":"Target"}"#);
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_changes_id() {
        let a = ReceiptId::from_bytes(br#"{"retailer":"Target"}"#);
        let b = ReceiptId::from_bytes(br#"{ "retailer": "Target" }"#);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_width_lowercase_hex() {
        let id = ReceiptId::from_bytes(b"");
        assert_eq!(id.as_str().len(), 64);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(id.to_string(), id.as_str());
    }
}
