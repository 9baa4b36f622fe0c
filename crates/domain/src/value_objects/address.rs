use crate::error::SdkError;
use primitive_types::H160;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A 20-byte account or contract address.
///
/// Equality and ordering work on the raw bytes, so two spellings of the same
/// address (lowercase, checksummed) compare equal, and the byte order matches
/// the lowercase hex order used to sort pair tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(pub H160);

impl Address {
    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(H160(bytes))
    }

    pub fn zero() -> Self {
        Self(H160::zero())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Parses a hex address with or without the `0x` prefix.
    ///
    /// Mixed-case input must carry a valid EIP-55 checksum. Single-case input
    /// is accepted but logged, since it cannot be checked.
    pub fn parse(input: &str) -> Result<Self, SdkError> {
        let hex_part = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        if hex_part.len() != Self::LEN * 2 {
            return Err(SdkError::InvalidAddress(input.to_string()));
        }
        let bytes =
            hex::decode(hex_part).map_err(|_| SdkError::InvalidAddress(input.to_string()))?;
        let mut raw = [0u8; 20];
        raw.copy_from_slice(&bytes);
        let address = Self::new(raw);

        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        let checksummed = address.to_checksum();
        if hex_part != &checksummed[2..] {
            if has_lower && has_upper {
                return Err(SdkError::InvalidAddress(input.to_string()));
            }
            warn!(address = %input, "address is not checksummed");
        }
        Ok(address)
    }

    /// EIP-55 mixed-case checksum encoding, `0x` prefixed.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.as_bytes());
        let hash = Keccak256::digest(lower.as_bytes());
        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<H160> for Address {
    fn from(value: H160) -> Self {
        Self(value)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}
