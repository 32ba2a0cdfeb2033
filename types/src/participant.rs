//! Participant identifiers and registrant entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::LaunchError;

/// Registration weight of a single registrant entry (e.g. quest completions).
pub type Score = u64;

/// A participant account address as an unsigned 256-bit integer.
///
/// Stored big-endian so that the derived ordering matches numeric ordering.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId([u8; 32]);

impl ParticipantId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a hex string, with or without a `0x` prefix, of at most 64 digits.
    pub fn from_hex(s: &str) -> Result<Self, LaunchError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 64 {
            return Err(LaunchError::InvalidParticipantId(s.to_string()));
        }
        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| LaunchError::InvalidParticipantId(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Lowercase hex with a `0x` prefix and no leading zeros.
    pub fn to_hex(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }
}

impl From<u128> for ParticipantId {
    fn from(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl From<u64> for ParticipantId {
    fn from(value: u64) -> Self {
        Self::from(value as u128)
    }
}

impl FromStr for ParticipantId {
    type Err = LaunchError;

    /// Accepts `0x`-prefixed hex or a plain decimal that fits in 128 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") || s.starts_with("0X") {
            return Self::from_hex(s);
        }
        s.parse::<u128>()
            .map(Self::from)
            .map_err(|_| LaunchError::InvalidParticipantId(s.to_string()))
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", self.to_hex())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// One registration entry. The same identifier may appear many times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrant {
    pub identifier: ParticipantId,
    pub score: Score,
}

impl Registrant {
    pub fn new(identifier: ParticipantId, score: Score) -> Self {
        Self { identifier, score }
    }
}
