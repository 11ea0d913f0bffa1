//! Stable identifiers for ledger rows
//!
//! A transaction id is derived from the row's content: the leading 32 bits
//! of a BLAKE3 hash over its five fields and a salt. The salt starts at zero
//! and is bumped until the id is free among the rows before it, so identical
//! rows get distinct ids. Loading the same file always yields the same ids,
//! in every process, without storing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionInput;

/// Content-derived identifier for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TransactionId(u32);

impl TransactionId {
    /// Id for `input` under the given salt
    pub fn derive(input: &TransactionInput, salt: u32) -> Self {
        let date = input
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let mut hasher = blake3::Hasher::new();
        for field in [
            date.as_str(),
            input.description.as_str(),
            input.category.name(),
            input.kind.name(),
        ] {
            hasher.update(field.as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&input.amount.cents().to_be_bytes());
        hasher.update(&salt.to_be_bytes());

        let hash = hasher.finalize();
        let bytes = hash.as_bytes();
        Self(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// First id for `input` for which `taken` is false
    pub fn derive_unique(input: &TransactionInput, taken: impl Fn(TransactionId) -> bool) -> Self {
        let mut salt = 0;
        loop {
            let id = Self::derive(input, salt);
            if !taken(id) {
                return id;
            }
            salt += 1;
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TransactionId {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    /// Accepts "1a2b3c4d" as well as "#1a2b3c4d", the form the tables print
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(u32::from_str_radix(s, 16)?))
    }
}
