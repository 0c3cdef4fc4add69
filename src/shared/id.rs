//! Record Identifiers
//!
//! Books and comments are addressed by an opaque 24 character string.
//! The length is the only format rule; anything else about the content is
//! up to whoever generated the id.
//!
//! # Generation
//!
//! Ids minted by the server are 24 lowercase hex characters: a 4 byte
//! big-endian seconds timestamp followed by 8 random bytes.
//!
//! # Usage
//!
//! ```rust
//! use bookshelf::shared::RecordId;
//!
//! let id = RecordId::parse("a".repeat(24)).unwrap();
//! assert_eq!(id.as_str().len(), 24);
//! assert!(RecordId::parse("too-short").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Required length of every record id, in characters
pub const RECORD_ID_LEN: usize = 24;

/// Identifier of a book or comment
///
/// Deserialization goes through [`RecordId::parse`], so a record with a
/// malformed id never makes it past the JSON boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Parse an id, rejecting anything that is not exactly 24 characters
    pub fn parse(value: impl Into<String>) -> Result<Self, SharedError> {
        let value = value.into();
        let len = value.chars().count();
        if len != RECORD_ID_LEN {
            return Err(SharedError::validation(
                "_id",
                format!("expected an id of {} characters, got {}", RECORD_ID_LEN, len),
            ));
        }
        Ok(Self(value))
    }

    /// Mint a fresh id
    pub fn generate() -> Self {
        let seconds = timestamp_prefix(chrono::Utc::now().timestamp());
        let random = uuid::Uuid::new_v4();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&random.as_bytes()[..8]);

        Self(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Seconds since the epoch as stored in the first 4 bytes of an id
///
/// Saturates: times before 1970 give 0, times after 2106 give `u32::MAX`.
fn timestamp_prefix(seconds: i64) -> u32 {
    u32::try_from(seconds.max(0)).unwrap_or(u32::MAX)
}

impl TryFrom<String> for RecordId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
