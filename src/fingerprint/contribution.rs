use std::fmt;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::{InspectError, Result};

/// One (key, value) pair of a fingerprint. Ordered by key, then value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FingerprintContribution {
    key: String,
    value: String,
}

impl FingerprintContribution {
    pub fn new(key: &str, value: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(InspectError::MissingArgument("key"));
        }
        if value.is_empty() {
            return Err(InspectError::MissingArgument("value"));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Stable across processes: the leading 4 bytes of sha1(key NUL value).
    pub fn hash_code(&self) -> i32 {
        let mut hasher = Sha1::new();
        hasher.update(self.key.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.value.as_bytes());
        let digest = hasher.finalize();
        i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

impl fmt::Display for FingerprintContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
