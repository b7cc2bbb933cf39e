use serde::{Deserialize, Serialize};

use crate::domain::error::FieldFault;

/// Plain-text password as typed into the form.
///
/// Alphanumeric only, 8-15 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_alphanumeric()
    }

    pub fn parse(input: &str) -> Result<Self, FieldFault> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        if !(8..=15).contains(&len) {
            return Err(FieldFault::Format);
        }
        if !trimmed.chars().all(Self::accepts) {
            return Err(FieldFault::Format);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Value object representing a hashed password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
