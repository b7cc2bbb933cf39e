use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::FieldFault;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("valid email regex")
});

/// Store-assigned account identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId(i32);

impl AccountId {
    pub fn from_i32(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// Role tag stored on every account row.
///
/// This module only ever registers travelers; other roles are created by
/// their own sign-up screens against the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Traveler,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traveler => "Traveler",
        }
    }
}

/// Login name, unique per (username, role) pair.
///
/// ASCII lowercase letters and digits, 8-20 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_ascii_lowercase() || ch.is_ascii_digit()
    }

    pub fn parse(input: &str) -> Result<Self, FieldFault> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        if !(8..=20).contains(&len) {
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

/// Email address, unique across all roles.
///
/// ASCII lowercase letters, digits, `@` and `.`, 8-20 characters after
/// trimming, and must parse as a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '@' || ch == '.'
    }

    pub fn parse(input: &str) -> Result<Self, FieldFault> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();
        if !(8..=20).contains(&len) {
            return Err(FieldFault::Format);
        }
        if !trimmed.contains('@') || !trimmed.contains('.') {
            return Err(FieldFault::Format);
        }
        if !trimmed.chars().all(Self::accepts) {
            return Err(FieldFault::Format);
        }
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(FieldFault::Format);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact number, unique across all roles. Digits only, exactly 11.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_ascii_digit()
    }

    pub fn parse(input: &str) -> Result<Self, FieldFault> {
        let trimmed = input.trim();
        if trimmed.chars().count() != 11 {
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

/// Persisted account row as seen by the domain after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    username: Username,
    email: EmailAddress,
    contact: ContactNumber,
    role: UserRole,
}

impl Account {
    pub fn new(
        id: AccountId,
        username: Username,
        email: EmailAddress,
        contact: ContactNumber,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            username,
            email,
            contact,
            role,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }
    pub fn username(&self) -> &Username {
        &self.username
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn contact(&self) -> &ContactNumber {
        &self.contact
    }
    pub fn role(&self) -> UserRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_out_of_range_lengths() {
        assert_eq!(Username::parse("short1"), Err(FieldFault::Format));
        assert_eq!(
            Username::parse("averyverylongusername"),
            Err(FieldFault::Format)
        );
        assert!(Username::parse("johndoe1").is_ok());
        assert!(Username::parse("  johndoe1  ").is_ok());
    }

    #[test]
    fn username_rejects_uppercase_and_symbols() {
        assert_eq!(Username::parse("JohnDoe1"), Err(FieldFault::Format));
        assert_eq!(Username::parse("john_doe1"), Err(FieldFault::Format));
    }

    #[test]
    fn email_requires_mailbox_shape() {
        assert!(EmailAddress::parse("john@x.co").is_ok());
        assert_eq!(EmailAddress::parse("john.x.co"), Err(FieldFault::Format));
        assert_eq!(EmailAddress::parse("jo@x.co"), Err(FieldFault::Format));
        assert_eq!(
            EmailAddress::parse("john@example.travel.co"),
            Err(FieldFault::Format)
        );
    }

    #[test]
    fn contact_must_be_exactly_eleven_digits() {
        assert!(ContactNumber::parse("03001234567").is_ok());
        assert_eq!(ContactNumber::parse("0300123456"), Err(FieldFault::Format));
        assert_eq!(
            ContactNumber::parse("03001234567x"),
            Err(FieldFault::Format)
        );
    }
}
