use serde::{Deserialize, Serialize};

use crate::domain::{
    error::FieldFault,
    models::account::{AccountId, ContactNumber, EmailAddress, Username},
};

/// Display name of the traveler. Letters and spaces, 8-20 characters
/// after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerName(String);

impl TravelerName {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_alphabetic() || ch == ' '
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

/// National identity number in dashed form, e.g. `12345-6789012-3`
/// truncated to the 15 characters the schema stores. Digits and `-`,
/// exactly 15 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cnic(String);

impl Cnic {
    /// Character filter applied at keystroke granularity.
    pub fn accepts(ch: char) -> bool {
        ch.is_ascii_digit() || ch == '-'
    }

    pub fn parse(input: &str) -> Result<Self, FieldFault> {
        let trimmed = input.trim();
        if trimmed.chars().count() != 15 {
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

/// Travel preference category, one of the closed list offered by the
/// sign-up screen. The combo-box placeholder is not a value of this
/// enum; an unselected combo is represented as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    Adventure,
    Cultural,
    Luxury,
    Budget,
    Wildlife,
    Hiking,
    Beach,
    Historical,
    Religious,
    Culinary,
    Photography,
    SnowSkiing,
    Wellness,
    RoadTrips,
    SoloTravel,
    FamilyFriendly,
    Others,
}

impl Preference {
    /// Every selectable category, in combo-box order.
    pub const ALL: [Self; 17] = [
        Self::Adventure,
        Self::Cultural,
        Self::Luxury,
        Self::Budget,
        Self::Wildlife,
        Self::Hiking,
        Self::Beach,
        Self::Historical,
        Self::Religious,
        Self::Culinary,
        Self::Photography,
        Self::SnowSkiing,
        Self::Wellness,
        Self::RoadTrips,
        Self::SoloTravel,
        Self::FamilyFriendly,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Cultural => "Cultural",
            Self::Luxury => "Luxury",
            Self::Budget => "Budget",
            Self::Wildlife => "Wildlife",
            Self::Hiking => "Hiking",
            Self::Beach => "Beach",
            Self::Historical => "Historical",
            Self::Religious => "Religious",
            Self::Culinary => "Culinary",
            Self::Photography => "Photography",
            Self::SnowSkiing => "Snow/Skiing",
            Self::Wellness => "Wellness",
            Self::RoadTrips => "Road Trips",
            Self::SoloTravel => "SoloTravel",
            Self::FamilyFriendly => "Family Friendly",
            Self::Others => "Others",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == label)
    }
}

/// Validated sign-up details handed from the form to the submitter.
#[derive(Debug, Clone)]
pub struct TravelerSignup {
    pub traveler_name: TravelerName,
    pub cnic: Cnic,
    pub username: Username,
    pub email: EmailAddress,
    pub contact: ContactNumber,
    pub preference: Preference,
}

/// Persisted traveler profile row, owned by exactly one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    account_id: AccountId,
    cnic: Cnic,
    traveler_name: TravelerName,
    preference: Preference,
}

impl TravelerProfile {
    pub fn new(
        account_id: AccountId,
        cnic: Cnic,
        traveler_name: TravelerName,
        preference: Preference,
    ) -> Self {
        Self {
            account_id,
            cnic,
            traveler_name,
            preference,
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }
    pub fn cnic(&self) -> &Cnic {
        &self.cnic
    }
    pub fn traveler_name(&self) -> &TravelerName {
        &self.traveler_name
    }
    pub fn preference(&self) -> Preference {
        self.preference
    }
}
