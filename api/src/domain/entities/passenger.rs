//! Passenger domain entity
//!
//! A rider who requests trips.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationErrors};

/// Unique identifier for a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub i64);

impl From<i64> for PassengerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted passenger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub phone_num: String,
}

impl Passenger {
    /// Apply a patch on top of the stored values. The result is unvalidated.
    pub fn patched(&self, patch: PassengerPatch) -> PassengerDraft {
        PassengerDraft {
            name: patch.name.unwrap_or_else(|| Some(self.name.clone())),
            phone_num: patch.phone_num.unwrap_or_else(|| Some(self.phone_num.clone())),
        }
    }
}

impl Validate for Passenger {
    fn validate(&self) -> Result<(), ValidationErrors> {
        PassengerDraft::from(self).validate()
    }
}

/// Unvalidated passenger input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassengerDraft {
    pub name: Option<String>,
    pub phone_num: Option<String>,
}

impl PassengerDraft {
    pub fn new(name: &str, phone_num: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            phone_num: Some(phone_num.to_string()),
        }
    }

    /// Check every field and produce the values to persist
    pub fn into_fields(self) -> Result<PassengerFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.require("name", self.name.as_deref());
        let phone_num = errors.require("phone_num", self.phone_num.as_deref());

        match (name, phone_num) {
            (Some(name), Some(phone_num)) => Ok(PassengerFields { name, phone_num }),
            _ => Err(errors),
        }
    }
}

impl From<&Passenger> for PassengerDraft {
    fn from(passenger: &Passenger) -> Self {
        Self::new(&passenger.name, &passenger.phone_num)
    }
}

impl Validate for PassengerDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.clone().into_fields().map(|_| ())
    }
}

/// Validated passenger attributes, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerFields {
    pub name: String,
    pub phone_num: String,
}

/// Partial update. The outer `None` leaves an attribute unchanged;
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerPatch {
    pub name: Option<Option<String>>,
    pub phone_num: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger() -> Passenger {
        Passenger {
            id: PassengerId(57),
            name: "Anna Laura".to_string(),
            phone_num: "999-999-0000".to_string(),
        }
    }

    #[test]
    fn draft_with_all_fields_is_valid() {
        let draft = PassengerDraft::new("Abigayle Rau Jr.", "1-761-352-4516 x63527");
        assert!(draft.is_valid());

        let fields = draft.into_fields().unwrap();
        assert_eq!(fields.phone_num, "1-761-352-4516 x63527");
    }

    #[test]
    fn draft_must_have_a_name() {
        let draft = PassengerDraft {
            name: None,
            phone_num: Some("560.815.3059".to_string()),
        };

        let errors = draft.validate().unwrap_err();
        assert!(errors.contains("name"));
        assert_eq!(errors.messages("name"), vec!["can't be blank"]);
        assert!(!errors.contains("phone_num"));
    }

    #[test]
    fn draft_must_have_a_phone_number() {
        let errors = PassengerDraft::new("Kari", "").validate().unwrap_err();
        assert_eq!(errors.messages("phone_num"), vec!["can't be blank"]);
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let draft = passenger().patched(PassengerPatch {
            name: Some(Some("Yvonne".to_string())),
            phone_num: None,
        });

        assert_eq!(draft.name.as_deref(), Some("Yvonne"));
        assert_eq!(draft.phone_num.as_deref(), Some("999-999-0000"));
    }

    #[test]
    fn patch_can_clear_a_field() {
        let draft = passenger().patched(PassengerPatch {
            name: Some(None),
            phone_num: None,
        });

        assert!(!draft.is_valid());
    }

    #[test]
    fn stored_passenger_validates() {
        assert!(passenger().is_valid());
    }
}
