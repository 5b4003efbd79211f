//! Driver domain entity
//!
//! A driver fulfils trips and accrues ratings and earnings across them.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationErrors};

/// Unique identifier for a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(pub i64);

impl From<i64> for DriverId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub vin: String,
    pub available: bool,
}

impl Driver {
    /// Apply a patch on top of the stored values. The result is unvalidated.
    pub fn patched(&self, patch: DriverPatch) -> DriverDraft {
        DriverDraft {
            name: patch.name.unwrap_or_else(|| Some(self.name.clone())),
            vin: patch.vin.unwrap_or_else(|| Some(self.vin.clone())),
            available: Some(patch.available.unwrap_or(self.available)),
        }
    }
}

impl Validate for Driver {
    fn validate(&self) -> Result<(), ValidationErrors> {
        DriverDraft::from(self).validate()
    }
}

/// Unvalidated driver input. Availability defaults to available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverDraft {
    pub name: Option<String>,
    pub vin: Option<String>,
    pub available: Option<bool>,
}

impl DriverDraft {
    pub fn new(name: &str, vin: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            vin: Some(vin.to_string()),
            available: None,
        }
    }

    pub fn into_fields(self) -> Result<DriverFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.require("name", self.name.as_deref());
        let vin = errors.require("vin", self.vin.as_deref());

        match (name, vin) {
            (Some(name), Some(vin)) => Ok(DriverFields {
                name,
                vin,
                available: self.available.unwrap_or(true),
            }),
            _ => Err(errors),
        }
    }
}

impl From<&Driver> for DriverDraft {
    fn from(driver: &Driver) -> Self {
        Self {
            name: Some(driver.name.clone()),
            vin: Some(driver.vin.clone()),
            available: Some(driver.available),
        }
    }
}

impl Validate for DriverDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.clone().into_fields().map(|_| ())
    }
}

/// Validated driver attributes, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFields {
    pub name: String,
    pub vin: String,
    pub available: bool,
}

/// Partial update. The outer `None` leaves an attribute unchanged;
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPatch {
    pub name: Option<Option<String>>,
    pub vin: Option<Option<String>>,
    pub available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_driver() -> DriverDraft {
        DriverDraft::new("Kari", "123")
    }

    #[test]
    fn can_be_instantiated() {
        assert!(new_driver().is_valid());
    }

    #[test]
    fn defaults_to_available() {
        let fields = new_driver().into_fields().unwrap();
        assert!(fields.available);
    }

    #[test]
    fn must_have_a_name() {
        let mut driver = new_driver();
        driver.name = None;

        let errors = driver.validate().unwrap_err();
        assert!(errors.contains("name"));
        assert_eq!(errors.messages("name"), vec!["can't be blank"]);
    }

    #[test]
    fn must_have_a_vin() {
        let mut driver = new_driver();
        driver.vin = None;

        let errors = driver.validate().unwrap_err();
        assert!(errors.contains("vin"));
        assert_eq!(errors.messages("vin"), vec!["can't be blank"]);
    }

    #[test]
    fn patch_flips_availability_only() {
        let driver = Driver {
            id: DriverId(20),
            name: "John Meyer".to_string(),
            vin: "WEE7868967777".to_string(),
            available: true,
        };

        let fields = driver
            .patched(DriverPatch {
                available: Some(false),
                ..Default::default()
            })
            .into_fields()
            .unwrap();

        assert_eq!(fields.name, "John Meyer");
        assert_eq!(fields.vin, "WEE7868967777");
        assert!(!fields.available);
    }

    #[test]
    fn driver_deserializes_without_availability() {
        let draft: DriverDraft =
            serde_json::from_str(r#"{"name": "Kari", "vin": "123"}"#).unwrap();
        assert!(draft.available.is_none());
        assert!(draft.into_fields().unwrap().available);
    }
}
