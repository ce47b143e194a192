// crates/shared-kernel/src/domain/value_objects/latitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Latitude géodésique en degrés décimaux.
///
/// Les bornes sont inclusives : les pôles (±90) sont des latitudes valides,
/// et aucune tolérance n'est accordée au-delà (90.0000001 est rejeté).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latitude(f64);

impl Latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;

    pub fn try_new(val: f64) -> Result<Self> {
        let lat = Self(val);
        lat.validate()?;
        Ok(lat)
    }

    /// Construction sans validation, pour des données déjà vérifiées.
    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        if !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "latitude",
                reason: format!("Range must be between {} and {}", Self::MIN, Self::MAX),
            });
        }
        Ok(())
    }
}

impl FromStr for Latitude {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let val = s
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::Validation {
                field: "latitude",
                reason: "Invalid number format".to_string(),
            })?;
        Self::try_new(val)
    }
}
