// crates/shared-kernel/src/domain/value_objects/longitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Longitude géodésique en degrés décimaux, bornes ±180 incluses.
///
/// L'antiméridien est accepté sous ses deux écritures (-180 et 180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitude(f64);

impl Longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;

    pub fn try_new(val: f64) -> Result<Self> {
        let lon = Self(val);
        lon.validate()?;
        Ok(lon)
    }

    /// Construction sans validation, pour des données déjà vérifiées.
    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Longitude {
    fn validate(&self) -> Result<()> {
        if !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "longitude",
                reason: format!("Range must be between {} and {}", Self::MIN, Self::MAX),
            });
        }
        Ok(())
    }
}

impl FromStr for Longitude {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let val = s
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::Validation {
                field: "longitude",
                reason: "Invalid number format".to_string(),
            })?;
        Self::try_new(val)
    }
}
