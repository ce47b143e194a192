// crates/distance/src/domain/value_objects/distance_unit.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::str::FromStr;

/// Facteur de conversion fixe : 1 km = 0.539957 milles nautiques.
const KM_TO_NM: f64 = 0.539957;

/// Unité de restitution d'une distance.
///
/// Le jeton vide se résout en kilomètres (unité par défaut). La
/// reconnaissance est stricte : ni variantes de casse ni abréviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Nm,
}

impl DistanceUnit {
    pub fn resolve(token: &str) -> Result<Self> {
        match token {
            "" | "km" => Ok(Self::Km),
            "nm" => Ok(Self::Nm),
            _ => Err(DomainError::Validation {
                field: "unit",
                reason: format!("Unknown unit '{}', expected 'km' or 'nm'", token),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Nm => "nm",
        }
    }

    /// Convertit une distance exprimée en kilomètres vers cette unité.
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            Self::Km => km,
            Self::Nm => km * KM_TO_NM,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}
