// crates/shared-kernel/src/domain/value_objects/geo_point.rs

use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Rayon moyen terrestre (modèle sphérique), en kilomètres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Point sur la surface terrestre, composé d'une latitude et d'une
/// longitude déjà bornées.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: Latitude,
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lon)?,
        })
    }

    pub fn from_raw(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Latitude::from_raw(lat),
            longitude: Longitude::from_raw(lon),
        }
    }

    // --- Getters ---
    pub fn lat(&self) -> f64 {
        self.latitude.value()
    }
    pub fn lon(&self) -> f64 {
        self.longitude.value()
    }

    /// Distance orthodromique (grand cercle) vers `other`, en kilomètres.
    ///
    /// Haversine sur une sphère de rayon moyen 6371 km. Deux points
    /// identiques bit à bit donnent exactement 0. Le terme intermédiaire est
    /// borné à [0, 1] avant l'étape de trigonométrie inverse : des points
    /// antipodaux ne peuvent donc jamais produire NaN.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = other.lat().to_radians();

        let delta_phi = (other.lat() - self.lat()).to_radians();
        let delta_lambda = (other.lon() - self.lon()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

        // Les erreurs d'arrondi peuvent pousser `a` hors de [0, 1]
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        Ok(())
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(DomainError::Validation {
                field: "geopoint",
                reason: "Format 'lat,lon' expected".to_string(),
            });
        }

        let lat = parts[0].parse::<Latitude>()?;
        let lon = parts[1].parse::<Longitude>()?;

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }
}
