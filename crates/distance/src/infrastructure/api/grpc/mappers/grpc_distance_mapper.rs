// crates/distance/src/infrastructure/api/grpc/mappers/grpc_distance_mapper.rs

use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};

use crate::application::measure_distance::MeasureDistanceCommand;
use crate::domain::value_objects::DistanceUnit;
use crate::infrastructure::api::grpc::distance_v1::{Distance, Position, SourceDest};

/// Valeurs sentinelles du contrat de réponse : toute entrée invalide produit
/// la paire (-1, "invalid") dans le payload, jamais un Status gRPC.
pub const REJECTED_DISTANCE: f64 = -1.0;
pub const REJECTED_UNIT: &str = "invalid";

/// Transformation des types Proto vers les Value Objects du Domaine.
/// C'est ici que tout se valide ; chaque cause de rejet (champ absent,
/// coordonnée hors bornes, unité inconnue) remonte en `DomainError`.
pub fn to_measure_distance_command(req: SourceDest) -> Result<MeasureDistanceCommand> {
    let source = to_geo_point(req.source, "source")?;
    let destination = to_geo_point(req.destination, "destination")?;
    let unit = DistanceUnit::resolve(&req.unit)?;

    Ok(MeasureDistanceCommand {
        source,
        destination,
        unit,
    })
}

fn to_geo_point(position: Option<Position>, field: &'static str) -> Result<GeoPoint> {
    let position = position.ok_or_else(|| DomainError::Validation {
        field,
        reason: "Position is missing".to_string(),
    })?;

    let latitude = position.latitude.ok_or_else(|| DomainError::Validation {
        field: "latitude",
        reason: "Field is missing".to_string(),
    })?;

    let longitude = position.longitude.ok_or_else(|| DomainError::Validation {
        field: "longitude",
        reason: "Field is missing".to_string(),
    })?;

    GeoPoint::try_new(latitude, longitude)
}

pub fn measured_reply(value: f64, unit: DistanceUnit) -> Distance {
    Distance {
        distance: value,
        unit: unit.as_str().to_string(),
    }
}

pub fn rejected_reply() -> Distance {
    Distance {
        distance: REJECTED_DISTANCE,
        unit: REJECTED_UNIT.to_string(),
    }
}
