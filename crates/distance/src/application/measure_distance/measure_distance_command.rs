// crates/distance/src/application/measure_distance/measure_distance_command.rs

use crate::domain::value_objects::DistanceUnit;
use shared_kernel::domain::value_objects::GeoPoint;

/// Commande construite uniquement à partir de Value Objects déjà validés :
/// une requête rejetée n'atteint jamais le Use Case.
#[derive(Debug, Clone, Copy)]
pub struct MeasureDistanceCommand {
    pub source: GeoPoint,
    pub destination: GeoPoint,
    pub unit: DistanceUnit,
}
