// crates/distance/src/application/measure_distance/measure_distance_use_case.rs

use crate::application::measure_distance::MeasureDistanceCommand;

/// Calcule la distance orthodromique entre deux points validés, restituée
/// dans l'unité résolue. Sans état : une seule instance est partagée entre
/// toutes les requêtes.
#[derive(Default)]
pub struct MeasureDistanceUseCase;

impl MeasureDistanceUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Calcul pur, aucune voie d'échec : les préconditions (coordonnées
    /// bornées, unité reconnue) sont garanties par la construction de la
    /// commande.
    pub async fn execute(&self, command: MeasureDistanceCommand) -> f64 {
        let km = command.source.distance_to(&command.destination);
        command.unit.from_km(km)
    }
}
