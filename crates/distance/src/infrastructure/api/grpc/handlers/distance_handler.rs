// crates/distance/src/infrastructure/api/grpc/handlers/distance_handler.rs

use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::application::measure_distance::MeasureDistanceUseCase;
use crate::infrastructure::api::grpc::mappers::{
    measured_reply, rejected_reply, to_measure_distance_command,
};
use super::super::distance_v1::{
    distance_service_server::DistanceService,
    Distance,
    SourceDest,
};

pub struct DistanceHandler {
    use_case: Arc<MeasureDistanceUseCase>,
}

impl DistanceHandler {
    pub fn new(use_case: Arc<MeasureDistanceUseCase>) -> Self {
        Self { use_case }
    }
}

#[tonic::async_trait]
impl DistanceService for DistanceHandler {
    async fn geodesic_distance(
        &self,
        request: Request<SourceDest>,
    ) -> Result<Response<Distance>, Status> {
        let req = request.into_inner();

        // 1. Transformation des types Proto vers Value Objects du Domaine.
        // Toute cause de rejet s'effondre en une seule réponse sentinelle :
        // le contrat n'expose jamais de Status d'erreur pour une entrée invalide.
        let command = match to_measure_distance_command(req) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected distance request: {}", e);
                return Ok(Response::new(rejected_reply()));
            }
        };

        // 2. Calcul dans l'unité résolue
        let unit = command.unit;
        let value = self.use_case.execute(command).await;

        Ok(Response::new(measured_reply(value, unit)))
    }
}
