// backend/services/distance/src/main.rs

use std::sync::Arc;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tonic_reflection::server::Builder;

use distance::application::measure_distance::MeasureDistanceUseCase;
use distance::infrastructure::api::grpc::distance_v1::distance_service_server::DistanceServiceServer;
use distance::infrastructure::api::grpc::handlers::DistanceHandler;
use distance::infrastructure::api::grpc::SERVICE_DESCRIPTOR_SET;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "50051".to_string());

    run_server(format!("0.0.0.0:{}", port).parse()?).await
}

pub async fn run_server(addr: std::net::SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    // --- INITIALISATION DU SERVICE DE SANTÉ ---
    let (health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<DistanceServiceServer<DistanceHandler>>()
        .await;

    // --- INITIALISATION DU SERVICE DE RÉFLEXION ---
    let reflection_service = Builder::configure()
        .register_encoded_file_descriptor_set(SERVICE_DESCRIPTOR_SET)
        .build_v1()?;

    // --- USE CASE (Application) ---
    // Sans état ni dépendance : une instance partagée suffit
    let measure_distance_use_case = Arc::new(MeasureDistanceUseCase::new());

    // --- HANDLER (API) ---
    let distance_handler = DistanceHandler::new(measure_distance_use_case);

    // --- DÉMARRAGE DU SERVEUR TONIC ---
    println!("🚀 Distance Service listening on {}", addr);

    Server::builder()
        .add_service(health_service)
        .add_service(reflection_service)
        .add_service(DistanceServiceServer::new(distance_handler))
        .serve(addr)
        .await?;

    Ok(())
}
