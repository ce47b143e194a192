mod distance_handler;

pub use distance_handler::DistanceHandler;
