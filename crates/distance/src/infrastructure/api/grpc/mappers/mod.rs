mod grpc_distance_mapper;

pub use grpc_distance_mapper::*;
