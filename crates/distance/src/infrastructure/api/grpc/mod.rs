// crates/distance/src/infrastructure/api/grpc/mod.rs
pub mod handlers;
pub mod mappers;

// Code généré par build.rs (tonic-prost-build) depuis proto/distance/v1
pub mod distance_v1_raw_proto {
    pub mod distance {
        pub mod v1 {
            include!("proto/distance.v1.rs");
            pub const FILE_DESCRIPTOR_SET: &[u8] =
                include_bytes!("proto/distance_descriptor.bin");
        }
    }
}

// --- FACADE ---
// Pour simplifier les imports dans les handlers
pub use distance_v1_raw_proto::distance::v1 as distance_v1;
pub const SERVICE_DESCRIPTOR_SET: &[u8] = distance_v1::FILE_DESCRIPTOR_SET;
