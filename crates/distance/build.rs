// crates/distance/build.rs

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = "src/infrastructure/api/grpc/proto";
    let proto_root = "../../proto";

    std::fs::create_dir_all(out_dir)?;

    let descriptor_path = std::path::PathBuf::from(out_dir).join("distance_descriptor.bin");

    tonic_prost_build::configure()
        .out_dir(out_dir)
        .file_descriptor_set_path(&descriptor_path)
        .compile_protos(
            &[format!("{}/distance/v1/distance.proto", proto_root)],
            &[proto_root.to_string()],
        )?;

    println!("cargo:rerun-if-changed={}", proto_root);
    Ok(())
}
