use std::path::Path;

const PROTO_DIR: &str = "proto";
const PROTOS: [&str; 1] = ["generic.proto"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut files = vec![];
    for proto in PROTOS {
        let path = Path::new(PROTO_DIR).join(proto);
        if !path.exists() {
            panic!("Proto file not found: {}", path.display());
        }
        println!("cargo:rerun-if-changed={}", path.display());
        files.push(path);
    }

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&files, &[Path::new(PROTO_DIR).to_path_buf()])?;

    Ok(())
}
