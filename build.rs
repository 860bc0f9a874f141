fn main() {
    println!("cargo:rerun-if-changed=proto/timekeeper.proto");

    // Use a vendored protoc binary so CI machines do not need system-level protoc installed.
    let protoc_path = protoc_bin_vendored::protoc_bin_path()
        .expect("protoc binary should be available via protoc-bin-vendored");

    std::env::set_var("PROTOC", protoc_path);

    tonic_build::configure()
        .build_server(true)
        .compile(&["proto/timekeeper.proto"], &["proto"])
        .unwrap();
}
