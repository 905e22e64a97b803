use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Puts the workspace config.toml next to the built binary, where
// `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml in workspace root, the embedded default is used");
        return;
    }

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let profile = env::var("PROFILE").unwrap();
    let Some(binary_dir) = out_dir.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target/{profile} not found, config.toml not copied");
        return;
    };

    let dest = binary_dir.join("config.toml");
    fs::copy(&source, &dest)
        .unwrap_or_else(|e| panic!("failed to copy config.toml to {}: {e}", dest.display()));
}
