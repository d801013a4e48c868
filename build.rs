// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Récupère la metadata du projet
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(e) => {
            // Pas bloquant : les versions s'afficheront "Unknown" au runtime
            println!("cargo:warning=⚪ cargo metadata indisponible ({e})");
            return;
        }
    };

    // Crates dont on veut tracer la version résolue (RNG + maths du coeur)
    let tracked = HashSet::from(["rand", "glam"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env={}={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
