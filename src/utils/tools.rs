use log::info;

use crate::physic_engine::PhysicConfig;

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    // Versions injectées par build.rs (cargo metadata)
    info!("Rust core dependancies");
    info!("  rand version: {}", option_env!("RAND").unwrap_or("Unknown"));
    info!("  glam version: {}", option_env!("GLAM").unwrap_or("Unknown"));
}

/// Empreinte mémoire (octets) des deux pools pré-alloués pour une configuration.
pub fn pools_footprint(config: &PhysicConfig) -> usize {
    config.max_rockets * std::mem::size_of::<crate::physic_engine::Rocket>()
        + config.max_particles * std::mem::size_of::<crate::physic_engine::Particle>()
}
