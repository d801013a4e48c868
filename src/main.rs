// Ici on importe depuis la crate lib complète
use anyhow::{Context, Result};
use log::{info, warn};
use std::env;

use fireworks_core::physic_engine::{config::PhysicConfig, RngSource};
use fireworks_core::utils::{pools_footprint, show_rust_core_dependencies};
use fireworks_core::{DriverSettingsBuilder, PhysicEngineFireworks, Simulator};

const DEFAULT_TICKS: u64 = 3600;

/// Benchmark headless du coeur de simulation : N ticks, sans fenêtre ni rendu.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks core benchmark...");

    show_rust_core_dependencies();

    let physic_config = match PhysicConfig::from_file("assets/config/physic.toml") {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default physic config: {e:#}");
            PhysicConfig::default()
        }
    };
    info!("Physic config loaded:\n{:#?}", physic_config);
    info!(
        "Pools footprint: {} bytes",
        pools_footprint(&physic_config)
    );

    // priorité à l'argument CLI, puis à la variable d'environnement
    let ticks = match env::args()
        .nth(1)
        .or_else(|| env::var("FIREWORKS_TICKS").ok())
    {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid tick count '{raw}'"))?,
        None => DEFAULT_TICKS,
    };

    let seed = env::var("FIREWORKS_SEED")
        .ok()
        .map(|raw| {
            raw.parse::<u64>()
                .with_context(|| format!("invalid FIREWORKS_SEED '{raw}'"))
        })
        .transpose()?;

    let (physic_engine, driver_rng) = match seed {
        Some(seed) => {
            info!("Deterministic run, seed = {seed}");
            (
                PhysicEngineFireworks::try_new(&physic_config, RngSource::seeded(seed))?,
                RngSource::seeded(seed.wrapping_add(1)),
            )
        }
        None => (
            PhysicEngineFireworks::try_new(&physic_config, RngSource::from_entropy())?,
            RngSource::from_entropy(),
        ),
    };

    let settings = DriverSettingsBuilder::default().build()?;
    let mut simulator = Simulator::new(physic_engine, driver_rng, settings);

    let summary = simulator.run(ticks);
    info!("Simulation summary:\n{:#?}", summary);
    simulator.close();

    Ok(())
}
