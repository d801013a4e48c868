pub mod simulator;
pub use simulator::{DriverSettings, DriverSettingsBuilder, SimulationSummary, Simulator};
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
pub use physic_engine::PhysicEngineFireworks;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
