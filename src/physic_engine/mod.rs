pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};

pub mod types;
pub use self::types::{
    CapacityDrop, CapacityStats, ExplodeOutcome, ExplosionEvent, ParticleInstance, UpdateResult,
    Vec2,
};

pub mod color;
pub use self::color::Rgb;

pub mod random;
pub use self::random::{RandomSource, RngSource};

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::PhysicConfig;

pub mod rocket_pool;
pub use self::rocket_pool::RocketPool;

pub mod particle_pool;
pub use self::particle_pool::ParticlePool;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
