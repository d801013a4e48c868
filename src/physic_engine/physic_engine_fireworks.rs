use log::{debug, trace};
use rand::rngs::StdRng;

use crate::physic_engine::{
    config::PhysicConfig,
    particle::Particle,
    particle_pool::ParticlePool,
    random::{RandomSource, RngSource},
    rocket::Rocket,
    rocket_pool::RocketPool,
    types::{CapacityDrop, CapacityStats, ParticleInstance, UpdateResult},
    PhysicEngine, PhysicEngineFull, PhysicEngineIterator,
};

/// Moteur complet : pool de fusées + pool de particules + source d'aléa unique.
///
/// Ordre d'un tick (`update`) :
/// 1. `RocketPool::advance` -> explosions déclenchées
/// 2. `ParticlePool::explode` pour chaque explosion, dans l'ordre
/// 3. `ParticlePool::advance`
///
/// Les lancements sont livrés par le driver via `launch`, avant `update`.
#[derive(Debug)]
pub struct PhysicEngineFireworks<R: RandomSource = RngSource<StdRng>> {
    rockets: RocketPool,
    particles: ParticlePool,
    rng: R,

    config: PhysicConfig,
    capacity_stats: CapacityStats,
}

impl PhysicEngineFireworks<RngSource<StdRng>> {
    /// Moteur reproductible
    pub fn with_seed(config: &PhysicConfig, seed: u64) -> Self {
        Self::new(config, RngSource::seeded(seed))
    }
}

impl<R: RandomSource> PhysicEngineFireworks<R> {
    /// Construit le moteur après validation de la configuration.
    pub fn try_new(config: &PhysicConfig, rng: R) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::new(config, rng))
    }

    /// La configuration doit être valide (`PhysicConfig::validate`) :
    /// une palette vide ou des plages qui débordent font paniquer les tirages.
    pub fn new(config: &PhysicConfig, rng: R) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid physic config: {:?}",
            config.validate().err()
        );
        debug!(
            "PhysicEngineFireworks: {} rocket slots, {} particle slots",
            config.max_rockets, config.max_particles
        );
        Self {
            rockets: RocketPool::new(config),
            particles: ParticlePool::new(config),
            rng,
            config: config.clone(),
            capacity_stats: CapacityStats::default(),
        }
    }

    pub fn rockets(&self) -> &RocketPool {
        &self.rockets
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    fn launch_rocket(&mut self, x: f32) -> bool {
        match self.rockets.launch(x, &mut self.rng) {
            Some(r) => {
                debug!("🚀 Rocket launched at ({}, {})", r.pos.x, r.pos.y);
                true
            }
            None => {
                self.record_drop(CapacityDrop::LaunchRejected);
                false
            }
        }
    }

    fn tick(&mut self) -> UpdateResult<'_> {
        let mut spawned_particles = 0;

        // `triggered` emprunte `rockets` ; particules et rng sont des champs disjoints
        let triggered = self.rockets.advance();
        for event in triggered {
            let outcome = self.particles.explode(event, &mut self.rng);
            debug!(
                "💥 Explosion at ({:.1}, {:.1}): {}/{} particles",
                event.pos.x, event.pos.y, outcome.spawned, outcome.requested
            );
            spawned_particles += outcome.spawned;

            if let Some(drop) = outcome.capacity_drop() {
                trace!("{:?}: {} particles dropped", drop, outcome.dropped());
                self.capacity_stats.record(drop);
                self.capacity_stats.particles_dropped += outcome.dropped() as u64;
            }
        }

        self.particles.advance();

        UpdateResult {
            triggered_explosions: self.rockets.triggered_explosions(),
            spawned_particles,
        }
    }

    fn record_drop(&mut self, drop: CapacityDrop) {
        trace!("{:?}", drop);
        self.capacity_stats.record(drop);
    }

    /// Remplit `out` avec les instances de rendu des particules vivantes.
    /// Retourne le nombre d'instances écrites.
    pub fn fill_particle_instances(&self, out: &mut Vec<ParticleInstance>) -> usize {
        out.clear();
        out.extend(self.particles.live().map(ParticleInstance::from));
        out.len()
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl<R: RandomSource> PhysicEngineIterator for PhysicEngineFireworks<R> {
    fn iter_active_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a> {
        Box::new(self.rockets.active().iter())
    }

    fn iter_live_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.live())
    }
}

impl<R: RandomSource> PhysicEngine for PhysicEngineFireworks<R> {
    fn launch(&mut self, x: f32) -> bool {
        self.launch_rocket(x)
    }

    fn update(&mut self) -> UpdateResult<'_> {
        self.tick()
    }

    fn close(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn active_rocket_count(&self) -> usize {
        self.rockets.active_count()
    }

    fn active_particle_count(&self) -> usize {
        self.particles.active_count()
    }

    fn capacity_stats(&self) -> CapacityStats {
        self.capacity_stats
    }
}

impl<R: RandomSource> PhysicEngineFull for PhysicEngineFireworks<R> {}
