#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::{
    config::PhysicConfig,
    particle::Particle,
    random::RandomSource,
    types::{ExplodeOutcome, ExplosionEvent},
};

/// Gère toutes les particules d'explosion du moteur.
///
/// # Rôle
/// Un vecteur unique pré-alloué à `max_particles` slots, dont seule la plage
/// `[0, active_count)` est lue. Cette plage mélange particules vivantes et
/// particules mortes (`life <= 0`) : il n'y a ni compaction ni free-list,
/// un slot mort est retrouvé par balayage linéaire lors d'une explosion future.
///
/// `active_count` ne décroît jamais (sauf `clear`).
#[derive(Debug, Clone)]
pub struct ParticlePool {
    /// Stockage global de toutes les particules (taille == capacité)
    particles: Vec<Particle>,
    active_count: usize,

    config: PhysicConfig,
}

impl ParticlePool {
    pub fn new(config: &PhysicConfig) -> Self {
        #[cfg(debug_assertions)]
        debug!(
            "ParticlePool initialized with {} slots",
            config.max_particles
        );

        Self {
            particles: vec![Particle::default(); config.max_particles],
            active_count: 0,
            config: config.clone(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.active_count >= self.capacity()
    }

    /// Plage active, particules mortes comprises.
    #[inline]
    pub fn active(&self) -> &[Particle] {
        &self.particles[..self.active_count]
    }

    /// Particules vivantes de la plage active.
    pub fn live(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.active().iter().filter(|p| p.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Transforme une explosion en un lot de particules.
    ///
    /// Le nombre de particules est tiré **avant** le premier contrôle de capacité.
    /// Dès que le pool est plein, le reste de l'explosion est abandonné
    /// (les particules déjà placées restent).
    pub fn explode<R: RandomSource + ?Sized>(
        &mut self,
        event: &ExplosionEvent,
        rng: &mut R,
    ) -> ExplodeOutcome {
        let extra = rng.int_inclusive(0, self.config.explosion_extra_particles as i32);
        let requested = self.config.explosion_min_particles + extra.max(0) as usize;

        let mut spawned = 0;
        for _ in 0..requested {
            if self.is_full() {
                break;
            }
            let slot = self.claim_slot();
            self.particles[slot] = Particle::spawned(event, &self.config, rng);
            spawned += 1;
        }

        ExplodeOutcome { requested, spawned }
    }

    /// Premier slot mort de la plage active, sinon extension de la plage.
    ///
    /// Balayage O(active_count) ; l'index mort le plus bas est toujours choisi.
    fn claim_slot(&mut self) -> usize {
        match self.active().iter().position(|p| !p.is_alive()) {
            Some(dead) => dead,
            None => {
                let slot = self.active_count;
                self.active_count += 1;
                slot
            }
        }
    }

    /// Avance toutes les particules vivantes d'un tick. Les slots morts ne bougent pas.
    pub fn advance(&mut self) {
        let gravity = self.config.gravity;
        let drag = self.config.drag;
        for p in &mut self.particles[..self.active_count] {
            p.integrate(gravity, drag);
        }
    }

    pub fn clear(&mut self) {
        self.particles.fill(Particle::default());
        self.active_count = 0;
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait ParticlePoolTestHelpers {
    /// Place une particule à la fin de la plage active, sans tirage.
    fn inject(&mut self, particle: Particle) -> Option<usize>;
    fn slot_mut(&mut self, index: usize) -> &mut Particle;
}

#[cfg(any(test, feature = "test_helpers"))]
impl ParticlePoolTestHelpers for ParticlePool {
    fn inject(&mut self, particle: Particle) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let slot = self.active_count;
        self.particles[slot] = particle;
        self.active_count += 1;
        Some(slot)
    }

    fn slot_mut(&mut self, index: usize) -> &mut Particle {
        assert!(
            index < self.active_count,
            "slot {index} is outside the active range"
        );
        &mut self.particles[index]
    }
}
