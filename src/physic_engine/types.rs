use crate::physic_engine::color::Rgb;
use crate::physic_engine::particle::Particle;

pub use glam::Vec2;

// ------------------------
// ExplosionEvent
// ------------------------
/// Demande d'explosion émise par une fusée à l'apex.
///
/// Les données sont copiées depuis la fusée : l'événement ne référence jamais
/// le pool de fusées.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplosionEvent {
    pub pos: Vec2,
    pub color: Rgb,
}

// ------------------------
// ExplodeOutcome
// ------------------------
/// Bilan d'un `ParticlePool::explode` (instrumentation uniquement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplodeOutcome {
    /// Nombre de particules tirées au sort pour cette explosion
    pub requested: usize,
    /// Nombre de particules réellement placées dans le pool
    pub spawned: usize,
}

impl ExplodeOutcome {
    pub fn dropped(&self) -> usize {
        self.requested - self.spawned
    }

    /// Classe la saturation éventuelle du pool pendant l'explosion.
    pub fn capacity_drop(&self) -> Option<CapacityDrop> {
        match (self.spawned, self.dropped()) {
            (_, 0) => None,
            (0, _) => Some(CapacityDrop::ExplosionRejected),
            _ => Some(CapacityDrop::ExplosionTruncated),
        }
    }
}

// ------------------------
// CapacityDrop
// ------------------------
/// Les trois cas de saturation silencieuse du coeur de simulation.
///
/// Jamais utilisés pour le contrôle de flux : uniquement pour les logs et les compteurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityDrop {
    /// `launch` appelé alors que le pool de fusées est plein
    LaunchRejected,
    /// Pool de particules déjà plein au début de l'explosion
    ExplosionRejected,
    /// Pool de particules rempli au milieu d'une explosion : le reste est abandonné
    ExplosionTruncated,
}

/// Compteurs cumulés des saturations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityStats {
    pub launches_rejected: u64,
    pub explosions_rejected: u64,
    pub explosions_truncated: u64,
    pub particles_dropped: u64,
}

impl CapacityStats {
    pub fn record(&mut self, drop: CapacityDrop) {
        match drop {
            CapacityDrop::LaunchRejected => self.launches_rejected += 1,
            CapacityDrop::ExplosionRejected => self.explosions_rejected += 1,
            CapacityDrop::ExplosionTruncated => self.explosions_truncated += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.launches_rejected + self.explosions_rejected + self.explosions_truncated
    }
}

// ------------------------
// UpdateResult
// ------------------------
pub struct UpdateResult<'a> {
    /// Explosions déclenchées pendant ce tick, dans l'ordre de traitement
    pub triggered_explosions: &'a [ExplosionEvent],
    /// Particules effectivement créées par ces explosions
    pub spawned_particles: usize,
}

// ------------------------
// ParticleInstance
// ------------------------
/// Donnée d'instance prête pour un upload GPU (renderer externe).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 2],
    /// RGBA normalisé, l'alpha vient de la durée de vie restante
    pub color: [f32; 4],
    pub size: f32,
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        let [r, g, b] = p.color.to_normalized();
        Self {
            pos: p.pos.to_array(),
            color: [r, g, b, p.alpha() as f32 / 255.0],
            size: p.size() as f32,
        }
    }
}
