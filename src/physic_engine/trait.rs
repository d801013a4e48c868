use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::{CapacityStats, UpdateResult};

/// Lecture seule des pools, pour un renderer externe.
pub trait PhysicEngineIterator {
    /// Retourne un itérateur sur les fusées actives (toutes vivantes).
    fn iter_active_rockets<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Rocket> + 'a>;

    /// Retourne un itérateur sur les particules vivantes (`life > 0`) de la plage active.
    fn iter_live_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune aux moteurs pilotés par un driver externe, un tick à la fois.
/// Le moteur n'a aucune notion de temps réel : un appel à `update` == un tick.
///
/// Aucune méthode ne remonte d'erreur : les saturations de capacité sont des
/// no-op silencieux, visibles seulement via `capacity_stats`.
pub trait PhysicEngine {
    /// Demande de lancement d'une fusée à l'abscisse `x`.
    /// Retourne `false` si le pool de fusées est plein (rien n'a changé).
    fn launch(&mut self, x: f32) -> bool;

    /// Avance la simulation d'un tick et retourne les événements du tick.
    fn update(&mut self) -> UpdateResult<'_>;

    /// Ferme / vide le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn get_config(&self) -> &PhysicConfig;

    fn active_rocket_count(&self) -> usize;

    fn active_particle_count(&self) -> usize;

    fn capacity_stats(&self) -> CapacityStats {
        CapacityStats::default()
    }
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineIterator {}
