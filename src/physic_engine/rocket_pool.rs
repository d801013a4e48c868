#[cfg(debug_assertions)]
use log::debug;

use crate::physic_engine::{
    config::PhysicConfig, random::RandomSource, rocket::Rocket, types::ExplosionEvent,
};

/// Pool de fusées à capacité fixe.
///
/// # Rôle
/// Les fusées vivent dans un vecteur pré-alloué à `max_rockets` slots.
/// Les indices `[0, active_count)` sont **toujours** des fusées vivantes :
/// une fusée qui atteint l'apex est retirée par swap-remove (le dernier slot actif
/// est recopié à sa place), l'ordre des fusées n'est donc pas conservé.
#[derive(Debug, Clone)]
pub struct RocketPool {
    /// Stockage de toutes les fusées (taille == capacité)
    rockets: Vec<Rocket>,
    active_count: usize,

    /// Explosions déclenchées au dernier `advance` (capacité == max_rockets)
    triggered_explosions: Vec<ExplosionEvent>,

    config: PhysicConfig,
}

impl RocketPool {
    pub fn new(config: &PhysicConfig) -> Self {
        #[cfg(debug_assertions)]
        debug!("RocketPool initialized with {} slots", config.max_rockets);

        Self {
            rockets: vec![Rocket::default(); config.max_rockets],
            active_count: 0,
            triggered_explosions: Vec::with_capacity(config.max_rockets),
            config: config.clone(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.rockets.len()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.active_count >= self.capacity()
    }

    /// Fusées actives, toutes vivantes.
    #[inline]
    pub fn active(&self) -> &[Rocket] {
        &self.rockets[..self.active_count]
    }

    /// Lance une fusée depuis le bas du monde à l'abscisse `x`.
    ///
    /// Pool plein : no-op silencieux, aucun tirage aléatoire n'est consommé.
    /// Le `None` ne sert qu'à l'instrumentation.
    pub fn launch<R: RandomSource + ?Sized>(&mut self, x: f32, rng: &mut R) -> Option<&Rocket> {
        if self.is_full() {
            return None;
        }
        let rocket = Rocket::launched(x, &self.config, rng);
        self.push(rocket)
    }

    /// Ajoute une fusée déjà construite, même politique de saturation que `launch`.
    pub fn push(&mut self, rocket: Rocket) -> Option<&Rocket> {
        if self.is_full() {
            return None;
        }
        let slot = self.active_count;
        self.rockets[slot] = rocket;
        self.active_count += 1;
        Some(&self.rockets[slot])
    }

    /// Avance toutes les fusées d'un tick et retire celles qui atteignent l'apex.
    ///
    /// Retourne les explosions déclenchées, dans l'ordre de détection. Le slice
    /// reste valide jusqu'au prochain appel.
    pub fn advance(&mut self) -> &[ExplosionEvent] {
        self.triggered_explosions.clear();
        let gravity = self.config.gravity;
        let apex_velocity = self.config.apex_velocity;

        // Curseur manuel : après un swap-remove le slot contient une fusée
        // pas encore visitée, on ré-examine donc le même index.
        let mut i = 0;
        while i < self.active_count {
            let rocket = &mut self.rockets[i];
            rocket.integrate(gravity);

            if rocket.reached_apex(apex_velocity) {
                self.triggered_explosions.push(rocket.explosion());
                self.swap_remove(i);
            } else {
                i += 1;
            }
        }

        &self.triggered_explosions
    }

    /// Dernières explosions produites par `advance`.
    pub fn triggered_explosions(&self) -> &[ExplosionEvent] {
        &self.triggered_explosions
    }

    /// Vide le pool (les slots sont conservés).
    pub fn clear(&mut self) {
        self.active_count = 0;
        self.triggered_explosions.clear();
    }

    fn swap_remove(&mut self, index: usize) {
        let last = self.active_count - 1;
        if index != last {
            self.rockets[index] = self.rockets[last];
        }
        self.active_count = last;
    }
}
