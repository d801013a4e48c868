//! Source d'aléa du coeur de simulation.
//!
//! Tous les tirages (couleurs, angles, vitesses, nombres de particules, durées de vie)
//! passent par le trait [`RandomSource`]. Le moteur en possède une seule instance,
//! ce qui permet de la remplacer par un script déterministe dans les tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Flottant uniforme dans `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Entier uniforme dans `[lo, hi]` (bornes incluses).
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32;

    /// Index uniforme dans `[0, len)`. `len` doit être non nul.
    fn pick(&mut self, len: usize) -> usize;
}

/// Adaptateur `rand::Rng` -> `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    /// Générateur reproductible
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Générateur initialisé depuis l'entropie de l'OS
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }

    #[inline]
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.random_range(lo..=hi)
    }

    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }

    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).int_inclusive(lo, hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub use self::scripted::ScriptedRandom;

#[cfg(any(test, feature = "test_helpers"))]
mod scripted {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Source d'aléa scriptée : rejoue des valeurs fournies à l'avance.
    ///
    /// Une fois une file vide, on retombe sur des valeurs neutres :
    /// `unit() = 0.0`, `int_inclusive(lo, hi) = 0` borné à `[lo, hi]`, `pick() = 0`.
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedRandom {
        units: VecDeque<f32>,
        ints: VecDeque<i32>,
        picks: VecDeque<usize>,
    }

    impl ScriptedRandom {
        pub fn with_units(mut self, values: impl IntoIterator<Item = f32>) -> Self {
            self.units.extend(values);
            self
        }

        pub fn with_ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
            self.ints.extend(values);
            self
        }

        pub fn with_picks(mut self, values: impl IntoIterator<Item = usize>) -> Self {
            self.picks.extend(values);
            self
        }

        /// Nombre total de valeurs scriptées pas encore consommées
        pub fn remaining(&self) -> usize {
            self.units.len() + self.ints.len() + self.picks.len()
        }
    }

    impl RandomSource for ScriptedRandom {
        fn unit(&mut self) -> f32 {
            self.units.pop_front().unwrap_or(0.0)
        }

        fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
            self.ints.pop_front().unwrap_or_else(|| 0.clamp(lo, hi))
        }

        fn pick(&mut self, len: usize) -> usize {
            self.picks
                .pop_front()
                .unwrap_or(0)
                .min(len.saturating_sub(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_ranges() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..10_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u), "unit out of range: {u}");

            let i = rng.int_inclusive(-15, 15);
            assert!((-15..=15).contains(&i));

            assert!(rng.pick(6) < 6);
        }
    }

    #[test]
    fn test_rng_source_bounds_are_inclusive() {
        let mut rng = RngSource::seeded(1);
        let draws: Vec<i32> = (0..5_000).map(|_| rng.int_inclusive(0, 40)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&40));
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let mut a = RngSource::seeded(1234);
        let mut b = RngSource::seeded(1234);
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
            assert_eq!(a.int_inclusive(0, 100), b.int_inclusive(0, 100));
        }
    }

    #[test]
    fn test_scripted_random_replays_then_falls_back() {
        let mut rng = ScriptedRandom::default()
            .with_units([0.25, 0.75])
            .with_ints([7])
            .with_picks([4]);

        assert_eq!(rng.remaining(), 4);
        assert_eq!(rng.unit(), 0.25);
        assert_eq!(rng.unit(), 0.75);
        assert_eq!(rng.unit(), 0.0);
        assert_eq!(rng.int_inclusive(0, 40), 7);
        assert_eq!(rng.int_inclusive(0, 40), 0);
        assert_eq!(rng.int_inclusive(-15, 15), 0);
        assert_eq!(rng.int_inclusive(5, 10), 5);
        assert_eq!(rng.pick(6), 4);
        assert_eq!(rng.pick(6), 0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_mut_reference_forwards() {
        fn draw<R: RandomSource>(mut rng: R) -> f32 {
            rng.unit()
        }

        let mut inner = ScriptedRandom::default().with_units([0.5, 0.125]);
        assert_eq!(draw(&mut inner), 0.5);
        assert_eq!(inner.unit(), 0.125);
    }
}
