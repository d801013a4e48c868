use derive_builder::Builder;
use itertools::Itertools;
use log::{debug, info};

use crate::log_metrics;
use crate::physic_engine::{CapacityStats, PhysicEngineFull, RandomSource, RngSource};
use crate::profiler::Profiler;

// =========================
// Driver Configuration
// =========================

/// Paramètres du driver headless (lancements utilisateur + auto-lancement).
#[derive(Clone, Builder, Debug)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct DriverSettings {
    /// Largeur du monde, pour le tirage de l'abscisse des lancements
    #[builder(default = "1280.0")]
    pub world_width: f32,

    /// Marge horizontale exclue des lancements aléatoires
    #[builder(default = "100.0")]
    pub launch_margin: f32,

    /// Nombre de ticks entre deux tentatives d'auto-lancement
    #[builder(default = "60")]
    pub auto_launch_period: u32,

    /// Chance (sur un tirage 0..=100) qu'une tentative lance une fusée
    #[builder(default = "30")]
    pub auto_launch_chance: i32,

    /// Intervalle (en ticks) entre deux logs de métriques ; 0 désactive
    #[builder(default = "300")]
    pub log_interval_ticks: u64,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            launch_margin: 100.0,
            auto_launch_period: 60,
            auto_launch_chance: 30,
            log_interval_ticks: 300,
        }
    }
}

/// Bilan d'une exécution du driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    pub ticks: u64,
    pub launches: u64,
    pub explosions: u64,
    pub spawned_particles: u64,
    pub peak_active_particles: usize,
    pub capacity_stats: CapacityStats,
}

/// Driver headless : remplace la boucle fenêtre/rendu de la démo.
///
/// Un `step` == un tick du coeur : livraison des lancements en attente,
/// auto-lancement, puis `update` du moteur physique.
pub struct Simulator<P, R = RngSource<rand::rngs::StdRng>>
where
    P: PhysicEngineFull,
    R: RandomSource,
{
    physic_engine: P,
    rng: R,
    settings: DriverSettings,

    pending_launches: Vec<f32>,
    auto_launch_counter: u32,
    launch_min_x: i32,
    launch_max_x: i32,

    profiler: Profiler,
    summary: SimulationSummary,
}

impl<P, R> Simulator<P, R>
where
    P: PhysicEngineFull,
    R: RandomSource,
{
    pub fn new(physic_engine: P, rng: R, settings: DriverSettings) -> Self {
        let mut simulator = Self {
            physic_engine,
            rng,
            settings,
            pending_launches: Vec::new(),
            auto_launch_counter: 0,
            launch_min_x: 0,
            launch_max_x: 0,
            profiler: Profiler::new(200),
            summary: SimulationSummary::default(),
        };
        simulator.update_launch_margin();
        simulator
    }

    fn update_launch_margin(&mut self) {
        // minmax : bornes toujours ordonnées, même si world_width < 2 * margin
        let margin = self.settings.launch_margin;
        (self.launch_min_x, self.launch_max_x) = [margin, self.settings.world_width - margin]
            .iter()
            .map(|v| v.round() as i32)
            .minmax()
            .into_option()
            .unwrap_or((0, 0));
    }

    pub fn set_world_width(&mut self, width: f32) {
        self.settings.world_width = width;
        self.update_launch_margin();
    }

    /// Met en file un lancement (équivalent d'un clic / appui sur espace).
    pub fn request_launch(&mut self, x: f32) {
        self.pending_launches.push(x);
    }

    /// Met en file un lancement à une abscisse aléatoire dans les marges.
    pub fn request_random_launch(&mut self) {
        let (min_x, max_x) = self.launch_range();
        let x = self.rng.int_inclusive(min_x, max_x) as f32;
        self.request_launch(x);
    }

    pub fn step(&mut self) {
        self.summary.ticks += 1;

        self.auto_launch_counter += 1;
        if self.auto_launch_counter > self.settings.auto_launch_period {
            if self.rng.int_inclusive(0, 100) < self.settings.auto_launch_chance {
                self.request_random_launch();
            }
            self.auto_launch_counter = 0;
        }

        for x in self.pending_launches.drain(..) {
            if self.physic_engine.launch(x) {
                self.summary.launches += 1;
            }
        }

        let physic_engine = &mut self.physic_engine;
        let update_result = self
            .profiler
            .profile_block("physic - update", move || physic_engine.update());

        for (i, expl) in update_result.triggered_explosions.iter().enumerate() {
            debug!(
                "💥 Explosion triggered: {} at ({}, {})",
                i, expl.pos.x, expl.pos.y
            );
        }
        self.summary.explosions += update_result.triggered_explosions.len() as u64;
        self.summary.spawned_particles += update_result.spawned_particles as u64;

        let active_particles = self.physic_engine.active_particle_count();
        self.summary.peak_active_particles =
            self.summary.peak_active_particles.max(active_particles);

        self.profiler
            .record_metric("active rockets", self.physic_engine.active_rocket_count());
        self.profiler
            .record_metric("active particles", active_particles);
        self.profiler.record_metric(
            "live particles",
            self.physic_engine.iter_live_particles().count(),
        );

        let interval = self.settings.log_interval_ticks;
        if interval > 0 && self.summary.ticks % interval == 0 {
            info!("Tick {}", self.summary.ticks);
            log_metrics!(&self.profiler);
        }
    }

    pub fn run(&mut self, ticks: u64) -> SimulationSummary {
        info!("🚀 Running {} ticks", ticks);
        for _ in 0..ticks {
            self.step();
        }
        self.summary()
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            capacity_stats: self.physic_engine.capacity_stats(),
            ..self.summary.clone()
        }
    }

    pub fn close(&mut self) {
        self.physic_engine.close();
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    pub fn launch_range(&self) -> (i32, i32) {
        (self.launch_min_x, self.launch_max_x)
    }
}
