use anyhow::{ensure, Context};
use serde::Deserialize;

use crate::physic_engine::color::{Rgb, DEFAULT_PALETTE};

/// Constantes de la simulation, figées à la construction du moteur.
///
/// Toutes les valeurs s'expriment "par tick" : le coeur n'a aucune notion de temps réel.
/// Repère y vers le bas (la gravité est positive).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    pub max_particles: usize,
    pub max_rockets: usize,

    pub gravity: f32,
    /// Amortissement des vitesses des particules (fusées non concernées)
    pub drag: f32,
    /// Une fusée explose dès que sa vitesse verticale dépasse ce seuil
    pub apex_velocity: f32,
    /// Ordonnée de lancement des fusées (bas de l'écran)
    pub world_height: f32,

    pub launch_vx_min: f32,
    pub launch_vx_max: f32,
    pub launch_vy_min: f32,
    pub launch_vy_max: f32,

    pub explosion_min_particles: usize,
    pub explosion_extra_particles: usize,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_life_min: i32,
    pub particle_life_extra: i32,
    pub color_jitter: i32,

    pub palette: Vec<Rgb>,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            max_particles: 5000,
            max_rockets: 20,
            gravity: 0.15,
            drag: 0.98,
            apex_velocity: -2.0,
            world_height: 720.0,
            launch_vx_min: -2.0,
            launch_vx_max: 2.0,
            launch_vy_min: -16.0,
            launch_vy_max: -12.0,
            explosion_min_particles: 80,
            explosion_extra_particles: 40,
            particle_speed_min: 2.0,
            particle_speed_max: 8.0,
            particle_life_min: 60,
            particle_life_extra: 40,
            color_jitter: 15,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read physic config '{path}'"))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("invalid TOML in '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des plages et des capacités.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.max_rockets > 0, "max_rockets must be > 0");
        ensure!(self.max_particles > 0, "max_particles must be > 0");
        ensure!(!self.palette.is_empty(), "palette must not be empty");
        ensure!(
            (0.0..=1.0).contains(&self.drag),
            "drag must be in [0, 1], got {}",
            self.drag
        );
        ensure!(
            self.launch_vx_min <= self.launch_vx_max,
            "launch_vx_min ({}) > launch_vx_max ({})",
            self.launch_vx_min,
            self.launch_vx_max
        );
        ensure!(
            self.launch_vy_min <= self.launch_vy_max,
            "launch_vy_min ({}) > launch_vy_max ({})",
            self.launch_vy_min,
            self.launch_vy_max
        );
        ensure!(
            self.particle_speed_min <= self.particle_speed_max,
            "particle_speed_min ({}) > particle_speed_max ({})",
            self.particle_speed_min,
            self.particle_speed_max
        );
        ensure!(
            self.particle_life_min > 0 && self.particle_life_extra >= 0,
            "particle life range must be positive"
        );
        ensure!(
            self.particle_life_min
                .checked_add(self.particle_life_extra)
                .is_some(),
            "particle_life_min + particle_life_extra too large ({} + {})",
            self.particle_life_min,
            self.particle_life_extra
        );
        ensure!(
            (0..=255).contains(&self.color_jitter),
            "color_jitter must be in [0, 255], got {}",
            self.color_jitter
        );
        ensure!(
            self.explosion_extra_particles <= i32::MAX as usize
                && self
                    .explosion_min_particles
                    .checked_add(self.explosion_extra_particles)
                    .is_some(),
            "explosion particle count too large"
        );
        Ok(())
    }
}
