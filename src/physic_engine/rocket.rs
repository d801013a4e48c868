use crate::physic_engine::{
    color::Rgb, config::PhysicConfig, random::RandomSource, types::ExplosionEvent, types::Vec2,
};

/// Représentation d’une fusée
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rocket {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
}

impl Rocket {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb) -> Self {
        Self { pos, vel, color }
    }

    /// Tire une nouvelle fusée au bas du monde, à l'abscisse `x`.
    ///
    /// Ordre des tirages : vx, vy, puis la couleur dans la palette.
    pub fn launched<R: RandomSource + ?Sized>(x: f32, cfg: &PhysicConfig, rng: &mut R) -> Self {
        let vx = cfg.launch_vx_min + rng.unit() * (cfg.launch_vx_max - cfg.launch_vx_min);
        let vy = cfg.launch_vy_max - rng.unit() * (cfg.launch_vy_max - cfg.launch_vy_min);
        let color = cfg.palette[rng.pick(cfg.palette.len())];

        Self {
            pos: Vec2::new(x, cfg.world_height),
            vel: Vec2::new(vx, vy),
            color,
        }
    }

    /// Intégration balistique d'un tick : la position avance avant la gravité.
    #[inline(always)]
    pub fn integrate(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }

    #[inline(always)]
    pub fn reached_apex(&self, apex_velocity: f32) -> bool {
        self.vel.y > apex_velocity
    }

    pub fn explosion(&self) -> ExplosionEvent {
        ExplosionEvent {
            pos: self.pos,
            color: self.color,
        }
    }
}
