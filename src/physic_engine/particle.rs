use crate::physic_engine::{
    color::Rgb, config::PhysicConfig, random::RandomSource, types::ExplosionEvent, types::Vec2,
};

/// Particule d'explosion.
///
/// `life <= 0` marque une particule morte : son slot reste en place (tombstone)
/// jusqu'à sa réutilisation par une explosion future.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub life: i32,
}

impl Particle {
    /// Tire une particule issue de l'explosion `event`.
    ///
    /// Ordre des tirages : angle, vitesse, jitter r/g/b, durée de vie.
    pub fn spawned<R: RandomSource + ?Sized>(
        event: &ExplosionEvent,
        cfg: &PhysicConfig,
        rng: &mut R,
    ) -> Self {
        let angle = rng.unit() * std::f32::consts::TAU;
        let speed =
            cfg.particle_speed_min + rng.unit() * (cfg.particle_speed_max - cfg.particle_speed_min);
        let color = event.color.jittered(rng, cfg.color_jitter);
        let life = cfg.particle_life_min + rng.int_inclusive(0, cfg.particle_life_extra);

        Self {
            pos: event.pos,
            vel: Vec2::from_angle(angle) * speed,
            color,
            life,
        }
    }

    #[inline(always)]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Un tick d'intégration ; sans effet sur une particule morte.
    #[inline(always)]
    pub fn integrate(&mut self, gravity: f32, drag: f32) {
        if !self.is_alive() {
            return;
        }
        self.pos += self.vel;
        self.vel.x *= drag;
        self.vel.y = self.vel.y * drag + gravity;
        self.life -= 1;
    }

    /// Opacité de rendu : `min(255, life * 4)`, nulle pour une particule morte.
    pub fn alpha(&self) -> u8 {
        self.life.saturating_mul(4).clamp(0, 255) as u8
    }

    /// Taille de rendu en pixels : `2 + life / 30`.
    pub fn size(&self) -> i32 {
        2 + self.life.max(0) / 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::random::ScriptedRandom;

    #[test]
    fn test_spawned_uses_draws_in_order() {
        let cfg = PhysicConfig::default();
        let event = ExplosionEvent {
            pos: Vec2::new(300.0, 200.0),
            color: Rgb::new(100, 100, 255),
        };
        // angle = 0.25 * TAU (vers le bas en y), vitesse = 2 + 0.5 * 6 = 5
        let mut rng = ScriptedRandom::default()
            .with_units([0.25, 0.5])
            .with_ints([-15, 0, 15, 40]);

        let p = Particle::spawned(&event, &cfg, &mut rng);

        assert_eq!(p.pos, event.pos);
        assert!(p.vel.x.abs() < 1e-5);
        assert!((p.vel.y - 5.0).abs() < 1e-5);
        assert_eq!(p.color, Rgb::new(85, 100, 255));
        assert_eq!(p.life, 100);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_speed_stays_in_configured_range() {
        let cfg = PhysicConfig::default();
        let event = ExplosionEvent::default();
        let mut rng = crate::physic_engine::random::RngSource::seeded(3);
        for _ in 0..1_000 {
            let p = Particle::spawned(&event, &cfg, &mut rng);
            let speed = p.vel.length();
            assert!((2.0 - 1e-4..8.0 + 1e-4).contains(&speed), "speed {speed}");
            assert!((60..=100).contains(&p.life));
        }
    }

    #[test]
    fn test_integrate_applies_drag_then_gravity() {
        let mut p = Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(2.0, -4.0),
            color: Rgb::default(),
            life: 2,
        };
        p.integrate(0.15, 0.98);
        assert_eq!(p.pos, Vec2::new(12.0, 6.0));
        assert!((p.vel.x - 1.96).abs() < 1e-6);
        assert!((p.vel.y - (-4.0 * 0.98 + 0.15)).abs() < 1e-6);
        assert_eq!(p.life, 1);

        p.integrate(0.15, 0.98);
        assert_eq!(p.life, 0);
        let frozen = p;
        p.integrate(0.15, 0.98);
        assert_eq!(p, frozen, "dead particle must stay untouched");
    }

    #[test]
    fn test_alpha_and_size() {
        let mut p = Particle {
            life: 100,
            ..Default::default()
        };
        assert_eq!(p.alpha(), 255);
        assert_eq!(p.size(), 5);

        p.life = 30;
        assert_eq!(p.alpha(), 120);
        assert_eq!(p.size(), 3);

        p.life = 29;
        assert_eq!(p.size(), 2);

        p.life = 0;
        assert_eq!(p.alpha(), 0);
        p.life = -3;
        assert_eq!(p.alpha(), 0);
        assert_eq!(p.size(), 2);
    }
}
