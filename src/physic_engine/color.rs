use serde::Deserialize;

use crate::physic_engine::random::RandomSource;

/// Couleur RGB 8 bits par canal.
///
/// Se désérialise depuis un tableau TOML `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Décale chaque canal (r, puis g, puis b) d'un tirage dans `[-amount, amount]`,
    /// borné à `[0, 255]`.
    pub fn jittered<R: RandomSource + ?Sized>(self, rng: &mut R, amount: i32) -> Self {
        let mut out = self.0;
        for channel in out.iter_mut() {
            let offset = rng.int_inclusive(-amount, amount);
            *channel = (*channel as i32 + offset).clamp(0, 255) as u8;
        }
        Self(out)
    }

    pub fn to_normalized(self) -> [f32; 3] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

/// Palette fixe des fusées.
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(255, 100, 100),
    Rgb::new(100, 255, 100),
    Rgb::new(100, 100, 255),
    Rgb::new(255, 255, 100),
    Rgb::new(255, 100, 255),
    Rgb::new(100, 255, 255),
];
