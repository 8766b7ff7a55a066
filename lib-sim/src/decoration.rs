use glam::{Vec2, vec2};
use rand::Rng;

use crate::Advance;
use crate::config::Config;

/// A background cloud. Purely visual.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pos: Vec2,
    speed: f32,
    scale: f32,
    size: Vec2,
    despawn_x: f32,
}

impl Decoration {
    /// Spawns a cloud just past the right edge of the screen.
    pub fn spawn(cfg: &Config, rng: &mut impl Rng) -> Self {
        let x = cfg.screen.width + cfg.decoration.spawn_offset.sample(rng);
        Self::at(x, cfg, rng)
    }

    /// Spawns a cloud somewhere across the visible screen, used to populate
    /// the sky on startup.
    pub fn scattered(cfg: &Config, rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0.0..=cfg.screen.width);
        Self::at(x, cfg, rng)
    }

    fn at(x: f32, cfg: &Config, rng: &mut impl Rng) -> Self {
        let dcfg = &cfg.decoration;
        let y = rng.random_range(0.0..=cfg.screen.height / 2.0);

        Decoration {
            pos: vec2(x, y),
            speed: -dcfg.speed.sample(rng),
            scale: dcfg.scale.sample(rng),
            size: vec2(dcfg.width.sample(rng), dcfg.height.sample(rng)),
            despawn_x: dcfg.despawn_x,
        }
    }

    /// Top-left corner.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Scale applied to the cloud image when one is available.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size of the placeholder ellipse drawn when no image is available.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x < self.despawn_x
    }
}

impl Advance for Decoration {
    fn advance(&mut self) {
        self.pos.x += self.speed;
    }
}
