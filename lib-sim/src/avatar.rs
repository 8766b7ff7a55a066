use glam::Vec2;

use crate::Advance;
use crate::collision::Aabb;
use crate::config::Config;

/// The player controlled flyer. Its x never changes; gravity and impulses
/// only act on y.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pos: Vec2,
    velocity: f32,
    angle: f32,

    start: Vec2,
    half_extents: Vec2,
    floor: f32,
    gravity: f32,
    impulse: f32,
    tilt_factor: f32,
    tilt_smoothing: f32,
}

impl Avatar {
    pub fn new(cfg: &Config) -> Self {
        let start = cfg.avatar_start();

        Avatar {
            pos: start,
            velocity: 0.0,
            angle: 0.0,

            start,
            half_extents: cfg.avatar.size / 2.0,
            floor: cfg.screen.height,
            gravity: cfg.physics.gravity,
            impulse: cfg.physics.impulse,
            tilt_factor: cfg.physics.tilt_factor,
            tilt_smoothing: cfg.physics.tilt_smoothing,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Visual tilt in degrees. Positive values mean nose up.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    /// Overwrites the vertical velocity. Impulses never accumulate.
    pub fn apply_impulse(&mut self) {
        self.velocity = self.impulse;
    }

    pub fn reset(&mut self) {
        self.pos = self.start;
        self.velocity = 0.0;
        self.angle = 0.0;
    }

    fn ceiling_y(&self) -> f32 {
        self.half_extents.y
    }

    fn floor_y(&self) -> f32 {
        self.floor - self.half_extents.y
    }
}

impl Advance for Avatar {
    fn advance(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;

        if self.pos.y > self.floor_y() {
            self.pos.y = self.floor_y();
            self.velocity = 0.0;
        }
        if self.pos.y < self.ceiling_y() {
            self.pos.y = self.ceiling_y();
            self.velocity = 0.0;
        }

        let target = -self.velocity * self.tilt_factor;
        self.angle += (target - self.angle) * self.tilt_smoothing;
    }
}
