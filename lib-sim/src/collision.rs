//! Tolerant hit detection between the avatar and the gates.
//!
//! Screen coordinates are used throughout: `X` points right, `Y` points down.

use glam::{Vec2, vec2};

use crate::config::Config;
use crate::obstacle::Obstacle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb {
            min: vec2(x, y),
            max: vec2(x + width, y + height),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(self, other: Self) -> bool {
        (self.min.x < other.max.x && self.max.x > other.min.x)
            && (self.min.y < other.max.y && self.max.y > other.min.y)
    }

    pub fn contains(self, point: Vec2) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn left(self) -> f32 {
        self.min.x
    }

    pub fn right(self) -> f32 {
        self.max.x
    }

    pub fn top(self) -> f32 {
        self.min.y
    }

    pub fn bottom(self) -> f32 {
        self.max.y
    }

    pub fn expand(self, delta: Vec2) -> Aabb {
        Aabb {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Shrinks the box around its center so that its size decreases by
    /// `amount` in total. The size never goes below zero.
    pub fn shrink(self, amount: Vec2) -> Aabb {
        let half = (amount / 2.0).min(self.size() / 2.0);
        self.expand(-half)
    }

    pub fn translate(self, offset: Vec2) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// How much of the visual bounds is forgiven when testing for hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub avatar: Vec2,
    pub segment: Vec2,
}

impl Tolerance {
    pub fn from_config(cfg: &Config) -> Self {
        Tolerance {
            avatar: cfg.avatar.hitbox_shrink,
            segment: vec2(cfg.obstacle.hitbox_shrink, 0.0),
        }
    }
}

pub fn collides<'a>(
    avatar: Aabb,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
    tolerance: Tolerance,
) -> bool {
    let segments = obstacles
        .into_iter()
        .flat_map(|obstacle| obstacle.segments());
    hits_any(avatar, segments, tolerance)
}

/// Same as [collides], but over bare segment boxes.
pub fn hits_any(
    avatar: Aabb,
    segments: impl IntoIterator<Item = Aabb>,
    tolerance: Tolerance,
) -> bool {
    let hitbox = avatar.shrink(tolerance.avatar);

    segments
        .into_iter()
        .any(|segment| hitbox.overlaps(segment.shrink(tolerance.segment)))
}
