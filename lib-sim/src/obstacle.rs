use rand::Rng;

use crate::Advance;
use crate::collision::Aabb;
use crate::config::sections::ObstacleCfg;

/// A gate: a top and a bottom segment with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    x: f32,
    gap_center: f32,
    gap: f32,
    width: f32,
    velocity: f32,
    screen_height: f32,
    passed: bool,
}

impl Obstacle {
    /// Spawns a gate at `spawn_x` with the gap center drawn uniformly so that
    /// both segments keep at least `margin` of height.
    pub fn new(spawn_x: f32, screen_height: f32, cfg: &ObstacleCfg, rng: &mut impl Rng) -> Self {
        let half_gap = cfg.gap / 2.0;
        let min_center = cfg.margin + half_gap;
        let max_center = screen_height - cfg.margin - half_gap;
        debug_assert!(min_center <= max_center, "gap does not fit the screen");

        let gap_center = if max_center > min_center {
            rng.random_range(min_center..=max_center)
        } else {
            min_center
        };

        Self::with_gap_center(spawn_x, gap_center, screen_height, cfg)
    }

    pub fn with_gap_center(
        spawn_x: f32,
        gap_center: f32,
        screen_height: f32,
        cfg: &ObstacleCfg,
    ) -> Self {
        Obstacle {
            x: spawn_x,
            gap_center,
            gap: cfg.gap,
            width: cfg.width,
            velocity: cfg.velocity,
            screen_height,
            passed: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn gap_center(&self) -> f32 {
        self.gap_center
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn top_segment(&self) -> Aabb {
        let height = self.gap_center - self.gap / 2.0;
        Aabb::from_xywh(self.x, 0.0, self.width, height)
    }

    pub fn bottom_segment(&self) -> Aabb {
        let y = self.gap_center + self.gap / 2.0;
        Aabb::from_xywh(self.x, y, self.width, self.screen_height - y)
    }

    pub fn segments(&self) -> [Aabb; 2] {
        [self.top_segment(), self.bottom_segment()]
    }

    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Marks the gate as passed once `avatar_x` is beyond its trailing edge.
    /// Returns `true` only on the call that flips the flag.
    pub fn pass_if_crossed(&mut self, avatar_x: f32) -> bool {
        if self.passed || avatar_x <= self.top_segment().right() {
            return false;
        }
        self.passed = true;
        true
    }
}

impl Advance for Obstacle {
    fn advance(&mut self) {
        self.x += self.velocity;
    }
}
