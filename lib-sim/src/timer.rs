use rand::Rng;

use crate::config::Config;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        IntervalTimer {
            period,
            elapsed: 0.0,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Returns `true` when the timer fired. The overshoot is carried over
    /// into the next period.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.period {
            return false;
        }
        self.elapsed -= self.period;
        true
    }

    /// Changes the period of the running cycle.
    pub fn rearm(&mut self, period: f32) {
        self.period = period;
    }
}

/// The two spawn timers of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    obstacles: IntervalTimer,
    decorations: IntervalTimer,
}

impl Scheduler {
    pub fn new(cfg: &Config, rng: &mut impl Rng) -> Self {
        Scheduler {
            obstacles: IntervalTimer::new(cfg.obstacle.spawn_period),
            decorations: IntervalTimer::new(cfg.decoration.first_period.sample(rng)),
        }
    }

    /// Pushes the spawn events that became due during `dt`.
    pub fn advance(&mut self, dt: f32, queue: &mut Vec<Event>) {
        if self.obstacles.advance(dt) {
            queue.push(Event::SpawnObstacle);
        }
        if self.decorations.advance(dt) {
            queue.push(Event::SpawnDecoration);
        }
    }

    pub fn decoration_period(&self) -> f32 {
        self.decorations.period()
    }

    pub fn rearm_decorations(&mut self, period: f32) {
        self.decorations.rearm(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut timer = IntervalTimer::new(1.5);
        let fired = (0..200).filter(|_| timer.advance(1.0 / 60.0)).count();

        assert_eq!(fired, 2);
    }

    #[test]
    fn carries_overshoot() {
        let mut timer = IntervalTimer::new(1.0);

        assert!(!timer.advance(0.75));
        assert!(timer.advance(0.75));
        assert!(timer.advance(0.5));
        assert!(!timer.advance(0.25));
    }
}
