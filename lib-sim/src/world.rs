use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Advance;
use crate::avatar::Avatar;
use crate::collision::{Tolerance, collides};
use crate::config::Config;
use crate::decoration::Decoration;
use crate::event::Event;
use crate::obstacle::Obstacle;
use crate::score::{HighScoreStore, Scoreboard};
use crate::timer::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

/// Owns the whole mutable state of a session.
#[derive(Debug)]
pub struct GameWorld<S> {
    cfg: Config,
    phase: Phase,
    avatar: Avatar,
    obstacles: Vec<Obstacle>,
    decorations: Vec<Decoration>,
    scoreboard: Scoreboard<S>,
    scheduler: Scheduler,
    rng: Pcg32,
    events: Vec<Event>,
}

impl<S: HighScoreStore> GameWorld<S> {
    pub fn new(cfg: Config, seed: u64, store: S) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let scheduler = Scheduler::new(&cfg, &mut rng);
        let decorations = (0..cfg.decoration.initial_count)
            .map(|_| Decoration::scattered(&cfg, &mut rng))
            .collect();

        GameWorld {
            phase: Phase::Active,
            avatar: Avatar::new(&cfg),
            obstacles: Vec::new(),
            decorations,
            scoreboard: Scoreboard::open(store),
            scheduler,
            rng,
            events: Vec::new(),
            cfg,
        }
    }

    /// Runs one frame: input events first, then due timer events, then
    /// physics. Timers and physics only run if the session was active when
    /// the frame started, so the frame of a restart leaves the fresh state
    /// untouched.
    pub fn tick(&mut self, dt: f32, input: impl IntoIterator<Item = Event>) {
        let was_active = self.phase == Phase::Active;

        self.events.extend(input);
        if was_active {
            self.scheduler.advance(dt, &mut self.events);
        }

        let mut events = std::mem::take(&mut self.events);
        for event in events.drain(..) {
            self.handle(event);
        }
        self.events = events;

        if was_active && self.phase == Phase::Active {
            self.step();
        }
    }

    fn handle(&mut self, event: Event) {
        match (self.phase, event) {
            (Phase::Active, Event::Action) => self.avatar.apply_impulse(),
            (Phase::Active, Event::Restart) => (),
            (Phase::Active, Event::SpawnObstacle) => {
                let obstacle = Obstacle::new(
                    self.cfg.screen.width,
                    self.cfg.screen.height,
                    &self.cfg.obstacle,
                    &mut self.rng,
                );
                self.obstacles.push(obstacle);
            }
            (Phase::Active, Event::SpawnDecoration) => {
                self.decorations
                    .push(Decoration::spawn(&self.cfg, &mut self.rng));
                let period = self.cfg.decoration.period.sample(&mut self.rng);
                self.scheduler.rearm_decorations(period);
            }
            (Phase::GameOver, Event::Action | Event::Restart) => self.restart(),
            (Phase::GameOver, Event::SpawnObstacle | Event::SpawnDecoration) => (),
        }
    }

    fn step(&mut self) {
        let movers = std::iter::once(&mut self.avatar as &mut dyn Advance)
            .chain(self.obstacles.iter_mut().map(|x| x as &mut dyn Advance))
            .chain(self.decorations.iter_mut().map(|x| x as &mut dyn Advance));
        for mover in movers {
            mover.advance();
        }

        let bounds = self.avatar.bounds();
        let hit = collides(bounds, &self.obstacles, Tolerance::from_config(&self.cfg));
        let out = bounds.top() <= 0.0 || bounds.bottom() >= self.cfg.screen.height;
        if hit || out {
            info!(
                "Game over (hit: {hit}, out of bounds: {out}), score {}",
                self.scoreboard.score()
            );
            self.phase = Phase::GameOver;
        }

        let avatar_x = bounds.left();
        for obstacle in &mut self.obstacles {
            if obstacle.pass_if_crossed(avatar_x) {
                self.scoreboard.score_point();
            }
        }

        self.obstacles.retain(|x| !x.is_offscreen());
        self.decorations.retain(|x| !x.is_offscreen());
    }

    fn restart(&mut self) {
        self.obstacles.clear();
        self.avatar.reset();
        self.scoreboard.reset();
        self.phase = Phase::Active;
        info!("Restarted");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn scoreboard(&self) -> &Scoreboard<S> {
        &self.scoreboard
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    /// Places a prepared gate into the world, bypassing the spawn timer.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
