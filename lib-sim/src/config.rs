use anyhow::{Context, ensure};
use glam::{Vec2, vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An inclusive range of values to draw uniformly from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(self, rng: &mut impl Rng) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }

    fn is_ordered(self) -> bool {
        self.min <= self.max
    }
}

macro_rules! game_cfg {
    (
        $( $section_name:ident : $section_ty:ident {
            $( $(#[$field_meta:meta])* $field_name:ident : $field_ty:ty = $default:expr ),+ $(,)?
        } ),*
        $(,)?
    ) => {
        /// Every tunable of the game. Sections and fields missing from a
        /// config file keep their default values.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
        #[serde(default)]
        pub struct Config {
            $( pub $section_name : sections::$section_ty ),+
        }

        pub mod sections {
            use super::*;

            $(
                #[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
                #[serde(default)]
                pub struct $section_ty {
                    $( $(#[$field_meta])* pub $field_name : $field_ty ),+
                }

                impl Default for $section_ty {
                    fn default() -> Self {
                        Self {
                            $( $field_name : $default ),+
                        }
                    }
                }
            )+
        }
    };
}

game_cfg! {
    screen: ScreenCfg {
        width: f32 = 800.0,
        height: f32 = 400.0,
    },
    physics: PhysicsCfg {
        gravity: f32 = 0.5,
        impulse: f32 = -8.0,
        tilt_factor: f32 = 3.0,
        tilt_smoothing: f32 = 0.1,
    },
    avatar: AvatarCfg {
        /// Defaults to a quarter of the screen width, halfway down.
        start: Option<Vec2> = None,
        size: Vec2 = vec2(40.0, 30.0),
        hitbox_shrink: Vec2 = vec2(25.0, 15.0),
    },
    obstacle: ObstacleCfg {
        gap: f32 = 140.0,
        width: f32 = 60.0,
        velocity: f32 = -3.0,
        margin: f32 = 50.0,
        hitbox_shrink: f32 = 10.0,
        spawn_period: f32 = 1.5,
    },
    decoration: DecorationCfg {
        first_period: Span = Span::new(2.0, 4.0),
        period: Span = Span::new(2.0, 5.0),
        speed: Span = Span::new(0.5, 1.5),
        scale: Span = Span::new(0.25, 0.6),
        width: Span = Span::new(60.0, 120.0),
        height: Span = Span::new(30.0, 50.0),
        spawn_offset: Span = Span::new(10.0, 100.0),
        despawn_x: f32 = -1000.0,
        initial_count: u32 = 3,
    },
    run: RunCfg {
        seed: Option<u64> = None,
    },
}

impl Config {
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        let cfg = ron::from_str(src).context("Parsing game config")?;
        Ok(cfg)
    }

    /// Where the avatar spawns and respawns.
    pub fn avatar_start(&self) -> Vec2 {
        self.avatar
            .start
            .unwrap_or(vec2(self.screen.width / 4.0, self.screen.height / 2.0))
    }

    /// Checks that the constants describe a playable world. A failure here
    /// is a defect of the config, not something the game loop can recover from.
    pub fn validate(&self) -> anyhow::Result<()> {
        let screen = &self.screen;
        let obstacle = &self.obstacle;
        let avatar = &self.avatar;
        let decoration = &self.decoration;

        ensure!(
            screen.width > 0.0 && screen.height > 0.0,
            "screen must have a positive size, got {}x{}",
            screen.width,
            screen.height
        );
        ensure!(
            obstacle.gap > 0.0 && obstacle.width > 0.0 && obstacle.margin >= 0.0,
            "obstacle gap and width must be positive and margin non-negative"
        );
        ensure!(
            obstacle.gap + 2.0 * obstacle.margin <= screen.height,
            "obstacle gap {} with margins {} does not fit into screen height {}",
            obstacle.gap,
            obstacle.margin,
            screen.height
        );
        ensure!(
            obstacle.velocity < 0.0,
            "obstacles must move left, got velocity {}",
            obstacle.velocity
        );
        ensure!(
            (0.0..obstacle.width).contains(&obstacle.hitbox_shrink),
            "obstacle hitbox shrink {} must be within [0, {})",
            obstacle.hitbox_shrink,
            obstacle.width
        );
        ensure!(
            obstacle.spawn_period > 0.0,
            "obstacle spawn period must be positive"
        );
        ensure!(
            self.physics.impulse < 0.0,
            "impulse must point up, got {}",
            self.physics.impulse
        );
        ensure!(
            avatar.size.x > 0.0 && avatar.size.y > 0.0,
            "avatar must have a positive size"
        );
        ensure!(
            avatar.hitbox_shrink.cmpge(Vec2::ZERO).all()
                && avatar.hitbox_shrink.cmplt(avatar.size).all(),
            "avatar hitbox shrink {} must be within [0, {})",
            avatar.hitbox_shrink,
            avatar.size
        );
        let start = self.avatar_start();
        ensure!(
            start.y - avatar.size.y / 2.0 > 0.0 && start.y + avatar.size.y / 2.0 < screen.height,
            "avatar must start fully inside the screen"
        );

        let spans = [
            ("first_period", decoration.first_period),
            ("period", decoration.period),
            ("speed", decoration.speed),
            ("scale", decoration.scale),
            ("width", decoration.width),
            ("height", decoration.height),
            ("spawn_offset", decoration.spawn_offset),
        ];
        for (name, span) in spans {
            ensure!(
                span.is_ordered(),
                "decoration {name} range is inverted: {span:?}"
            );
        }
        ensure!(
            decoration.first_period.min > 0.0 && decoration.period.min > 0.0,
            "decoration spawn periods must be positive"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn partial_override() {
        let cfg = Config::from_ron("(obstacle: (gap: 120.0), run: (seed: Some(7)))").unwrap();

        assert_eq!(cfg.obstacle.gap, 120.0);
        assert_eq!(cfg.obstacle.width, 60.0);
        assert_eq!(cfg.run.seed, Some(7));
        assert_eq!(cfg.screen, sections::ScreenCfg::default());
        cfg.validate().unwrap();
    }

    #[test]
    fn gap_too_large() {
        let mut cfg = Config::default();
        cfg.obstacle.gap = 350.0;

        assert!(cfg.validate().is_err());
    }

    #[test]
    fn avatar_start_follows_screen() {
        let cfg = Config::from_ron("(screen: (height: 600.0))").unwrap();
        assert_eq!(cfg.avatar_start(), vec2(200.0, 300.0));
        assert_eq!(Config::default().avatar_start(), vec2(200.0, 200.0));

        let cfg = Config::from_ron("(avatar: (start: Some((100.0, 50.0))))").unwrap();
        assert_eq!(cfg.avatar_start(), vec2(100.0, 50.0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Config::from_ron("(screen: 12").is_err());
    }

    #[test]
    fn span_sample_stays_inside() {
        use rand::SeedableRng;

        let mut rng = rand_pcg::Pcg32::seed_from_u64(3);
        let span = Span::new(2.0, 5.0);
        for _ in 0..1000 {
            assert!(span.contains(span.sample(&mut rng)));
        }
        assert_eq!(Span::new(1.0, 1.0).sample(&mut rng), 1.0);
    }
}
