mod input;
mod render;

pub mod sys;

pub use input::*;
pub use render::*;

use log::{info, warn};
use macroquad::prelude::*;

pub const GAME_TICKRATE: f32 = 1.0 / 60.0;

/// The trait containing all callbacks for the game,
/// that is run inside the App.
///
/// Every rendered frame the App does the following:
/// 1. Captures the input and queues the gameplay events
/// 2. If a tick is due, calls Game::update with the queued events
/// 3. Calls Game::render_export and draws the result
pub trait Game: 'static {
    /// Advance the game by one tick. `input` holds every event captured
    /// since the previous tick, oldest first.
    fn update(&mut self, dt: f32, input: &[InputEvent]);

    /// Export the game state for rendering.
    fn render_export(&self, render: &mut Render);
}

/// The app runs all the boilerplate code to make the game tick.
/// The following features are provided:
/// * Consistent tickrate timing
/// * Input queueing between ticks
/// * Fullscreen toggling
/// * Graceful window closing
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),

    accumulated_time: f32,
    queued: Vec<InputEvent>,

    pub render: Render,
}

impl App {
    pub fn new(conf: &Conf, view: Rect) -> Self {
        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),

            accumulated_time: 0.0,
            queued: Vec::new(),

            render: Render::new(view),
        }
    }

    /// Just runs the game. This is what you call after loading all the resources.
    /// This method returns once the user closes the window.
    pub async fn run<G: Game>(mut self, game: &mut G) {
        prevent_quit();
        sys::done_loading();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        loop {
            let input = InputModel::capture();
            if input.quit_requested {
                info!("Quit requested");
                break;
            }

            let real_dt = get_frame_time();
            let do_tick = self.update_ticking(real_dt);
            self.fullscreen_toggles(&input);

            self.queued.extend(input.events());
            if do_tick {
                game.update(GAME_TICKRATE, &self.queued);
                self.queued.clear();
            }

            self.render.new_frame();
            game.render_export(&mut self.render);
            self.render.render();

            next_frame().await
        }
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            macroquad::miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    /// Decides whether this frame runs a tick. When the frame time falls
    /// behind by two ticks or more, the backlog is dropped and a single
    /// tick still runs.
    fn update_ticking(&mut self, real_dt: f32) -> bool {
        self.accumulated_time += real_dt;
        if self.accumulated_time >= 2.0 * GAME_TICKRATE {
            warn!(
                "LAG by {:.2}ms",
                (self.accumulated_time - 2.0 * GAME_TICKRATE) * 1000.0
            );
            self.accumulated_time = 0.0;
            true
        } else if self.accumulated_time >= GAME_TICKRATE {
            self.accumulated_time -= GAME_TICKRATE;
            true
        } else {
            false
        }
    }
}
