mod render;

use lib_game::{Game, InputEvent, Render};
use lib_sim::{Config, Event, GameWorld};
use log::warn;

use render::{AVATAR_TEXTURE, CLOUD_TEXTURE, OBSTACLE_TEXTURE, SKY_COLOR, UI_FONT};

#[cfg(not(target_family = "wasm"))]
type Store = lib_sim::FileStore;
#[cfg(target_family = "wasm")]
type Store = lib_sim::MemoryStore;

#[cfg(not(target_family = "wasm"))]
fn open_store() -> Store {
    lib_sim::FileStore::new("highscore.txt")
}

#[cfg(target_family = "wasm")]
fn open_store() -> Store {
    lib_sim::MemoryStore::new()
}

pub struct Project {
    world: GameWorld<Store>,
}

impl Project {
    pub async fn new(cfg: Config, seed: u64, render: &mut Render) -> Self {
        load_resources(render).await;

        Self {
            world: GameWorld::new(cfg, seed, open_store()),
        }
    }
}

impl Game for Project {
    fn update(&mut self, dt: f32, input: &[InputEvent]) {
        let events = input.iter().map(|event| match event {
            InputEvent::Action => Event::Action,
            InputEvent::Restart => Event::Restart,
        });
        self.world.tick(dt, events);
    }

    fn render_export(&self, render: &mut Render) {
        render::export(&self.world, render);
    }
}

/// Every asset is optional. A missing one only swaps its user
/// to a procedural placeholder.
async fn load_resources(render: &mut Render) {
    render.clear_color = SKY_COLOR;

    let textures = [
        (AVATAR_TEXTURE, "assets/avatar.png"),
        (OBSTACLE_TEXTURE, "assets/obstacle.png"),
        (CLOUD_TEXTURE, "assets/cloud.png"),
    ];
    for (key, path) in textures {
        if let Err(e) = render.load_texture(key, path).await {
            warn!("{e:#}. Using a placeholder");
        }
    }

    match render.load_font(UI_FONT, "assets/ui.ttf").await {
        Ok(()) => render.ui_font = UI_FONT,
        Err(e) => warn!("{e:#}. Using the built-in font"),
    }
}
