use anyhow::Context;
use game::Project;
use lib_game::{App, sys};
use lib_sim::Config;
use log::{error, info, warn};
use macroquad::prelude::*;

mod game;

const CONFIG_PATH: &str = "assets/config.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: "Gate Flyer".to_owned(),
        high_dpi: true,
        window_width: 800,
        window_height: 400,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_family = "wasm"))]
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("Driver exited with error: {e:#}");
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let cfg = load_config().await?;
    let seed = cfg
        .run
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
    info!("RNG seed: {seed}");

    let view = Rect::new(0.0, 0.0, cfg.screen.width, cfg.screen.height);
    let mut app = App::new(&window_conf(), view);
    let mut project = Project::new(cfg, seed, &mut app.render).await;

    app.run(&mut project).await;

    Ok(())
}

async fn load_config() -> anyhow::Result<Config> {
    let cfg = match load_string(CONFIG_PATH).await {
        Err(e) => {
            info!("No config at {CONFIG_PATH:?} ({e}), using defaults");
            Config::default()
        }
        Ok(src) => match Config::from_ron(&src) {
            Ok(cfg) => {
                info!("Loaded config from {CONFIG_PATH:?}");
                cfg
            }
            Err(e) => {
                warn!("Bad config at {CONFIG_PATH:?}, using defaults: {e:#}");
                Config::default()
            }
        },
    };
    cfg.validate().context("Validating game config")?;

    Ok(cfg)
}
