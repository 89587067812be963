#![forbid(unsafe_code)]

//! Orrery: a GPU glyph-grid viewer for procedurally generated star maps.
//!
//! Startup is strictly fail-fast: font loading, atlas construction, and
//! world generation all happen before the window exists, and any failure
//! aborts with a logged error. The event loop only starts once everything
//! the frame path needs is built.

mod app;
mod config;
mod input;

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use orrery_render::{Atlas, BitmapFont};
use orrery_world::Genesis;

use crate::app::App;
use crate::config::Config;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let font = match &config.font_path {
        Some(path) => BitmapFont::load_bdf(path)?,
        None => BitmapFont::builtin(),
    };
    let atlas = Atlas::build(&font, config.atlas_scale);

    let mut genesis = Genesis::new(config.seed);
    let map = genesis.create_map(config.map_size);

    let star = genesis.create_star();
    info!(
        class = ?star.class,
        mass = star.mass,
        luminosity = star.luminosity,
        temperature = star.temperature,
        age = star.age,
        planets = star.planets.len(),
        "system generated"
    );
    for planet in &star.planets {
        info!(
            class = ?planet.class,
            mass = planet.mass,
            orbit = planet.orbital_distance,
            period = planet.orbital_period(),
            gravity = planet.gravity,
            "planet"
        );
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, atlas, map);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.take_init_error() {
        return Err(err.into());
    }
    Ok(())
}
