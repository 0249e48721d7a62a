//! Ring Escape entry point
//!
//! Headless shell: drives the simulation with a fixed frame clock, logs the
//! countdown and the result, then prints the final snapshot as JSON.
//!
//! Usage: `ring-escape [config.json]`

use std::error::Error;

use glam::Vec2;

use ring_escape::renderer;
use ring_escape::{SimConfig, Simulation};

fn main() {
    env_logger::init();
    log::info!("Ring Escape (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let dt = config.frame_dt();
    let mut sim = Simulation::new(config)?;

    let mut last_countdown = u32::MAX;
    let mut frames: u64 = 0;
    loop {
        let outcome = sim.step(dt);
        frames += 1;

        let snapshot = sim.snapshot();
        if snapshot.remaining_secs != last_countdown {
            last_countdown = snapshot.remaining_secs;
            log::info!(
                "{} (ball at distance {:.1})",
                snapshot.countdown_text(),
                sim.ball().distance_from_center()
            );
        }

        if outcome.is_terminal() {
            break;
        }
    }

    let snapshot = sim.snapshot();
    let world_size = Vec2::new(sim.config().world_width, sim.config().world_height);
    let frame = renderer::frame(&snapshot, world_size);
    log::debug!(
        "Final frame: {} vertices ({} bytes)",
        frame.vertices.len(),
        frame.vertex_bytes().len()
    );

    if let Some((text, color)) = frame.banner {
        log::info!(
            "{} (rgba {:?}) after {} frames, {} bounces",
            text,
            color,
            frames,
            sim.bounces()
        );
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
