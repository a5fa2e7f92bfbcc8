//! Headless playground demo
//!
//! Run with: `cargo run --bin playground [level.json]`
//!
//! Loads the built-in demo level (or a level file given as the first
//! argument), then drives the fixed-step simulation with a scripted input
//! tape: run right, grab the coin, stomp the enemy, jump the pit, reach
//! the goal. Set `RUST_LOG=debug` to watch mode transitions and contacts.

use std::error::Error;
use std::path::Path;

use ledge_runner_engine::game::{Playground, demo_level};
use ledge_runner_engine::input::InputState;
use ledge_runner_engine::world::LevelData;

/// Fixed simulation step, 60 Hz.
const DT: f32 = 1.0 / 60.0;
/// Total steps to simulate (20 seconds).
const STEPS: u32 = 1200;
/// Jump ahead of the enemy at x=10 so the arc comes down on it; the stomp
/// bounce then carries the player across the pit at x 14..18.
const JUMP_AT_X: f32 = 7.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let level = match std::env::args().nth(1) {
        Some(path) => LevelData::from_file(Path::new(&path))?,
        None => demo_level(),
    };
    log::info!(
        "level loaded: {} colliders, {} triggers, spawn {}",
        level.colliders.len(),
        level.triggers.len(),
        level.spawn
    );

    let mut playground = Playground::new(level)?;
    let mut input = InputState::new();
    let mut jumped = false;

    for step in 0..STEPS {
        input.set_right(true);

        let at_jump_mark =
            playground.player().grounded() && playground.player().position().x >= JUMP_AT_X;
        if at_jump_mark && !jumped {
            input.set_jump(true);
            jumped = true;
        } else {
            input.set_jump(false);
        }

        let report = playground.step(input.sample(), DT);

        if playground.levels_completed() > 0 {
            println!("reached the goal at step {}", step);
            break;
        }
        if step % 60 == 0 {
            log::debug!(
                "t={:>4.1}s pos={} mode={:?}",
                step as f32 * DT,
                report.position,
                report.mode
            );
        }
    }

    println!(
        "coins: {}  health: {}  deaths: {}  levels completed: {}",
        playground.player().coins(),
        playground.player().health(),
        playground.deaths(),
        playground.levels_completed()
    );
    Ok(())
}
