//! Planet Strike entry point
//!
//! Headless driver: runs one scripted match at a fixed seed and logs the
//! events the host shell would render. The browser shell owns real input
//! and drawing; this binary exists to smoke-test the core end to end.

use planet_strike::consts::{GAME_DURATION, SIM_DT};
use planet_strike::sim::{GameSession, TickInput};
use serde_json::json;

fn main() {
    env_logger::init();
    log::info!("Planet Strike core (headless) starting...");

    let mut session = GameSession::new(0xC0FFEE);
    let total_ticks = (GAME_DURATION / SIM_DT) as u32 + 60;

    let mut destroyed = 0u32;
    for tick_index in 0..total_ticks {
        let mut input = TickInput::default();

        // Cruise forward while slowly sweeping the view, firing in short taps
        input.control.forward = true;
        input.control.rotate_left = tick_index % 600 < 300;
        input.control.rotate_right = !input.control.rotate_left;
        input.aim_direction = session.avatar().forward();
        input.fire = tick_index % 90 == 0;
        input.release = tick_index % 90 == 60;

        let result = session.tick(&input);
        if let Some(hit) = &result.destroyed {
            destroyed += 1;
            log::info!(
                "destroyed {} planet for {} points (score {})",
                hit.category.as_str(),
                hit.points,
                session.score()
            );
        }
        if let Some(final_score) = result.game_over {
            let (minutes, seconds) = session.remaining_display();
            log::info!("game over at {minutes}:{seconds:02}, final score {final_score}");
        }
    }

    let summary = json!({
        "score": session.score(),
        "planets_destroyed": destroyed,
        "population": session.registry().total(),
    });
    println!("{summary}");
}
