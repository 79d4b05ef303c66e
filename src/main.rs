//! Deka entry point
//!
//! Native headless demo: juggles the ball with a scripted pointer and logs
//! the HUD. Frontends drive [`deka::Session`] directly.

use anyhow::{Context, Result};

use deka::render::DrawList;
use deka::sim::BallMetrics;
use deka::{PhysicsTuning, Session};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;
const BALL_SPRITE: (u32, u32) = (48, 48);
const BACKGROUND: (u32, u32) = (1920, 1280);
const FRAMES: u64 = 1200;
/// Scripted pointer catches the ball once it falls below this line
const CATCH_LINE: f32 = 420.0;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Deka (native) starting...");

    let tuning = match std::env::var("DEKA_TUNING") {
        Ok(path) => PhysicsTuning::load(&path)
            .with_context(|| format!("loading tuning from DEKA_TUNING={path}"))?,
        Err(_) => PhysicsTuning::default(),
    };
    let metrics = BallMetrics::from_sprite(BALL_SPRITE.0, BALL_SPRITE.1)
        .context("ball sprite metrics")?;

    let mut session = Session::new(WIDTH, HEIGHT, metrics, tuning)
        .context("creating session")?
        .with_background(BACKGROUND.0, BACKGROUND.1);
    let mut surface = DrawList::new();

    for frame in 0..FRAMES {
        let ball = session.chain().first();
        let (pos, vel) = (ball.position, ball.velocity);
        if vel.y > 0.0 && pos.y > CATCH_LINE {
            // Poke slightly off-center so the ball drifts sideways
            let nudge = if frame % 2 == 0 { 4.0 } else { -4.0 };
            session.pointer_moved(pos.x + nudge, pos.y + metrics.half_height * 0.5);
        } else {
            session.pointer_moved(-WIDTH, -HEIGHT);
        }

        if frame == FRAMES / 2 {
            // Tap the header strip at 3/4 width: time scale 1.5
            session.pointer_pressed(WIDTH * 0.75, HEIGHT - 4.0);
        }

        surface.clear();
        session.frame(&mut surface);

        if frame % 120 == 0 {
            log::info!("frame {frame}: {}", session.hud_text());
        }
    }

    println!("{}", session.hud_text());
    let snapshot = serde_json::to_string_pretty(session.chain().first())
        .context("serializing ball snapshot")?;
    println!("{snapshot}");
    Ok(())
}
