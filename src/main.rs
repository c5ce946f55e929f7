//! Rock Drift entry point
//!
//! Native builds run a headless session: the autopilot plays at a simulated
//! 60 Hz while a logging renderer reports progress, then the final frame is
//! printed as JSON.
//!
//! Usage: `rock-drift [config.json] [--frames N] [--seed S]`

use std::path::PathBuf;

use clap::Parser;

use rock_drift::Config;
use rock_drift::autopilot::Autopilot;
use rock_drift::consts::FRAME_MS;
use rock_drift::driver::{FrameView, GameLoop, Renderer};
use rock_drift::sim::{GameEvent, Playfield};

/// Logs a summary line every `every` frames and every notable event
struct LogRenderer {
    every: u64,
    frame: u64,
    games: u32,
    best_score: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, view: &FrameView<'_>) {
        let state = view.state;
        self.frame += 1;
        self.best_score = self.best_score.max(state.score);

        for event in &state.events {
            match event {
                GameEvent::Reset => self.games += 1,
                GameEvent::ShipDestroyed { .. } => {
                    log::info!("Game {} over at frame {}: score {}", self.games, self.frame, state.score)
                }
                _ => {}
            }
        }

        if self.frame % self.every == 0 {
            log::info!(
                "frame {:>6} | score {:>6} | asteroids {:>3} | bullets {:>2} | spawn every {:.0}ms",
                self.frame,
                state.score,
                state.asteroids.len(),
                state.bullets.len(),
                state.spawn_interval_ms
            );
        }
    }
}

/// Rock Drift - headless autopilot session
#[derive(Parser, Debug)]
#[command(name = "rock-drift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file (tuning + settings)
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 60 * 120)]
    frames: u64,

    /// RNG seed for the session
    #[arg(short, long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    env_logger::init();
    log::info!("Rock Drift (headless) starting...");

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };

    let renderer = LogRenderer {
        every: 600,
        frame: 0,
        games: 1,
        best_score: 0,
    };
    let mut game = GameLoop::new(args.seed, Playfield::default(), config, renderer);
    let mut pilot = Autopilot::new();

    game.start(0.0);
    for i in 1..=args.frames {
        let now = f64::from(FRAME_MS) * i as f64;
        let input = pilot.input(&game.state);
        game.frame(now, &input);
    }

    log::info!(
        "Ran {} frames over {} game(s), best score {}",
        game.frames(),
        game.renderer.games,
        game.renderer.best_score
    );

    match serde_json::to_string_pretty(&game.state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {e}"),
    }
}
