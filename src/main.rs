//! Headless script runner (default binary).
//!
//! Reads an action script from stdin, plays it against a seeded engine and
//! prints the final snapshot as JSON on stdout.
//!
//! Script keys: `h` left, `l` right, `k` rotate clockwise, `u` rotate
//! counterclockwise, `j` soft drop, space hard drop, `.` gravity tick,
//! `s` toggle shadow, `r` restart. Newlines are ignored.
//!
//! Usage: `tint [SEED] < script.txt`. Logs go to stderr; set `RUST_LOG=debug`
//! to see every lock.

use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tint::core::scoring::{displayed_score, score_ratio};
use tint::core::{Engine, TintScoring};
use tint::types::{Action, Evaluation};

const DEFAULT_SEED: u32 = 1;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid seed {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    let mut script = String::new();
    io::stdin()
        .read_to_string(&mut script)
        .context("failed to read script from stdin")?;

    let mut engine = Engine::new(seed, TintScoring::default());
    run(&mut engine, &script);

    let snapshot = engine.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
    println!("{json}");

    let displayed = displayed_score(engine.score());
    info!(
        seed,
        score = displayed,
        per_piece = score_ratio(displayed, engine.pieces_spawned()),
        lines = engine.stats().dropped_lines,
        level = engine.policy().level,
        game_over = engine.game_over(),
        "script finished"
    );
    Ok(())
}

fn run(engine: &mut Engine, script: &str) {
    for (pos, key) in script.chars().enumerate() {
        match key {
            '\n' | '\r' => {}
            '.' => {
                let result = engine.evaluate();
                if result == Evaluation::Locked {
                    let lines = engine.stats().dropped_lines;
                    engine.policy_mut().advance_level(lines);
                }
            }
            's' => {
                let enabled = !engine.shadow();
                engine.set_shadow(enabled);
            }
            'r' => engine.init(),
            _ => match Action::from_key(key) {
                Some(action) => {
                    engine.apply_action(action);
                }
                None => warn!(pos, key = %key.escape_debug(), "unknown script key"),
            },
        }
    }
}
