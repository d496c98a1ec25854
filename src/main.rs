//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses until the next 16 ms frame, feeds them to
//! the session, then advances the session by the real elapsed time. The scene
//! is redrawn through the diffing framebuffer renderer whenever it changed.
//!
//! Environment:
//! - `TETRIS_SPRINT_SEED`: piece sequence seed (default: clock)
//! - `TETRIS_SPRINT_LOG`: log file; `RUST_LOG` filters it (default `info`)

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tetris_sprint::engine::{GameSession, SessionConfig};
use tetris_sprint::input::{handle_key_event, should_quit};
use tetris_sprint::term::{FrameBuffer, GameView, Scene, TerminalRenderer, Viewport};
use tetris_sprint::types::TICK_MS;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file: anything on stderr would tear the alternate screen.
fn init_logging(config: &SessionConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig) -> Result<()> {
    let view = GameView::default();
    let mut session = GameSession::new(config, Scene::new());
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session.view(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = tick.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        session.teardown();
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.handle(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= tick {
            // Whole milliseconds only; the sub-millisecond rest stays in `last_frame`.
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            last_frame += Duration::from_millis(elapsed_ms as u64);
            dirty |= session.advance(elapsed_ms);
        }
    }
}
