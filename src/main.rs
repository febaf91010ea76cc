//! Terminal picture puzzle (default binary).
//!
//! Loads the pictures from the working directory, then runs a fixed-timestep
//! loop: draw the current screen, gather input until the next tick, apply it,
//! advance the countdown.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use picture_puzzle::core::{Flow, Game};
use picture_puzzle::input::{map_event, FrameEvents};
use picture_puzzle::term::{Assets, FrameBuffer, GameView, TerminalRenderer, Viewport};
use picture_puzzle::types::{CanvasMapping, InputEvent, PuzzleConfig, TICK_MS};

const LOG_FILE: &str = "picture-puzzle.log";

fn main() -> Result<()> {
    init_tracing();

    let assets = Assets::load_from(Path::new("."))
        .context("failed to load puzzle pictures from the working directory")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &assets);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}

/// Log to a file: stdout is the game screen.
fn init_tracing() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, assets: &Assets) -> Result<()> {
    let seed = clock_seed();
    let mut game = Game::new(seed, PuzzleConfig::default());
    info!(seed, "picture puzzle started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut events = FrameEvents::new();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        let frame_start = Instant::now();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        term.set_title(game.screen().title())?;
        view.render_into(&game, assets, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick, mapped onto the canvas just drawn.
        let mapping = view.mapping(&game, viewport);
        collect_input(term, &mapping, frame_start + tick_duration, &mut events);

        let dropped = events.dropped();
        if dropped > 0 {
            warn!(dropped, "input queue full, events dropped this frame");
        }

        // Apply, then tick.
        if game.frame(events.drain()) == Flow::Quit {
            return Ok(());
        }
    }
}

fn collect_input(
    term: &mut TerminalRenderer,
    mapping: &CanvasMapping,
    deadline: Instant,
    events: &mut FrameEvents,
) {
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match event::poll(timeout) {
            Ok(true) => {}
            Ok(false) => return,
            Err(err) => {
                warn!(error = %err, "input stream failed");
                events.push(InputEvent::Quit);
                return;
            }
        }

        match event::read() {
            Ok(Event::Resize(..)) => term.invalidate(),
            Ok(ev) => {
                if let Some(input) = map_event(&ev, mapping) {
                    events.push(input);
                }
            }
            Err(err) => {
                warn!(error = %err, "input stream closed");
                events.push(InputEvent::Quit);
                return;
            }
        }
    }
}
