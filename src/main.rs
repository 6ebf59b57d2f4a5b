//! Fruitris terminal runner (default binary).
//!
//! Reads configuration from the environment, then drives the game at a fixed
//! tick with crossterm input and the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use fruitris::core::{GameSnapshot, GameState};
use fruitris::input::{should_quit, InputHandler};
use fruitris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fruitris::types::{GameAction, TICK_MS};
use fruitris::{AppConfig, EventLog};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut log = EventLog::open(config.log_path.as_deref())?;

    println!(
        "[Fruitris] seed={} drop={}ms clear={}",
        config.game.seed,
        config.game.drop_interval_ms,
        config.game.clear_policy.as_str()
    );
    if let Some(path) = &config.log_path {
        println!("[Fruitris] Logging lock events to {}", path);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = log.finish() {
        eprintln!("[Fruitris] {:#}", e);
    }
    if let Ok(episodes) = &result {
        println!("[Fruitris] Quit after {} episode(s)", episodes);
    }
    result.map(|_| ())
}

/// Game loop; returns the number of episodes played
fn run(term: &mut TerminalRenderer, config: &AppConfig, log: &mut EventLog) -> Result<u32> {
    let mut game = GameState::with_config(config.game);
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(game.episode_id() + 1);
                    }
                    let now_ms = started.elapsed().as_millis() as u64;
                    if let Some(action) = input.handle(key, now_ms) {
                        let applied = game.apply_action(action);
                        if applied && action == GameAction::Reset {
                            log.record_reset(game.episode_id(), game.config().seed);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        if let Some(event) = game.take_last_event() {
            log.record_lock(game.episode_id(), &event);
        }
    }
}
