//! Terminal Concentration runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `concentration-term`. The loop is event driven: it blocks on
//! the next input event and redraws after each one.

use std::path::Path;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use concentration::engine::{log_path_from_env, GameConfig, Session};
use concentration::input::{handle_key_event, is_primary_click, should_quit, CardCursor};
use concentration::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use concentration::types::GameAction;

fn main() -> Result<()> {
    let _log_guard = init_logging(log_path_from_env().as_deref())?;

    let config = GameConfig::from_env();
    let mut session = Session::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file-backed subscriber when a log path is configured.
///
/// Nothing is installed otherwise, so log output never lands on the game screen.
fn init_logging(path: Option<&str>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "concentration=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &GameConfig) -> Result<()> {
    let view = BoardView::new(config.columns);
    let mut cursor = CardCursor::new(session.game().cards().len(), config.columns);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = session.snapshot();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.index()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    tracing::info!(
                        flips = session.game().flips_count(),
                        score = session.game().score(),
                        "quit"
                    );
                    return Ok(());
                }

                match handle_key_event(key) {
                    Some(GameAction::Flip) => {
                        session.tap_card(cursor.index());
                    }
                    Some(GameAction::NewGame) => session.new_game(),
                    Some(action) if action.is_movement() => {
                        cursor.apply(action);
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                let Some((x, y)) = is_primary_click(mouse) else {
                    continue;
                };
                let card_count = session.game().cards().len();
                if let Some(index) = view.hit_test(card_count, viewport, x, y) {
                    cursor.select(index);
                    session.tap_card(index);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
