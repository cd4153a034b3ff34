use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

use trackdeck::app::App;
use trackdeck::cli::{parse_args, run_cli_command};
use trackdeck::config::ConfigStore;
use trackdeck::terminal::{setup_panic_hook, TerminalManager};
use trackdeck::{logging, ui};

/// Redraw/animation tick.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logging is best effort; the console still runs without a log file.
    if let Err(err) = logging::init() {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let store = ConfigStore::new()?;
    let config = store.load()?.with_env_overrides();

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command, config.clone()) {
        return result;
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config, Some(store));

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    if let Err(ref err) = result {
        tracing::error!(%err, "console exited with error");
    }
    tracing::info!("trackdeck stopped");
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();

    app.boot();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(%err, "terminal event error");
                    }
                    None => break,
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
