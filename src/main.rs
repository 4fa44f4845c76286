use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

use konyhanyelv::adapters::{FileStore, ReqwestHttpClient, SystemBrowser};
use konyhanyelv::app::{App, AppMessage, AppServices};
use konyhanyelv::cli::{parse_args, run_cli_command};
use konyhanyelv::config::AppConfig;
use konyhanyelv::input::CommandRegistry;
use konyhanyelv::logging::init_logging;
use konyhanyelv::terminal::{setup_panic_hook, TerminalManager};
use konyhanyelv::ui;

/// Frame tick for spinners, status expiry and the reminder check.
const TICK_MS: u64 = 16;

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let config = AppConfig::from_env().wrap_err("Invalid configuration")?;
    init_logging(&config.data_dir, &config.log_filter).wrap_err("Could not start logging")?;
    tracing::info!(
        base_url = %config.base_url,
        data_dir = %config.data_dir.display(),
        version = konyhanyelv::cli::VERSION,
        "Starting"
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let store = FileStore::open(&config.data_dir).wrap_err("Could not open the local store")?;
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)
        .wrap_err("Could not build the HTTP client")?;

    let runtime = tokio::runtime::Runtime::new()?;

    let services = AppServices {
        http: Arc::new(http),
        store: Arc::new(store),
        opener: Arc::new(SystemBrowser),
        base_url: config.base_url.clone(),
    };

    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new(services);
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Exited");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event error");
                    }
                    None => {
                        tracing::info!("Event stream closed");
                        app.quit();
                    }
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
