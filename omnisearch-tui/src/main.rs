//! OMNISEARCH TUI entry point.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use omnisearch_core::Location;
use omnisearch_tui::api_client::{RestClient, SearchApi};
use omnisearch_tui::config::TuiConfig;
use omnisearch_tui::error::TuiError;
use omnisearch_tui::events::TuiEvent;
use omnisearch_tui::keys::map_key;
use omnisearch_tui::logging::init_logging;
use omnisearch_tui::pages::load_page;
use omnisearch_tui::state::{App, Effect};
use omnisearch_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;
    let client = RestClient::new(&config)?;
    tracing::info!(api_base_url = client.base_url(), "starting omnisearch");
    let api: Arc<dyn SearchApi> = Arc::new(client);

    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let start = Location::parse(&app.config.start_path);
    let effects = app.navigate(start);
    run_effects(effects, &api, &event_tx);

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        app.viewport = terminal.size()?;
        terminal.draw(|f| render_view(f, &app))?;

        let deadline = app.input.next_deadline();
        let effects = tokio::select! {
            _ = ticker.tick() => app.on_tick(Instant::now()),
            _ = sleep_until(deadline) => app.on_tick(Instant::now()),
            Some(event) = event_rx.recv() => handle_event(&mut app, event),
        };

        if effects.contains(&Effect::Quit) {
            break;
        }
        run_effects(effects, &api, &event_tx);
    }

    tracing::info!("shutting down");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let event = match evt {
                    CrosstermEvent::Key(key) => TuiEvent::Input(key),
                    CrosstermEvent::Mouse(mouse) => TuiEvent::Mouse(mouse),
                    CrosstermEvent::Resize(width, height) => TuiEvent::Resize { width, height },
                    _ => continue,
                };
                if sender.blocking_send(event).is_err() {
                    break;
                }
            }
        }
    });
}

/// Resolves at the next debounce or submit deadline, never when none is set.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

fn handle_event(app: &mut App, event: TuiEvent) -> Vec<Effect> {
    match event {
        TuiEvent::Input(key) => match map_key(key, app.focus()) {
            Some(action) => app.handle_action(action, Instant::now()),
            None => Vec::new(),
        },
        TuiEvent::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
        TuiEvent::SearchCompleted { ticket, outcome } => {
            app.apply_search(&ticket, outcome);
            Vec::new()
        }
        TuiEvent::PageLoaded { generation, outcome } => {
            app.apply_page(generation, outcome);
            Vec::new()
        }
        TuiEvent::Tick => app.on_tick(Instant::now()),
        TuiEvent::Resize { .. } => Vec::new(),
    }
}

/// Run network effects on background tasks; outcomes come back as events.
fn run_effects(effects: Vec<Effect>, api: &Arc<dyn SearchApi>, sender: &mpsc::Sender<TuiEvent>) {
    for effect in effects {
        let api = Arc::clone(api);
        let sender = sender.clone();
        match effect {
            Effect::Search(ticket) => {
                tokio::spawn(async move {
                    let outcome = api.global_search(ticket.query(), ticket.filters()).await;
                    tracing::debug!(
                        generation = ticket.generation(),
                        ok = outcome.is_ok(),
                        "global search returned"
                    );
                    let _ = sender
                        .send(TuiEvent::SearchCompleted { ticket, outcome })
                        .await;
                });
            }
            Effect::LoadPage(request) => {
                tokio::spawn(async move {
                    let outcome =
                        load_page(api.as_ref(), request.kind, &request.query, &request.filters)
                            .await;
                    let _ = sender
                        .send(TuiEvent::PageLoaded {
                            generation: request.generation,
                            outcome,
                        })
                        .await;
                });
            }
            Effect::Quit => {}
        }
    }
}
