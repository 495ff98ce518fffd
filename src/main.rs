use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use cli_log::*;
use clap::Parser;

// Import from our local library modules
use signalboard::{App, Cli, config, render_ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting Signalboard dashboard...");

    let cli = Cli::parse();

    let result = run_tui_app(cli).await;

    // Restore terminal state even when the app loop errored out
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

async fn run_tui_app(cli: Cli) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and load the initial signal list before the first frame
    let mut app = App::new(&cli.host, cli.interval);
    app.refresh().await?;

    // Main loop
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(config::TICK_RATE_MS);
    let countdown_rate = Duration::from_millis(config::COUNTDOWN_TICK_MS);
    let ui_update_rate = Duration::from_millis(config::UI_UPDATE_RATE_MS);
    let mut last_countdown_tick = Instant::now();
    let mut last_ui_update = Instant::now();

    loop {
        if crossterm::event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        app.countdown.reset();
                        app.refresh().await?;
                    }
                    _ => {}
                }
            }
        }

        // Advance the refresh countdown once per second
        if last_countdown_tick.elapsed() >= countdown_rate {
            last_countdown_tick = Instant::now();
            if app.tick_countdown() {
                app.refresh().await?;
            }
        }

        // Force UI update at least once per second so the clock advances
        // independently of the countdown/fetch cycle
        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;

        if app.needs_redraw || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            if force_redraw {
                last_ui_update = Instant::now();
            }
        }
    }
}
