use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use cloudpath_core::Catalog;
use cloudpath_tui::{input, logging, ui, AppState, TuiConfig};

#[derive(Parser)]
#[command(
    name = "cloudpath-tui",
    about = "Cloudpath — interactive local-to-cloud backend walkthrough"
)]
struct Args {
    /// Path to a TOML settings file. Defaults to <config dir>/cloudpath/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the Backends panel on this tab (supabase, firebase, auth0, custom).
    #[arg(long)]
    backend: Option<String>,

    /// Start without the welcome card.
    #[arg(long, default_value_t = false)]
    no_welcome: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TuiConfig::load(args.config.as_deref())?;
    let _log_guard = logging::init(&config)?;

    // Fail before touching the terminal if the built-in tables are broken.
    Catalog::global().validate()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(config.show_welcome && !args.no_welcome);
    if let Some(id) = &args.backend {
        if !app.select_backend(id) {
            bail!("unknown backend: {id}");
        }
    }
    info!(
        use_cases = Catalog::global().use_cases().len(),
        steps = Catalog::global().total_steps(),
        "session started"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, config.tick());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session ended");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
