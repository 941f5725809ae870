use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use marktui::{config::Config, handlers, ui, utils, App};

/// Ocean Market bookmarks in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (marktui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Connect as this account on startup
    #[arg(short, long)]
    account: Option<String>,
}

/// Log to a file so output never mixes with the TUI
///
/// `RUST_LOG` overrides the level picked from `--debug`.
fn init_logging(debug: bool) -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let default_level = if debug { "marktui=debug" } else { "marktui=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/marktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("marktui").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("marktui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/marktui/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let config_path = get_config_path(args.config)?;
    info!(path = %config_path.display(), "loading config");
    let config = Config::load(&config_path)?;

    let mut app = App::from_config(config, args.account)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    debug!("exiting");
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            break;
        }

        // Short poll keeps fetch results and toast expiry flowing without input
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
