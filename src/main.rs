//! EventMark - Terminal viewer for static events pages
//!
//! Renders a server-generated events page export in the terminal and adds
//! the interactivity the page's own script would provide: favorites,
//! favorites-only filtering, theme switching, and copy-event-link.

// Module declarations
mod config;
mod constants;
mod favorites;
mod filter;
mod models;
mod shortcuts;
mod tui;

use anyhow::Result;
use clap::Parser;
use constants::APP_BINARY_NAME;
use std::path::PathBuf;

use config::Config;
use favorites::FavoriteStore;
use models::EventsPage;
use tui::ThemeId;

/// EventMark - Terminal viewer for static events pages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the events page export (JSON)
    #[arg(value_name = "FILE")]
    page_path: PathBuf,

    /// Theme for this run only (not persisted)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Use a specific favorites file instead of the default
    #[arg(long, value_name = "PATH")]
    favorites_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.page_path.exists() {
        eprintln!("Error: page export not found: {}", cli.page_path.display());
        eprintln!();
        eprintln!("Please provide the JSON export produced by the page generator.");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {APP_BINARY_NAME} events.json");
        std::process::exit(1);
    }

    let theme_override = match cli.theme.as_deref() {
        Some(name) => match ThemeId::parse(name) {
            Some(id) => Some(id),
            None => {
                eprintln!("Error: unknown theme: {name}");
                eprintln!();
                eprintln!("Available themes:");
                for id in ThemeId::ALL {
                    eprintln!("  {}", id.as_str());
                }
                std::process::exit(1);
            }
        },
        None => None,
    };

    let page = EventsPage::load(&cli.page_path)?;

    // A corrupt config should not keep the page from rendering.
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load config: {e}");
        Config::new()
    });

    let store = match cli.favorites_file {
        Some(path) => FavoriteStore::new(path),
        None => FavoriteStore::open_default()?,
    };

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(page, store, config, theme_override);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
