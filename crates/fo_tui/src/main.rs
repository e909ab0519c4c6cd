//! Front-office terminal dashboard.
//!
//! Runs the interactive panel browser by default; `export` prints a panel's
//! snapshot as JSON instead of rendering.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fo_core::{DashboardSnapshot, PanelId};

mod app;
mod theme;
mod ui;

use app::App;

#[derive(Parser)]
#[command(name = "fo-tui")]
#[command(about = "Front-office terminal dashboard", long_about = None)]
struct Cli {
    /// Seed for the randomized panels; same seed, same dashboard
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a panel snapshot as JSON instead of rendering
    Export {
        /// Panel slug (e.g. "defense", "luxury-tax"); omit for the full dashboard
        #[arg(long)]
        panel: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let seed = cli.seed.unwrap_or_else(entropy_seed);
    log::info!("seed={}", seed);

    match cli.command {
        Some(Commands::Export { panel }) => run_export(seed, panel.as_deref()),
        None => run_tui(seed),
    }
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run_export(seed: u64, panel: Option<&str>) -> Result<()> {
    let snapshot = DashboardSnapshot::build(seed);
    let json = match panel {
        Some(name) => {
            let id = PanelId::parse(name)?;
            serde_json::to_string_pretty(&snapshot.panel_json(id)?)?
        }
        None => serde_json::to_string_pretty(&snapshot)?,
    };
    println!("{}", json);
    Ok(())
}

fn run_tui(seed: u64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal even if rendering panics.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = App::new(seed);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }
    }
    Ok(())
}
