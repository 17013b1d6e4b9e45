use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_desk::desktop::Desktop;
use term_desk::drivers::ConsoleDriver;
use term_desk::runner::run_desktop;
use term_desk::session::Session;
use term_desk::tracing_sub;

#[derive(Parser, Debug)]
#[command(
    name = "term-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A floating-window desktop simulation for the terminal"
)]
struct Cli {
    /// Append diagnostics to this file. Without it nothing is logged, so
    /// the alternate screen stays clean.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Event poll interval in milliseconds.
    #[arg(long = "tick-ms", value_name = "MILLIS", default_value_t = 16)]
    tick_ms: u64,

    /// Starting wallet balance in credits.
    #[arg(long = "balance", value_name = "CREDITS", default_value_t = 500)]
    balance: u32,

    /// Pre-own a store product by name, bypassing the purchase. Repeat
    /// for multiple products.
    #[arg(long = "unlock", value_name = "PRODUCT")]
    unlock: Vec<String>,

    /// Start with mouse capture off. It can be toggled at runtime from
    /// the dock or with Alt+c.
    #[arg(long = "no-mouse-capture")]
    no_mouse_capture: bool,
}

fn main() -> io::Result<()> {
    let args = Cli::parse();
    if let Some(path) = &args.log_file {
        tracing_sub::init_to_file(path)?;
    }

    let mut session = Session::new(args.balance);
    for product in &args.unlock {
        session.grant(product);
    }
    if args.no_mouse_capture {
        session.set_mouse_capture_enabled(false);
    }
    let mut desktop = Desktop::new(session);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    let mut driver = ConsoleDriver::new();

    let result = run_desktop(
        &mut terminal,
        &mut driver,
        &mut desktop,
        Duration::from_millis(args.tick_ms),
    );

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
