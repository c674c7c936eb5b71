use clap::Parser;
use cribbage_rs::simulate::{SimConfig, Simulator};
use cribbage_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout, Write};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deal and score random cribbage shows", long_about = None)]
struct Args {
    /// Run without the TUI and print a summary
    #[arg(long)]
    headless: bool,
    /// Number of hands to deal in headless mode
    #[arg(long, default_value_t = SimConfig::DEFAULT_HANDS)]
    hands: u64,
    /// Seed the deck for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Print every hand with its itemised score
    #[arg(short, long)]
    verbose: bool,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_headless(args: &Args) -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = SimConfig { hands: args.hands, seed: args.seed };
    log::info!("{:<32}{}", "cribbage-rs", cribbage_rs::VERSION);
    log::info!("{:<32}{}", "hands", config.hands);
    log::info!(
        "{:<32}{}",
        "seed",
        config.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".to_string())
    );

    let mut sim = Simulator::from_config(&config);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut write_err: Option<io::Error> = None;
    let stats = sim
        .run_with(config.hands, |i, shown| {
            if !args.verbose || write_err.is_some() {
                return;
            }
            let res = writeln!(out, "Hand {}: [{}] {}", i, shown.starter, shown.hand)
                .and_then(|_| writeln!(out, "{}", shown.score));
            if let Err(err) = res {
                write_err = Some(err);
            }
        })
        .map_err(io::Error::other)?;
    if let Some(err) = write_err {
        return Err(err);
    }
    writeln!(out, "{stats}")?;
    out.flush()
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.headless || !io::stdout().is_terminal() {
        return run_headless(&args);
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(50);
    let mut app = AppState::with_seed(args.seed);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
