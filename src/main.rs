use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zcalc::config::Config;
use zcalc::ui::Session;

/// A pocket calculator for the terminal.
///
/// Keys are digits, `.` and the button symbols (+ - x ÷ = √ cos π e C).
/// With KEYS, presses them and prints the display. Without, reads lines of
/// keys from stdin.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Args {
    /// Keys to press, e.g. `3 + 4 =`
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Copy the result to the clipboard (with KEYS)
    #[arg(long)]
    copy: bool,

    /// Do not group thousands in the result
    #[arg(long)]
    no_group: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if args.no_group {
        config.display.group_thousands = false;
    }

    let mut session = Session::new(config);

    if args.keys.is_empty() {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        session.run(stdin.lock(), std::io::stdout().lock(), interactive)?;
        return Ok(());
    }

    session
        .feed(&args.keys.join(" "))
        .context("Failed to evaluate keys")?;
    println!("{}", session.render());

    if args.copy {
        session.copy().context("Failed to copy result")?;
    }

    Ok(())
}
