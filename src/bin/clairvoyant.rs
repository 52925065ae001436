use clairvoyant::config::GameConfig;
use clairvoyant::session::Session;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Test your ability to predict the top cards of a shuffled deck.
#[derive(Debug, Parser)]
#[command(name = "clairvoyant", version, about)]
struct Args {
    /// Seed the shuffle for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Cards to guess each round.
    #[arg(long, default_value_t = GameConfig::DEFAULT_GUESSES)]
    guesses: usize,

    /// Disable coloured feedback.
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GameConfig {
        guesses: args.guesses,
        seed: args.seed,
        color: !args.no_color && io::stdout().is_terminal(),
    };
    tracing::debug!(?config, version = clairvoyant::VERSION, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::new(config, stdin.lock(), stdout.lock()).and_then(|mut s| s.run());
    match result {
        Ok(summary) => {
            tracing::info!(rounds = summary.rounds, correct = summary.correct, "goodbye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("clairvoyant: {err}");
            ExitCode::FAILURE
        }
    }
}
