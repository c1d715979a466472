//! Interactive blackjack against the House.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug};
use twentyone::{DEFAULT_RECORD_PATH, Session, TableOptions, Transcript};

/// Play blackjack against the House and up to five computer players.
#[derive(Debug, Parser)]
#[command(name = "twentyone", version, about)]
struct Args {
    /// File the session is appended to.
    #[arg(long, default_value = DEFAULT_RECORD_PATH)]
    transcript: PathBuf,

    /// Do not keep a record file.
    #[arg(long)]
    no_transcript: bool,

    /// Seed for shuffles and bot names. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Diagnostic log level, written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed, transcript = %args.transcript.display(), "starting session");

    let console = if args.no_transcript {
        Transcript::stdio_only()
    } else {
        Transcript::stdio(&args.transcript)
    };

    let mut session = Session::new(console, TableOptions::default(), seed);
    session.run()?;
    Ok(())
}
