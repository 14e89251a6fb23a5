//! gamedex CLI
//!
//! Loads the Steam games dataset and answers id lookups read from stdin.

use clap::{Parser, Subcommand};
use gamedex_core::{
    default_candidates, interleave_pairs, run_session, write_games, Dataset, ExportFormat,
};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Steam games dataset lookup", long_about = None)]
#[command(version)]
struct Cli {
    /// Dataset locations to try in order (defaults to /tmp/games.csv, then games.csv)
    #[arg(short, long, env = "GAMEDEX_DATA", global = true)]
    data: Vec<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read ids from stdin and print matching games until FIM
    Query,

    /// Print a single game
    Show {
        /// Game id
        #[arg(long)]
        id: i64,
    },

    /// Print where the dataset was loaded from and how many games it has
    Stats,

    /// Export all normalized games to a file
    Export {
        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Interleave the characters of token pairs read from stdin
    Interleave,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let ansi = io::stderr().is_terminal();
    if let Err(e) = tracing::subscriber::set_global_default(log_subscriber(verbose, ansi, io::stderr)) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

/// Stderr subscriber; colors only when `ansi` is set
fn log_subscriber<W>(verbose: bool, ansi: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

fn run(cli: Cli) -> gamedex_core::Result<()> {
    let candidates = if cli.data.is_empty() {
        default_candidates()
    } else {
        cli.data
    };

    match cli.command.unwrap_or(Commands::Query) {
        Commands::Query => cmd_query(&candidates),
        Commands::Show { id } => cmd_show(&candidates, id),
        Commands::Stats => cmd_stats(&candidates),
        Commands::Export { format, output } => cmd_export(&candidates, &format, &output),
        Commands::Interleave => cmd_interleave(),
    }
}

fn cmd_query(candidates: &[PathBuf]) -> gamedex_core::Result<()> {
    let dataset = Dataset::load_first(candidates)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run_session(&dataset, stdin.lock(), BufWriter::new(stdout.lock()))?;

    info!(
        queries = stats.queries,
        hits = stats.hits,
        misses = stats.misses,
        "session finished"
    );
    Ok(())
}

fn cmd_show(candidates: &[PathBuf], id: i64) -> gamedex_core::Result<()> {
    let dataset = Dataset::load_first(candidates)?;

    let game = dataset
        .lookup(id)
        .ok_or(gamedex_core::Error::GameNotFound(id))?;
    println!("{}", game);

    Ok(())
}

fn cmd_stats(candidates: &[PathBuf]) -> gamedex_core::Result<()> {
    let dataset = Dataset::load_first(candidates)?;

    println!("File: {}", dataset.source_path().display());
    println!("Games: {}", dataset.len());
    if let (Some(first), Some(last)) = (dataset.games().first(), dataset.games().last()) {
        println!("Ids: {} to {}", first.id, last.id);
    }

    Ok(())
}

fn cmd_export(candidates: &[PathBuf], format: &str, output: &Path) -> gamedex_core::Result<()> {
    let Some(format) = ExportFormat::from_name(format) else {
        eprintln!("Unknown format: {}. Supported formats: csv, json", format);
        std::process::exit(1);
    };

    let dataset = Dataset::load_first(candidates)?;

    let file = File::create(output)?;
    write_games(dataset.games(), format, BufWriter::new(file))?;

    println!("Exported {} games to {}", dataset.len(), output.display());

    Ok(())
}

fn cmd_interleave() -> gamedex_core::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in interleave_pairs(&input) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
