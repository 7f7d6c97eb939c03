use clap::Parser;

use slog::info;
use slog::o;
use slog::Drain;
use slog_async::Async;
use slog_term::CompactFormat;
use slog_term::TermDecorator;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::result::Result;

use strdict::loader;
use strdict::Shell;
use strdict::StringTable;
use strdict::WordGenerator;

const DEFAULT_FILE: &str = "dictionary.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dictionary to load, one `WORD; definition` per line.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FILE)]
    file: PathBuf,

    /// Start with an empty dictionary if the file does not exist.
    #[arg(long)]
    allow_missing: bool,

    /// Seed for the `random` command.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let decorator = TermDecorator::new().stderr().build();
    let drain = CompactFormat::new(decorator).build().fuse();
    let drain = Async::new(drain).build().fuse();

    let log = slog::Logger::root(drain, o!());

    info!(log, "starting up"; "version" => env!("CARGO_PKG_VERSION"));
    info!(
        log,
        "using configuration";
        "file" => cli.file.to_str(), "allow-missing" => cli.allow_missing, "seed" => cli.seed
    );

    let mut table = StringTable::with_logger(log.new(o!("component" => "table")));
    if cli.allow_missing && !cli.file.exists() {
        info!(log, "dictionary file missing, starting empty"; "file" => cli.file.to_str());
    } else {
        let loaded = loader::load_from_file(&mut table, &cli.file)?;
        let stats = table.occupancy_stats();
        info!(
            log,
            "loaded dictionary";
            "records" => loaded,
            "capacity" => stats.capacity,
            "non_empty_buckets" => stats.non_empty_buckets,
            "load_factor" => stats.load_factor
        );
    }

    let words = match cli.seed {
        Some(seed) => WordGenerator::from_seed(seed),
        None => WordGenerator::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        table,
        words,
        stdin.lock(),
        stdout.lock(),
        log.new(o!("component" => "shell")),
    );
    shell.run()?;

    info!(log, "shutting down"; "entries" => shell.table().len());
    Ok(())
}
