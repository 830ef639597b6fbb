//! Changelings Solver - CLI
//!
//! Finds the shortest word ladder between two words, one letter change at a time.

use std::io::Write;

use anyhow::Result;
use changelings::{
    commands::{BenchmarkConfig, SolveConfig, list_neighbors, run_benchmark, run_simple, solve_pair},
    core::Alphabet,
    index::Language,
    output::{print_benchmark_result, print_neighbor_report, print_solve_result},
    solver::{FarthestFirstTieBreak, HammingTieBreak, NoTieBreak, TieBreakType},
    wordlists::WordlistSource,
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "changelings",
    about = "Word-ladder solver: shortest chains of single-letter changes between dictionary words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default, common 3- and 4-letter words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Legal letters; words with any other letter are ignored
    #[arg(short, long, global = true, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,

    /// Tie-break between equally long paths
    #[arg(short, long, global = true, value_enum, default_value_t = TieBreakArg::Hamming)]
    tie_break: TieBreakArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

/// Command-line names for the tie-break strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    /// Fewest differing letters from the target first
    Hamming,
    /// Plain lexicographic order
    #[value(name = "none", alias = "lexicographic")]
    Lexicographic,
    /// Most differing letters from the target first
    Farthest,
}

impl From<TieBreakArg> for TieBreakType {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Hamming => Self::Hamming(HammingTieBreak),
            TieBreakArg::Lexicographic => Self::Lexicographic(NoTieBreak),
            TieBreakArg::Farthest => Self::FarthestFirst(FarthestFirstTieBreak),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Find the shortest ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to end at
        target: String,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the neighbors of a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Benchmark the solver on random pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to sample (default: most common length)
        #[arg(short, long)]
        length: Option<usize>,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let language =
        WordlistSource::from_arg(&cli.wordlist).load(Alphabet::new(&cli.alphabet))?;
    let tie_break = TieBreakType::from(cli.tie_break);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&language, tie_break)?,
        Commands::Solve {
            start,
            target,
            stats,
        } => run_solve_command(&language, tie_break, start, target, stats)?,
        Commands::Neighbors { word } => {
            print_neighbor_report(&list_neighbors(&word, &language));
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(&language, tie_break, count, length, seed)?,
    }

    Ok(())
}

fn run_solve_command(
    language: &Language,
    tie_break: TieBreakType,
    start: String,
    target: String,
    stats: bool,
) -> Result<()> {
    let config = SolveConfig::new(start, target).with_tie_break(tie_break);
    let result = solve_pair(&config, language)?;

    print_solve_result(&result, stats);
    Ok(())
}

fn run_benchmark_command(
    language: &Language,
    tie_break: TieBreakType,
    count: usize,
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running benchmark on {count} random pairs...");

    let config = BenchmarkConfig {
        count,
        length,
        seed,
        tie_break,
        show_progress: true,
    };
    let result = run_benchmark(language, &config)?;

    print_benchmark_result(&result);
    Ok(())
}
