//! Letter Boxed Solver
//!
//! Solves "Letter Boxed" word puzzles: find the fewest words that use every
//! letter on a four-sided square, chaining last letter to first letter, without
//! taking two consecutive letters from the same side. Puzzles come from the
//! command line or from saved game-data files, and the daily mode keeps one
//! solved snapshot per day on disk.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Instant, SystemTime};

use clap::{Args, Parser, Subcommand};

use lottawords::format::format_report;
use lottawords::persistence::{format_snapshot, DailyService, ResultStore};
use lottawords::source::{load_word_list, GameDataFile, PuzzleSource};
use lottawords::validate::is_playable;
use lottawords::{SearchConfig, SolveStatus, Square};

/// Finds the shortest word chain covering a Letter Boxed square.
#[derive(Parser)]
#[command(name = "lottawords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one puzzle and print the chain.
    Solve {
        /// Sides as "ABC-DEF-GHI-JKL" (top, right, bottom, left).
        #[arg(short, long, required_unless_present = "puzzle")]
        sides: Option<Square>,

        /// Word list with one word per line; overrides a game-data dictionary.
        #[arg(short, long, required_unless_present = "puzzle")]
        words: Option<PathBuf>,

        /// Saved game-data JSON document providing sides and dictionary.
        #[arg(short, long, conflicts_with = "sides")]
        puzzle: Option<PathBuf>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Solve today's puzzle unless the store already has today's result.
    Daily {
        /// Saved game-data JSON document for today's puzzle.
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Directory holding the daily snapshot.
        #[arg(long, default_value = "lottawords-store")]
        store: PathBuf,

        /// Re-solve even if today's snapshot exists.
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print the stored snapshot.
    Show {
        /// Directory holding the daily snapshot.
        #[arg(long, default_value = "lottawords-store")]
        store: PathBuf,
    },
    /// Report whether each word can be played on a square.
    Check {
        /// Sides as "ABC-DEF-GHI-JKL" (top, right, bottom, left).
        #[arg(short, long)]
        sides: Square,

        /// Words to check.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Search limits; unset flags take the preset's value.
#[derive(Args, Debug, Default)]
struct SearchArgs {
    /// Start from the smaller interactive preset.
    #[arg(long)]
    quick: bool,

    /// States to examine before giving up.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Longest chain to try.
    #[arg(long)]
    max_chain_length: Option<usize>,

    /// Candidates kept when extending a one-word chain.
    #[arg(long)]
    branch_shallow: Option<usize>,

    /// Candidates kept when extending longer chains.
    #[arg(long)]
    branch_deep: Option<usize>,

    /// Return nothing instead of a best single word when no chain is found.
    #[arg(long)]
    no_fallback: bool,
}

impl SearchArgs {
    fn to_config(&self) -> SearchConfig {
        let preset = if self.quick {
            SearchConfig::quick()
        } else {
            SearchConfig::default()
        };

        SearchConfig {
            max_iterations: self.max_iterations.unwrap_or(preset.max_iterations),
            max_chain_length: self.max_chain_length.unwrap_or(preset.max_chain_length),
            branch_limit_shallow: self.branch_shallow.unwrap_or(preset.branch_limit_shallow),
            branch_limit_deep: self.branch_deep.unwrap_or(preset.branch_limit_deep),
            partial_fallback: preset.partial_fallback && !self.no_fallback,
        }
    }
}

/// Entry point of the solver CLI.
///
/// Delegates to [`try_main`] and prints any error before exiting with code 1.
fn main() -> ExitCode {
    lottawords::log::init_logger(lottawords::log::debug_requested());

    match try_main() {
        Ok(code) => code,
        Err(e) => {
            if let Some(solve_err) = e.downcast_ref::<lottawords::SolveError>() {
                eprintln!("Error: {}", solve_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            sides,
            words,
            puzzle,
            json,
            search,
        } => run_solve(sides, words, puzzle, json, &search),
        Command::Daily {
            puzzle,
            store,
            force,
            search,
        } => run_daily(puzzle, store, force, &search),
        Command::Show { store } => run_show(store),
        Command::Check { sides, words } => {
            run_check(&sides, &words);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Solves one puzzle and prints the chain on stdout, diagnostics on stderr.
fn run_solve(
    sides: Option<Square>,
    words: Option<PathBuf>,
    puzzle: Option<PathBuf>,
    json: bool,
    search: &SearchArgs,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = search.to_config();
    config.validate()?;

    let (square, mut dictionary) = match puzzle {
        Some(path) => {
            let puzzle = GameDataFile::new(path).fetch()?;
            (puzzle.square()?, puzzle.dictionary.unwrap_or_default())
        }
        None => match sides {
            Some(square) => (square, Vec::new()),
            None => return Err("either --sides or --puzzle is required".into()),
        },
    };
    if let Some(path) = words {
        dictionary = load_word_list(path)?;
    }

    let t_solve = Instant::now();
    let report = lottawords::solve(&square, &dictionary, &config);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&square, &report));
    }

    eprintln!(
        "Checked {} dictionary entries in {:.3}s ({} iterations).",
        dictionary.len(),
        solve_secs,
        report.iterations
    );

    Ok(exit_code(&report.status))
}

/// Runs the daily service against a game-data file and prints the snapshot.
fn run_daily(
    puzzle: PathBuf,
    store: PathBuf,
    force: bool,
    search: &SearchArgs,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = search.to_config();
    config.validate()?;

    let mut service = DailyService::new(GameDataFile::new(puzzle), ResultStore::new(store), config);
    let now = SystemTime::now();

    let snapshot = if force {
        service.refresh(now)?
    } else {
        if !service.is_stale(now) {
            log::info!("Today's snapshot is already stored");
        }
        service.current(now)?
    };

    print!("{}", format_snapshot(snapshot));
    Ok(exit_code(&snapshot.report.status))
}

/// Prints the stored snapshot.
fn run_show(store: PathBuf) -> Result<ExitCode, Box<dyn Error>> {
    let store = ResultStore::new(store);
    match store.load()? {
        Some(snapshot) => {
            print!("{}", format_snapshot(&snapshot));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!(
                "No snapshot found in {}. Run 'lottawords daily' first.",
                store.dir().display()
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prints one line per word saying whether it is playable.
fn run_check(square: &Square, words: &[String]) {
    for word in words {
        let verdict = if is_playable(word, square) {
            "playable"
        } else {
            "not playable"
        };
        println!("{word}: {verdict}");
    }
}

/// Only engine failures make the process fail; empty results are answers too.
fn exit_code(status: &SolveStatus) -> ExitCode {
    match status {
        SolveStatus::Failed { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
