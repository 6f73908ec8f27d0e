//! Semantic Word Rank - CLI
//!
//! Guess the secret word by meaning. TUI and CLI modes, hint/tip advisors and
//! ranking tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semantle_rank::{
    advisor::AdvisorType,
    commands::{BenchmarkConfig, export_vectors, rank_around, run_benchmark, run_simple},
    game::{GameConfig, GameSession},
    output::{logger, print_benchmark_result, print_rank_report},
    vectors::{
        DEFAULT_DIMENSION, RandomVectorGenerator, VectorStore,
        table::{DEFAULT_TABLE_PATH, load_table, load_table_if_exists},
    },
    wordlists::{
        DICTIONARY, Dictionary,
        loader::{dictionary_from_slice, load_from_file},
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "semantle",
    about = "Semantic word-rank guessing game: find the secret word by meaning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Vector table (JSON object of word -> vector). Defaults to
    /// data/word_vectors.json when present, else placeholder vectors are used
    #[arg(long, global = true)]
    vectors: Option<PathBuf>,

    /// Vector dimension (default: the table's, or 100)
    #[arg(long, global = true)]
    dimension: Option<usize>,

    /// Seed for secret selection and placeholder vectors
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Rank the dictionary around a chosen secret
    Rank {
        /// The secret word
        secret: String,

        /// Number of closest words to show
        #[arg(short, long, default_value = "20")]
        top: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark an advisor by always playing its suggestion
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Advisor: 'tip' (default) or 'hint'
        #[arg(short, long, default_value = "tip")]
        advisor: String,

        /// A game is solved once the best rank is at most this
        #[arg(long, default_value = "2")]
        target_rank: usize,
    },

    /// Write the vector table (loaded or generated) as JSON
    ExportVectors {
        /// Output path
        path: PathBuf,
    },
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str) -> Result<Dictionary> {
    match mode {
        "embedded" => Ok(dictionary_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("reading dictionary {path}")),
    }
}

/// Load the vector store from --vectors, or the default table if it exists
///
/// A table that exists but cannot be parsed is an error.
fn load_store(vectors: Option<&Path>, dimension: Option<usize>) -> Result<VectorStore> {
    let table = match vectors {
        Some(path) => Some(
            load_table(path).with_context(|| format!("loading vectors {}", path.display()))?,
        ),
        None => load_table_if_exists(DEFAULT_TABLE_PATH)
            .with_context(|| format!("loading vectors {DEFAULT_TABLE_PATH}"))?,
    };

    let Some(table) = table else {
        return Ok(VectorStore::new(dimension.unwrap_or(DEFAULT_DIMENSION)));
    };

    let dimension = dimension
        .or_else(|| table.dimension())
        .unwrap_or(DEFAULT_DIMENSION);
    Ok(VectorStore::load(table, dimension)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(logger::level_from_verbosity(cli.verbose, cli.quiet))?;

    let dictionary = load_dictionary(&cli.dictionary)?;
    let store = load_store(cli.vectors.as_deref(), cli.dimension)?;
    let config = GameConfig::with_dimension(store.dimension());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(new_session(config, store, cli.seed), dictionary),
        Commands::Simple => {
            let mut session = new_session(config, store, cli.seed);
            run_simple(&mut session, &dictionary)
        }
        Commands::Rank { secret, top, json } => {
            run_rank_command(&secret, top, json, store, &dictionary, cli.seed)
        }
        Commands::Benchmark {
            count,
            advisor,
            target_rank,
        } => {
            let session = new_session(config.clone(), store, cli.seed);
            run_benchmark_command(session, &dictionary, &advisor, &config, count, target_rank)
        }
        Commands::ExportVectors { path } => {
            run_export_command(store, &dictionary, &path, cli.seed)
        }
    }
}

fn new_session(config: GameConfig, store: VectorStore, seed: Option<u64>) -> GameSession {
    let session = match seed {
        Some(seed) => GameSession::seeded(config, seed),
        None => GameSession::new(config),
    };
    session.with_store(store)
}

fn run_rank_command(
    secret: &str,
    top: usize,
    json: bool,
    mut store: VectorStore,
    dictionary: &Dictionary,
    seed: Option<u64>,
) -> Result<()> {
    let mut generator = RandomVectorGenerator::from_seed_or_entropy(seed);
    store.ensure_initialized(dictionary.words(), &mut generator);

    let report = rank_around(secret, dictionary, &store, top)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_rank_report(&report);
    }
    Ok(())
}

fn run_benchmark_command(
    mut session: GameSession,
    dictionary: &Dictionary,
    advisor_name: &str,
    config: &GameConfig,
    count: usize,
    target_rank: usize,
) -> Result<()> {
    let advisor = AdvisorType::from_name(advisor_name, config);
    println!(
        "Running {} benchmark on {count} games (target rank {target_rank})...",
        advisor.name()
    );

    let bench_config = BenchmarkConfig {
        target_rank,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(
        &mut session,
        dictionary,
        &advisor,
        advisor.name(),
        &bench_config,
    )?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_export_command(
    mut store: VectorStore,
    dictionary: &Dictionary,
    path: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let mut generator = RandomVectorGenerator::from_seed_or_entropy(seed);
    let written = export_vectors(&mut store, dictionary.words(), &mut generator, path)?;
    println!("Wrote {written} vectors to {}", path.display());
    Ok(())
}

fn run_play_command(session: GameSession, dictionary: Dictionary) -> Result<()> {
    use semantle_rank::interactive::{App, run_tui};

    let app = App::new(session, dictionary)?;
    run_tui(app)
}
