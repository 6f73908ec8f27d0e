//! Advisor benchmark command
//!
//! Plays games where every guess is the advisor's suggestion and measures how
//! many guesses it takes to get within a target rank of the secret.

use crate::advisor::{Advice, Advisor};
use crate::game::{GameError, GameSession};
use crate::vectors::VectorGenerator;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    /// A game counts as solved once the best rank is at most this
    pub target_rank: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            target_rank: 2,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub advisor: String,
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of one advisor-driven game
struct GameRun {
    guesses: usize,
    solved: bool,
}

/// Run the benchmark on fresh games over `dictionary`
///
/// # Errors
///
/// Returns an error if a new game cannot be started or a suggested word is
/// rejected by the session.
pub fn run_benchmark<G: VectorGenerator, A: Advisor>(
    session: &mut GameSession<G>,
    dictionary: &Dictionary,
    advisor: &A,
    advisor_name: &str,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for _ in 0..config.games {
        let run = play_one(session, dictionary.clone(), advisor, config.target_rank)?;

        if run.solved {
            solved += 1;
            total_guesses += run.guesses;
            min_guesses = min_guesses.min(run.guesses);
            max_guesses = max_guesses.max(run.guesses);
            *distribution.entry(run.guesses).or_insert(0) += 1;
        }

        pb.set_message(format!("{solved} solved"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        advisor: advisor_name.to_string(),
        total_games: config.games,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn play_one<G: VectorGenerator, A: Advisor>(
    session: &mut GameSession<G>,
    dictionary: Dictionary,
    advisor: &A,
    target_rank: usize,
) -> Result<GameRun, GameError> {
    let summary = session.new_game(dictionary)?;
    let mut guesses = 0;

    // Every ranked word can be suggested at most once
    while guesses < summary.ranked_words {
        let reached = session
            .history()
            .and_then(crate::game::GuessHistory::best_rank)
            .is_some_and(|best| best <= target_rank);
        if reached {
            return Ok(GameRun {
                guesses,
                solved: true,
            });
        }

        match session.advise_with(advisor, None)? {
            Advice::Suggest(entry) => {
                session.submit_guess(entry.word.text())?;
                guesses += 1;
            }
            Advice::AlreadyWon => {
                return Ok(GameRun {
                    guesses,
                    solved: true,
                });
            }
            Advice::Exhausted => break,
        }
    }

    let solved = session
        .history()
        .and_then(crate::game::GuessHistory::best_rank)
        .is_some_and(|best| best <= target_rank);
    Ok(GameRun { guesses, solved })
}
