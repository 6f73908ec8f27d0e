//! Display functions for command results

use super::formatters::{Temperature, closeness_bar};
use crate::advisor::Advice;
use crate::commands::{BenchmarkResult, RankReport};
use crate::game::{GuessOutcome, GuessRecord, Rank};
use colored::{ColoredString, Colorize};

fn colored_rank(rank: Rank) -> ColoredString {
    let text = rank.to_string();
    match Temperature::from_rank(rank) {
        Temperature::Found => text.bright_green().bold(),
        Temperature::Burning => text.bright_red().bold(),
        Temperature::Hot => text.red(),
        Temperature::Warm => text.yellow(),
        Temperature::Cold => text.blue(),
        Temperature::Frozen => text.bright_black(),
    }
}

/// Print the result of a single guess
pub fn print_guess_outcome(outcome: &GuessOutcome, ranked_words: usize) {
    let temperature = Temperature::from_rank(outcome.rank);
    println!(
        "\n{} {} rank {} [{}]",
        temperature.emoji(),
        outcome.word.text().bright_white().bold(),
        colored_rank(outcome.rank),
        closeness_bar(outcome.rank, ranked_words, 20).green()
    );

    if outcome.is_correct {
        println!(
            "{}",
            format!("✅ Found it in {} guesses!", outcome.history.len())
                .green()
                .bold()
        );
    }
    println!();
}

/// Print the guess history, best first
pub fn print_history(history: &[GuessRecord]) {
    if history.is_empty() {
        println!("No guesses yet.\n");
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(" {:>6}  {}", "Rank".bright_cyan().bold(), "Word".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    for record in history {
        println!(" {:>6}  {}", colored_rank(record.rank), record.word);
    }
    println!();
}

/// Print hint or tip advice
pub fn print_advice(label: &str, advice: &Advice) {
    match advice {
        Advice::Suggest(entry) => println!(
            "💡 {label}: try {} (rank {})",
            entry.word.text().bright_yellow().bold(),
            entry.rank
        ),
        Advice::AlreadyWon => println!("🏆 {label}: you already found the secret word"),
        Advice::Exhausted => println!("{}", format!("🤷 {label}: nothing left to suggest").dimmed()),
    }
}

/// Print a ranking report
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RANKING AROUND:".bright_cyan().bold(),
        report.secret.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} of {} dictionary words have vectors\n",
        report.ranked_words, report.total_words
    );

    for line in &report.top {
        println!(
            " {:>6}  {:<20} {:+.4}",
            colored_rank(Rank::At(line.entry.rank)),
            line.entry.word.text(),
            line.similarity
        );
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.advisor.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Games solved:     {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
