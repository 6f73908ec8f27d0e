//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::advisor::Advice;
use crate::game::{GameError, GameSession};
use crate::output::{print_advice, print_guess_outcome, print_history};
use crate::ranking::Ranking;
use crate::vectors::VectorGenerator;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line of player input
///
/// Commands start with `:` so that no dictionary word is mistaken for one.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Hint,
    Tip(Option<usize>),
    History,
    Reveal,
    Unknown(String),
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let Some(command) = input.strip_prefix(':') else {
            return Self::Guess(input.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("quit" | "q" | "exit"), None, _) => Self::Quit,
            (Some("new" | "n"), None, _) => Self::NewGame,
            (Some("hint"), None, _) => Self::Hint,
            (Some("tip"), None, _) => Self::Tip(None),
            (Some("tip"), Some(rank), None) => match rank.parse::<usize>() {
                Ok(rank) => Self::Tip(Some(rank)),
                Err(_) => Self::Unknown(input.to_string()),
            },
            (Some("history" | "h"), None, _) => Self::History,
            (Some("reveal"), None, _) => Self::Reveal,
            _ => Self::Unknown(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started.
pub fn run_simple<G: VectorGenerator>(
    session: &mut GameSession<G>,
    dictionary: &Dictionary,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Semantic Word Rank - Interactive               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word. Each guess is ranked by meaning:");
    println!("rank 1 is the secret, rank 2 the closest word to it, and so on.\n");
    println!("Commands: ':hint', ':tip [rank]', ':history', ':reveal', ':new', ':quit'\n");

    let summary = session.new_game(dictionary.clone())?;
    println!("🎯 New game! {} words in the dictionary.\n", summary.total_words);

    loop {
        let input = get_user_input("Guess")?;
        if input.is_empty() {
            continue;
        }

        match Command::parse(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                let summary = session.new_game(dictionary.clone())?;
                println!("\n🔄 New game started! {} words.\n", summary.total_words);
            }
            Command::Hint => {
                let advice = session.hint()?;
                if let Err(err) = accept_advice(session, "Hint", &advice) {
                    println!("❌ {err}\n");
                }
            }
            Command::Tip(best_rank) => {
                let advice = session.tip(best_rank)?;
                if let Err(err) = accept_advice(session, "Tip", &advice) {
                    println!("❌ {err}\n");
                }
            }
            Command::History => print_history(&session.snapshot().history),
            Command::Reveal => {
                if let Some(secret) = session.secret() {
                    println!(
                        "\nThe secret word was {}\n",
                        secret.text().bright_yellow().bold()
                    );
                }
            }
            Command::Unknown(command) => {
                println!("❓ Unknown command '{command}'\n");
            }
            Command::Guess(word) => match session.submit_guess(&word) {
                Ok(outcome) => {
                    let won = outcome.is_correct;
                    let ranked = session.ranking().map_or(0, Ranking::len);
                    print_guess_outcome(&outcome, ranked);
                    if won && !play_again()? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    } else if won {
                        let summary = session.new_game(dictionary.clone())?;
                        println!("\n🔄 New game started! {} words.\n", summary.total_words);
                    }
                }
                Err(err) if err.is_input_error() => println!("❌ {err}\n"),
                Err(err) => return Err(err.into()),
            },
        }
    }
}

/// Show advice and submit the suggested word as a guess
fn accept_advice<G: VectorGenerator>(
    session: &mut GameSession<G>,
    label: &str,
    advice: &Advice,
) -> Result<(), GameError> {
    print_advice(label, advice);

    if let Advice::Suggest(entry) = advice {
        let outcome = session.submit_guess(entry.word.text())?;
        print_history(&outcome.history);
    }
    Ok(())
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
