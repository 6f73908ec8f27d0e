//! TUI application state and logic

use crate::advisor::Advice;
use crate::game::{GameError, GameSession, GuessOutcome, GuessRecord};
use crate::vectors::{RandomVectorGenerator, VectorGenerator};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<G: VectorGenerator = RandomVectorGenerator> {
    pub session: GameSession<G>,
    pub dictionary: Dictionary,
    pub input_buffer: String,
    pub last_guess: Option<GuessOutcome>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub hints_used: usize,
    pub total_guesses: usize,
}

#[derive(Debug, Clone, Copy)]
enum AdviceKind {
    Hint,
    Tip,
}

impl<G: VectorGenerator> App<G> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no dictionary word can be ranked.
    pub fn new(session: GameSession<G>, dictionary: Dictionary) -> Result<Self, GameError> {
        let mut app = Self {
            session,
            dictionary,
            input_buffer: String::new(),
            last_guess: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.start_game()?;
        app.add_message(
            "Type a word and press Enter. Tab for a hint, Ctrl-T for a tip.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn start_game(&mut self) -> Result<(), GameError> {
        let summary = self.session.new_game(self.dictionary.clone())?;
        self.stats.total_games += 1;
        self.last_guess = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New game! {} words to search.", summary.total_words),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn new_game(&mut self) {
        self.messages.clear();
        if let Err(err) = self.start_game() {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }
        self.guess(&input);
    }

    fn guess(&mut self, word: &str) {
        match self.session.submit_guess(word) {
            Ok(outcome) => {
                self.stats.total_guesses += 1;
                if outcome.is_correct {
                    self.stats.games_won += 1;
                    self.input_mode = InputMode::WinCelebration;

                    let celebration = match outcome.history.len() {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                        2..=5 => format!("🔥 Found it in {} guesses! 🔥", outcome.history.len()),
                        n => format!("🎊 SOLVED in {n} guesses! 🎊"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("{} is rank {}", outcome.word, outcome.rank),
                        MessageStyle::Info,
                    );
                }
                self.last_guess = Some(outcome);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self) {
        self.request_advice(AdviceKind::Hint);
    }

    pub fn request_tip(&mut self) {
        self.request_advice(AdviceKind::Tip);
    }

    /// Ask an advisor and play its suggestion
    fn request_advice(&mut self, kind: AdviceKind) {
        let (label, advice) = match kind {
            AdviceKind::Hint => ("Hint", self.session.hint()),
            AdviceKind::Tip => ("Tip", self.session.tip(None)),
        };

        match advice {
            Ok(Advice::Suggest(entry)) => {
                self.stats.hints_used += 1;
                self.add_message(&format!("{label}: {}", entry.word), MessageStyle::Success);
                self.guess(entry.word.text());
            }
            Ok(Advice::AlreadyWon) => {
                self.add_message("You already found the secret word!", MessageStyle::Info);
            }
            Ok(Advice::Exhausted) => {
                self.add_message(&format!("{label}: nothing left to suggest"), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Guesses of the active game, best first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.session
            .history()
            .map(crate::game::GuessHistory::records)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn best_rank(&self) -> Option<usize> {
        self.session
            .history()
            .and_then(crate::game::GuessHistory::best_rank)
    }

    #[must_use]
    pub fn ranked_words(&self) -> usize {
        self.session.ranking().map_or(0, crate::ranking::Ranking::len)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Tab => self.request_hint(),
                KeyCode::Char('t') if ctrl => self.request_tip(),
                KeyCode::Char(c) if !ctrl => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// Logging is silenced while the alternate screen is active.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<G: VectorGenerator>(app: App<G>) -> Result<()> {
    let log_level = log::max_level();
    log::set_max_level(LevelFilter::Off);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    log::set_max_level(log_level);

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, G: VectorGenerator>(
    terminal: &mut Terminal<B>,
    mut app: App<G>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn app() -> App {
        let session = GameSession::seeded(GameConfig::with_dimension(8), 11);
        let dictionary = Dictionary::from_words(["apple", "banana", "cherry", "date", "elder"]);
        App::new(session, dictionary).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits_guess() {
        let mut app = app();
        type_word(&mut app, "banana");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].word.text(), "banana");
    }

    #[test]
    fn unknown_word_shows_error() {
        let mut app = app();
        type_word(&mut app, "zebra");

        assert!(app.history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn hint_plays_a_word() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.history().len(), 1);
        assert_eq!(app.stats.hints_used, 1);
        assert_ne!(Some(&app.history()[0].word), app.session.secret());
    }

    #[test]
    fn ctrl_h_edits_instead_of_hinting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));

        // Most terminals deliver Ctrl-H as Backspace
        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));

        assert_eq!(app.input_buffer, "a");
        assert!(app.history().is_empty());
        assert_eq!(app.stats.hints_used, 0);
    }

    #[test]
    fn guessing_secret_celebrates() {
        let mut app = app();
        let secret = app.session.secret().unwrap().text().to_string();
        type_word(&mut app, &secret);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history().is_empty());
        assert_eq!(app.stats.total_games, 2);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "a");
    }
}
