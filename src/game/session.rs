//! The game session handle
//!
//! One session holds at most one active game. The caller owns the session and
//! decides how to share it; nothing here locks.

use super::config::GameConfig;
use super::error::GameError;
use super::history::{GuessHistory, GuessRecord, Rank};
use crate::advisor::{Advice, AdviceContext, Advisor, HintStrategy, TipStrategy, advise};
use crate::core::Word;
use crate::ranking::{Ranking, compute_ranks};
use crate::vectors::{RandomVectorGenerator, VectorGenerator, VectorStore};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};
use serde::Serialize;

/// Reply to a successful new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewGameSummary {
    /// Dictionary size shown to the player
    pub total_words: usize,
    /// Words that received a rank (K)
    pub ranked_words: usize,
}

/// Reply to a successful guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub word: Word,
    pub rank: Rank,
    pub is_correct: bool,
    /// Full history after the guess, best first
    pub history: Vec<GuessRecord>,
}

/// Read-only view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub history: Vec<GuessRecord>,
    pub total_words: usize,
    pub active: bool,
}

struct ActiveGame {
    secret: Word,
    dictionary: Dictionary,
    ranking: Ranking,
    history: GuessHistory,
}

/// A single-player game session
///
/// Owns the vector store, the placeholder generator used when the store is
/// empty, and the active game (if any).
pub struct GameSession<G: VectorGenerator = RandomVectorGenerator> {
    config: GameConfig,
    store: VectorStore,
    generator: G,
    rng: StdRng,
    hint: HintStrategy,
    tip: TipStrategy,
    game: Option<ActiveGame>,
}

impl GameSession<RandomVectorGenerator> {
    /// Session with an empty store and entropy-seeded randomness
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let store = VectorStore::new(config.dimension);
        Self::with_parts(
            config,
            store,
            RandomVectorGenerator::default(),
            StdRng::from_rng(&mut rand::rng()),
        )
    }

    /// Session whose placeholder vectors and secret choices are reproducible
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        let mut seeder = StdRng::seed_from_u64(seed);
        let store = VectorStore::new(config.dimension);
        let generator = RandomVectorGenerator::seeded(seeder.next_u64());
        let rng = StdRng::seed_from_u64(seeder.next_u64());
        Self::with_parts(config, store, generator, rng)
    }
}

impl<G: VectorGenerator> GameSession<G> {
    /// Assemble a session from explicit parts
    pub fn with_parts(config: GameConfig, store: VectorStore, generator: G, rng: StdRng) -> Self {
        let hint = HintStrategy::new(config.hint_anchor_rank);
        let tip = TipStrategy::new(config.tip_fallback_rank, config.tip_improvement_fraction);

        Self {
            config,
            store,
            generator,
            rng,
            hint,
            tip,
            game: None,
        }
    }

    /// Replace the vector store (e.g. with a loaded table)
    ///
    /// Takes effect at the next [`GameSession::new_game`]. The configured
    /// dimension follows the store's.
    #[must_use]
    pub fn with_store(mut self, store: VectorStore) -> Self {
        self.config.dimension = store.dimension();
        self.store = store;
        self
    }

    /// Start a new game over `dictionary`
    ///
    /// Fills the store with placeholder vectors if it is empty, picks a secret
    /// uniformly among words that have a vector, ranks the whole dictionary
    /// and clears the history. The previous game is only replaced once all of
    /// that succeeded.
    ///
    /// # Errors
    /// - `GameError::NoVectorizableWords` if no dictionary word has a vector
    /// - `GameError::Rank` if ranking fails
    pub fn new_game(&mut self, dictionary: Dictionary) -> Result<NewGameSummary, GameError> {
        self.store
            .ensure_initialized(dictionary.words(), &mut self.generator);

        let secret = {
            let vectorizable: Vec<&Word> = dictionary
                .words()
                .iter()
                .filter(|word| self.store.contains(word))
                .collect();

            (*vectorizable
                .choose(&mut self.rng)
                .ok_or(GameError::NoVectorizableWords)?)
            .clone()
        };

        let ranking = compute_ranks(&secret, dictionary.words(), &self.store)?;

        let summary = NewGameSummary {
            total_words: dictionary.len(),
            ranked_words: ranking.len(),
        };
        log::info!(
            "New game started: {} words, {} ranked",
            summary.total_words,
            summary.ranked_words
        );

        self.game = Some(ActiveGame {
            secret,
            dictionary,
            ranking,
            history: GuessHistory::new(),
        });

        Ok(summary)
    }

    /// Score a guess and add it to the history
    ///
    /// Words with no computed rank are recorded as [`Rank::Unranked`].
    ///
    /// # Errors
    /// Checked in this order, leaving the session unchanged on failure:
    /// `NotInitialized`, `InvalidInput`, `UnknownWord`, `DuplicateGuess`.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotInitialized)?;
        let word = Word::new(guess).map_err(|_| GameError::InvalidInput)?;

        if !game.dictionary.contains(&word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }
        if game.history.contains(&word) {
            return Err(GameError::DuplicateGuess(word.text().to_string()));
        }

        let rank = Rank::from(game.ranking.rank_of(&word));
        let is_correct = word == game.secret;
        game.history.insert(word.clone(), rank);

        log::debug!("Guess '{word}' scored rank {rank}");

        Ok(GuessOutcome {
            word,
            rank,
            is_correct,
            history: game.history.records().to_vec(),
        })
    }

    /// Suggest a coarse hint
    ///
    /// # Errors
    /// `NotInitialized` without a game, `EmptyRanking` if nothing was ranked.
    pub fn hint(&self) -> Result<Advice, GameError> {
        self.advise_with(&self.hint, None)
    }

    /// Suggest a tip relative to `best_rank` (or the history's best rank)
    ///
    /// # Errors
    /// Same as [`GameSession::hint`].
    pub fn tip(&self, best_rank: Option<usize>) -> Result<Advice, GameError> {
        self.advise_with(&self.tip, best_rank)
    }

    /// Ask any advisor for a suggestion
    ///
    /// # Errors
    /// Same as [`GameSession::hint`].
    pub fn advise_with<A: Advisor + ?Sized>(
        &self,
        advisor: &A,
        best_rank: Option<usize>,
    ) -> Result<Advice, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotInitialized)?;
        if game.ranking.is_empty() {
            return Err(GameError::EmptyRanking);
        }

        let ctx = AdviceContext::new(&game.ranking, &game.history).with_best_rank(best_rank);
        Ok(advise(advisor, &ctx))
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.game.as_ref().map_or_else(
            || SessionSnapshot {
                history: Vec::new(),
                total_words: 0,
                active: false,
            },
            |game| SessionSnapshot {
                history: game.history.records().to_vec(),
                total_words: game.dictionary.len(),
                active: true,
            },
        )
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Whether the secret has been guessed in the current game
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.history.is_won())
    }

    /// The secret of the current game (for reveal-on-give-up screens)
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.game.as_ref().map(|game| &game.secret)
    }

    #[must_use]
    pub fn ranking(&self) -> Option<&Ranking> {
        self.game.as_ref().map(|game| &game.ranking)
    }

    #[must_use]
    pub fn history(&self) -> Option<&GuessHistory> {
        self.game.as_ref().map(|game| &game.history)
    }

    #[must_use]
    pub const fn store(&self) -> &VectorStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector;
    use crate::ranking::RankError;

    /// Store where each word's similarity to the first word is its given cosine
    fn fruit_session() -> GameSession {
        let mut store = VectorStore::new(2);
        for (text, cos) in [("apple", 1.0_f32), ("banana", 0.8), ("cherry", 0.5), ("date", 0.1)] {
            let sin = (1.0 - cos * cos).sqrt();
            store
                .insert(Word::new(text).unwrap(), Vector::new(vec![cos, sin]))
                .unwrap();
        }
        GameSession::seeded(GameConfig::with_dimension(2), 11).with_store(store)
    }

    fn fruit_dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "banana", "cherry", "date"])
    }

    /// Start games until "apple" is the secret
    fn fruit_game_with_apple_secret() -> GameSession {
        let mut session = fruit_session();
        loop {
            session.new_game(fruit_dictionary()).unwrap();
            if session.secret().map(Word::text) == Some("apple") {
                return session;
            }
        }
    }

    #[test]
    fn operations_before_new_game_fail() {
        let mut session = fruit_session();

        assert_eq!(
            session.submit_guess("apple"),
            Err(GameError::NotInitialized)
        );
        assert_eq!(session.hint(), Err(GameError::NotInitialized));
        assert_eq!(session.tip(None), Err(GameError::NotInitialized));
        assert!(!session.snapshot().active);
    }

    #[test]
    fn new_game_reports_sizes() {
        let mut session = fruit_session();
        let summary = session.new_game(fruit_dictionary()).unwrap();

        assert_eq!(summary.total_words, 4);
        assert_eq!(summary.ranked_words, 4);
        assert!(session.is_active());
        assert_eq!(session.ranking().unwrap().rank_of(session.secret().unwrap()), Some(1));
    }

    #[test]
    fn validation_order() {
        let mut session = fruit_game_with_apple_secret();

        assert_eq!(session.submit_guess("   "), Err(GameError::InvalidInput));
        assert_eq!(
            session.submit_guess("zebra"),
            Err(GameError::UnknownWord("zebra".to_string()))
        );
        session.submit_guess("cherry").unwrap();
        assert_eq!(
            session.submit_guess(" CHERRY "),
            Err(GameError::DuplicateGuess("cherry".to_string()))
        );
        assert_eq!(session.snapshot().history.len(), 1);
    }

    #[test]
    fn guesses_scored_and_sorted() {
        let mut session = fruit_game_with_apple_secret();

        let outcome = session.submit_guess("cherry").unwrap();
        assert_eq!(outcome.rank, Rank::At(3));
        assert!(!outcome.is_correct);

        let outcome = session.submit_guess("banana").unwrap();
        let order: Vec<&str> = outcome.history.iter().map(|r| r.word.text()).collect();
        assert_eq!(order, ["banana", "cherry"]);

        let outcome = session.submit_guess("Apple").unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.history[0].rank, Rank::At(1));
        assert!(session.is_won());
    }

    #[test]
    fn dictionary_word_without_vector_is_unranked() {
        let mut session = fruit_session();
        let dictionary = Dictionary::from_words(["apple", "banana", "ghost"]);
        let summary = session.new_game(dictionary).unwrap();

        assert_eq!(summary.total_words, 3);
        assert_eq!(summary.ranked_words, 2);

        let outcome = session.submit_guess("ghost").unwrap();
        assert_eq!(outcome.rank, Rank::Unranked);
    }

    #[test]
    fn unvectorizable_dictionary_fails() {
        let mut session = fruit_session();

        assert_eq!(
            session.new_game(Dictionary::from_words(["ghost", "phantom"])),
            Err(GameError::NoVectorizableWords)
        );
        assert_eq!(
            session.new_game(Dictionary::default()),
            Err(GameError::NoVectorizableWords)
        );
    }

    #[test]
    fn failed_new_game_keeps_previous_game() {
        let mut session = fruit_game_with_apple_secret();
        session.submit_guess("date").unwrap();

        assert!(session.new_game(Dictionary::from_words(["ghost"])).is_err());

        assert_eq!(session.secret().unwrap().text(), "apple");
        assert_eq!(session.snapshot().history.len(), 1);
    }

    #[test]
    fn new_game_resets_history() {
        let mut session = fruit_game_with_apple_secret();
        session.submit_guess("date").unwrap();

        session.new_game(fruit_dictionary()).unwrap();

        assert!(session.snapshot().history.is_empty());
    }

    #[test]
    fn empty_store_is_filled_with_placeholders() {
        let mut session = GameSession::seeded(GameConfig::with_dimension(16), 3);
        let summary = session
            .new_game(Dictionary::from_words(["one", "two", "three"]))
            .unwrap();

        assert_eq!(summary.ranked_words, 3);
        assert_eq!(session.store().len(), 3);
        assert_eq!(session.store().dimension(), 16);
    }

    #[test]
    fn with_store_adopts_store_dimension() {
        let mut session =
            GameSession::seeded(GameConfig::default(), 3).with_store(VectorStore::new(8));
        assert_eq!(session.config.dimension, 8);

        session
            .new_game(Dictionary::from_words(["one", "two", "three"]))
            .unwrap();
        assert_eq!(session.store().dimension(), 8);
    }

    #[test]
    fn hint_and_tip_do_not_touch_history() {
        let mut session = fruit_game_with_apple_secret();
        session.submit_guess("date").unwrap();

        let hint = session.hint().unwrap();
        let tip = session.tip(None).unwrap();

        assert_eq!(hint.entry().unwrap().word.text(), "banana");
        assert_eq!(tip.entry().unwrap().word.text(), "cherry");
        assert_eq!(session.snapshot().history.len(), 1);
    }

    #[test]
    fn tip_with_caller_rank() {
        let session = fruit_game_with_apple_secret();
        let tip = session.tip(Some(3)).unwrap();
        assert_eq!(tip.entry().unwrap().word.text(), "banana");
    }

    #[test]
    fn advice_after_win() {
        let mut session = fruit_game_with_apple_secret();
        session.submit_guess("apple").unwrap();

        assert_eq!(session.hint().unwrap(), Advice::AlreadyWon);
        assert_eq!(session.tip(None).unwrap(), Advice::AlreadyWon);
    }

    #[test]
    fn secret_vector_missing_surfaces_as_rank_error() {
        let err = GameError::from(RankError::SecretVectorMissing("x".to_string()));
        assert!(!err.is_input_error());
        assert!(GameError::DuplicateGuess("x".to_string()).is_input_error());
    }
}
