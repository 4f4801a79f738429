//! Game session: the single owner of all mutable game state.
//!
//! The browser shell holds one `GameSession` and routes every DOM event and
//! animation frame through it. Methods return outcome values describing what
//! changed; the shell turns those into DOM updates and store calls. Nothing in
//! here touches the browser, so the whole round lifecycle runs under native
//! tests.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::{Category, Puzzle};
use crate::clock::{ClockTick, RoundClock};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::leaderboard::Feedback;
use crate::picker::PuzzlePicker;
use crate::scoring::{MAX_INCORRECT_GUESSES, Score, is_correct};
use crate::screen::{Action, Screen};

const ANONYMOUS_PLAYER: &str = "Anonymous";
const UNKNOWN_CATEGORY: &str = "Unknown";

/// State of the puzzle currently on screen.
#[derive(Clone, Debug)]
pub struct Round {
    puzzle: &'static Puzzle,
    hints_used: usize,
    incorrect: u32,
    clock: RoundClock,
    solved_at: Option<f64>, // timestamp of the correct guess, if any
}

impl Round {
    fn new(puzzle: &'static Puzzle, seconds: u32, now: f64) -> Self {
        Self {
            puzzle,
            hints_used: 0,
            incorrect: 0,
            clock: RoundClock::new(seconds, now),
            solved_at: None,
        }
    }

    pub fn puzzle(&self) -> &'static Puzzle {
        self.puzzle
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect
    }

    pub fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }

    pub fn remaining_secs(&self, now: f64) -> u32 {
        self.clock.remaining_secs(now)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { awarded: u32, score: u32 },
    Wrong { deducted: u32, score: u32, incorrect: u32 },
    /// Third incorrect guess: the game has moved to the feedback screen.
    GameOver { final_score: u32, answer: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// `number` is 1-based.
    Revealed { number: usize, text: &'static str, cost: u32, score: u32 },
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Countdown(u32),
    NextRound(&'static Puzzle),
    /// The clock ran out: the game has moved to the feedback screen.
    TimeUp { answer: &'static str, final_score: u32 },
}

#[derive(Debug)]
pub struct GameSession {
    screen: Screen,
    category: Option<Category>,
    picker: PuzzlePicker,
    score: Score,
    round: Option<Round>,
    round_seconds: u32,
    advance_delay_ms: f64,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            screen: Screen::default(),
            category: None,
            picker: PuzzlePicker::new(),
            score: Score::default(),
            round: None,
            round_seconds: config.round_seconds.max(1),
            advance_delay_ms: f64::from(config.advance_delay_ms),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn score(&self) -> u32 {
        self.score.points()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn round_seconds(&self) -> u32 {
        self.round_seconds
    }

    /// Moves to the next screen and applies the state side of its entry effects.
    fn enter(&mut self, action: Action) -> Result<Screen, GameError> {
        let next = self.screen.transition(action)?;
        debug!(from = ?self.screen, to = ?next, ?action, "switching screen");
        let effects = next.entry_effects();
        if effects.stop_timer {
            self.round = None;
        }
        if effects.reset_score {
            self.score.reset();
        }
        self.screen = next;
        Ok(next)
    }

    pub fn choose_category(&mut self, key: &str) -> Result<Category, GameError> {
        let category = Category::from_key(key)?;
        self.enter(Action::ChooseCategory)?;
        self.category = Some(category);
        info!(%category, "category selected");
        Ok(category)
    }

    /// Lobby → Game: resets the score and serves the first puzzle.
    pub fn start_game<R: Rng>(&mut self, rng: &mut R, now: f64) -> Result<&'static Puzzle, GameError> {
        if self.category.is_none() {
            return Err(GameError::NoCategory);
        }
        self.enter(Action::StartGame)?;
        info!("game started");
        self.start_round(rng, now)
    }

    /// Serves a fresh puzzle, clearing hints, incorrect guesses and the clock.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R, now: f64) -> Result<&'static Puzzle, GameError> {
        if self.screen != Screen::Game {
            return Err(GameError::NoActiveRound);
        }
        let category = self.category.ok_or(GameError::NoCategory)?;
        let puzzle = self.picker.next(category, rng)?;
        self.round = Some(Round::new(puzzle, self.round_seconds, now));
        Ok(puzzle)
    }

    fn active_round(&mut self) -> Result<&mut Round, GameError> {
        match self.round.as_mut() {
            Some(round) if self.screen == Screen::Game => Ok(round),
            _ => Err(GameError::NoActiveRound),
        }
    }

    pub fn submit_guess(&mut self, guess: &str, now: f64) -> Result<GuessOutcome, GameError> {
        let round = self.active_round()?;
        if round.is_solved() {
            return Err(GameError::RoundSolved);
        }
        let puzzle = round.puzzle;
        debug!(guess, answer = puzzle.title, "guess submitted");

        if is_correct(guess, puzzle.title) {
            round.solved_at = Some(now);
            let awarded = self.score.award_correct();
            info!(title = puzzle.title, score = self.score(), "correct guess");
            return Ok(GuessOutcome::Correct { awarded, score: self.score() });
        }

        round.incorrect += 1;
        let incorrect = round.incorrect;
        let deducted = self.score.penalize_wrong();
        if incorrect >= MAX_INCORRECT_GUESSES {
            let final_score = self.end_game(Action::GameOver)?;
            info!(final_score, "game over after {MAX_INCORRECT_GUESSES} incorrect guesses");
            return Ok(GuessOutcome::GameOver { final_score, answer: puzzle.title });
        }
        Ok(GuessOutcome::Wrong { deducted, score: self.score(), incorrect })
    }

    pub fn request_hint(&mut self) -> Result<HintOutcome, GameError> {
        let round = self.active_round()?;
        if round.is_solved() {
            return Err(GameError::RoundSolved);
        }
        let index = round.hints_used;
        let Some(&text) = round.puzzle.hints.get(index) else {
            return Ok(HintOutcome::Exhausted);
        };
        round.hints_used += 1;
        let cost = self.score.penalize_hint(index);
        debug!(number = index + 1, cost, "hint revealed");
        Ok(HintOutcome::Revealed { number: index + 1, text, cost, score: self.score() })
    }

    /// Advances time-driven state. Called once per animation frame.
    pub fn tick<R: Rng>(&mut self, now: f64, rng: &mut R) -> Result<Option<TickEvent>, GameError> {
        if self.screen != Screen::Game {
            return Ok(None);
        }
        let Some(round) = self.round.as_mut() else {
            return Ok(None);
        };

        if let Some(solved_at) = round.solved_at {
            if now - solved_at < self.advance_delay_ms {
                return Ok(None);
            }
            let puzzle = self.start_round(rng, now)?;
            return Ok(Some(TickEvent::NextRound(puzzle)));
        }

        match round.clock.poll(now) {
            ClockTick::Unchanged => Ok(None),
            ClockTick::Remaining(secs) => Ok(Some(TickEvent::Countdown(secs))),
            ClockTick::Expired => {
                let answer = round.puzzle.title;
                warn!(answer, "time's up");
                let final_score = self.end_game(Action::TimeUp)?;
                Ok(Some(TickEvent::TimeUp { answer, final_score }))
            }
        }
    }

    /// Player quit mid-game. Returns the final score.
    pub fn exit_game(&mut self) -> Result<u32, GameError> {
        self.end_game(Action::ExitGame)
    }

    fn end_game(&mut self, action: Action) -> Result<u32, GameError> {
        self.enter(action)?;
        Ok(self.score())
    }

    pub fn return_to_menu(&mut self) -> Result<Screen, GameError> {
        self.enter(Action::ReturnToMenu)
    }

    pub fn open_leaderboard(&mut self) -> Result<Screen, GameError> {
        self.enter(Action::OpenLeaderboard)
    }

    /// Validates and builds a feedback record; the screen stays put until
    /// [`feedback_sent`](Self::feedback_sent) confirms the store accepted it.
    pub fn submit_feedback(&self, player: Option<&str>, message: &str) -> Result<Feedback, GameError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GameError::EmptyFeedback);
        }
        let name = player.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(ANONYMOUS_PLAYER);
        Ok(Feedback {
            name: name.to_string(),
            category: self.category.map_or(UNKNOWN_CATEGORY, Category::key).to_string(),
            score: self.score(),
            message: message.to_string(),
        })
    }

    pub fn feedback_sent(&mut self) -> Result<Screen, GameError> {
        self.enter(Action::SubmitFeedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn in_game(seed: u64) -> (GameSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = GameSession::new(&GameConfig::default());
        session.choose_category("movies").unwrap();
        session.start_game(&mut rng, 0.0).unwrap();
        (session, rng)
    }

    fn answer(session: &GameSession) -> &'static str {
        session.round().unwrap().puzzle().title
    }

    #[test]
    fn cannot_start_without_category() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = GameSession::new(&GameConfig::default());
        assert!(matches!(session.start_game(&mut rng, 0.0), Err(GameError::NoCategory)));
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn unknown_category_leaves_menu_untouched() {
        let mut session = GameSession::new(&GameConfig::default());
        assert!(session.choose_category("opera").is_err());
        assert_eq!(session.screen(), Screen::Menu);
        assert_eq!(session.category(), None);
    }

    #[test]
    fn correct_guess_waits_then_serves_next_round() {
        let (mut s, mut rng) = in_game(11);
        let first = answer(&s);
        let out = s.submit_guess(&first.to_uppercase(), 1_000.0).unwrap();
        assert_eq!(out, GuessOutcome::Correct { awarded: 10, score: 10 });
        assert!(matches!(s.submit_guess(first, 1_100.0), Err(GameError::RoundSolved)));

        assert_eq!(s.tick(2_000.0, &mut rng).unwrap(), None);
        match s.tick(2_500.0, &mut rng).unwrap() {
            Some(TickEvent::NextRound(p)) => assert_ne!(p.title, first),
            other => panic!("expected next round, got {other:?}"),
        }
        let round = s.round().unwrap();
        assert_eq!(round.hints_used(), 0);
        assert_eq!(round.incorrect_guesses(), 0);
        assert_eq!(round.remaining_secs(2_500.0), 30);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn three_wrong_guesses_end_the_game() {
        let (mut s, _) = in_game(6);
        let title = answer(&s);
        assert!(matches!(s.submit_guess("nope", 0.0).unwrap(), GuessOutcome::Wrong { incorrect: 1, .. }));
        assert!(matches!(s.submit_guess("still no", 0.0).unwrap(), GuessOutcome::Wrong { incorrect: 2, .. }));
        assert_eq!(
            s.submit_guess("give up", 0.0).unwrap(),
            GuessOutcome::GameOver { final_score: 0, answer: title }
        );
        assert_eq!(s.screen(), Screen::Feedback);
        assert!(s.round().is_none());
        assert!(matches!(s.submit_guess(title, 0.0), Err(GameError::NoActiveRound)));
    }

    #[test]
    fn hints_charge_one_three_five_then_run_out() {
        let (mut s, mut rng) = in_game(9);
        // Bank 30 points across three solved rounds.
        let mut now = 0.0;
        for _ in 0..3 {
            s.submit_guess(answer(&s), now).unwrap();
            now += 1_500.0;
            s.tick(now, &mut rng).unwrap();
        }
        assert_eq!(s.score(), 30);

        let costs: Vec<u32> = (0..3)
            .map(|_| match s.request_hint().unwrap() {
                HintOutcome::Revealed { cost, .. } => cost,
                HintOutcome::Exhausted => panic!("ran out early"),
            })
            .collect();
        assert_eq!(costs, [1, 3, 5]);
        assert_eq!(s.score(), 21);
        assert_eq!(s.request_hint().unwrap(), HintOutcome::Exhausted);
        assert_eq!(s.score(), 21);
    }

    #[test]
    fn no_hints_once_round_is_solved() {
        let (mut s, _) = in_game(12);
        s.submit_guess(answer(&s), 0.0).unwrap();
        assert!(matches!(s.request_hint(), Err(GameError::RoundSolved)));
        assert_eq!(s.score(), 10);
        assert_eq!(s.round().unwrap().hints_used(), 0);
    }

    #[test]
    fn hints_never_push_score_negative() {
        let (mut s, _) = in_game(3);
        for _ in 0..3 {
            s.request_hint().unwrap();
        }
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn clock_counts_down_and_expires_into_feedback() {
        let (mut s, mut rng) = in_game(21);
        let title = answer(&s);
        assert_eq!(s.tick(500.0, &mut rng).unwrap(), None);
        assert_eq!(s.tick(1_000.0, &mut rng).unwrap(), Some(TickEvent::Countdown(29)));
        assert_eq!(
            s.tick(30_000.0, &mut rng).unwrap(),
            Some(TickEvent::TimeUp { answer: title, final_score: 0 })
        );
        assert_eq!(s.screen(), Screen::Feedback);
        assert_eq!(s.tick(31_000.0, &mut rng).unwrap(), None);
    }

    #[test]
    fn new_game_resets_score() {
        let (mut s, mut rng) = in_game(2);
        s.submit_guess(answer(&s), 0.0).unwrap();
        assert_eq!(s.exit_game().unwrap(), 10);
        s.return_to_menu().unwrap();
        s.choose_category("songs").unwrap();
        s.start_game(&mut rng, 0.0).unwrap();
        assert_eq!(s.score(), 0);
        assert_eq!(s.category(), Some(Category::Songs));
    }

    #[test]
    fn feedback_defaults_and_validation() {
        let (mut s, _) = in_game(4);
        s.exit_game().unwrap();
        assert!(matches!(s.submit_feedback(Some("Maia"), "   "), Err(GameError::EmptyFeedback)));
        let fb = s.submit_feedback(None, " fun! ").unwrap();
        assert_eq!(fb.name, "Anonymous");
        assert_eq!(fb.category, "movies");
        assert_eq!(fb.message, "fun!");
        assert_eq!(s.feedback_sent().unwrap(), Screen::Menu);

        let fresh = GameSession::new(&GameConfig::default());
        assert_eq!(fresh.submit_feedback(Some("Rowan"), "hi").unwrap().category, "Unknown");
    }

    #[test]
    fn leaderboard_is_menu_only() {
        let (mut s, _) = in_game(8);
        assert!(matches!(s.open_leaderboard(), Err(GameError::LeaderboardOnlyFromMenu)));
        assert_eq!(s.screen(), Screen::Game);
        s.exit_game().unwrap();
        s.return_to_menu().unwrap();
        assert_eq!(s.open_leaderboard().unwrap(), Screen::Leaderboard);
    }
}
