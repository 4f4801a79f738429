// Integration tests (native) for the `emoji-guess` crate.
// These tests avoid wasm-specific functionality and drive the game through
// its public session API so they can run under `cargo test` on the host.

use std::collections::HashSet;

use futures::executor::block_on;
use rand::SeedableRng;
use rand::rngs::StdRng;

use emoji_guess::leaderboard::{MemoryStore, ScoreStore, SubmitOutcome, banner_text, submit_score};
use emoji_guess::{Category, GameConfig, GameError, GameSession, GuessOutcome, HintOutcome, Screen, TickEvent};

fn start(category: Category, seed: u64) -> (GameSession, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(&GameConfig::default());
    session.choose_category(category.key()).unwrap();
    session.start_game(&mut rng, 0.0).unwrap();
    (session, rng)
}

fn current_title(session: &GameSession) -> &'static str {
    session.round().expect("round in progress").puzzle().title
}

// Solving every puzzle in a category serves each title exactly once before any repeat.
#[test]
fn every_title_served_once_per_cycle() {
    for category in Category::ALL {
        let (mut session, mut rng) = start(category, 7);
        let total = category.puzzles().len();
        let mut seen = HashSet::new();
        let mut now = 0.0;
        for _ in 0..total {
            let title = current_title(&session);
            assert!(seen.insert(title), "'{title}' repeated within a cycle of '{category}'");
            session.submit_guess(title, now).unwrap();
            now += 1_500.0;
            assert!(matches!(session.tick(now, &mut rng).unwrap(), Some(TickEvent::NextRound(_))));
        }
        assert_eq!(seen.len(), total);
        assert_eq!(session.score(), 10 * total as u32);
    }
}

// Case, spaces and hyphens are ignored when checking a guess.
#[test]
fn guesses_are_forgiving() {
    let (mut session, _) = start(Category::Movies, 1);
    let title = current_title(&session);
    let sloppy: String = title
        .chars()
        .map(|c| if c == ' ' { '-' } else { c.to_ascii_uppercase() })
        .collect();
    assert!(matches!(session.submit_guess(&format!("  {sloppy} "), 0.0), Ok(GuessOutcome::Correct { .. })));
}

#[test]
fn three_misses_end_the_game_at_zero() {
    let (mut session, _) = start(Category::Countries, 2);
    let answer = current_title(&session);
    for expected in 1..=2 {
        match session.submit_guess("atlantis", 0.0).unwrap() {
            GuessOutcome::Wrong { incorrect, score, deducted } => {
                assert_eq!(incorrect, expected);
                assert_eq!(score, 0);
                assert_eq!(deducted, 0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(
        session.submit_guess("lemuria", 0.0).unwrap(),
        GuessOutcome::GameOver { final_score: 0, answer }
    );
    assert_eq!(session.screen(), Screen::Feedback);
}

#[test]
fn wrong_guess_costs_two() {
    let (mut session, mut rng) = start(Category::Brands, 3);
    session.submit_guess(current_title(&session), 0.0).unwrap();
    session.tick(1_500.0, &mut rng).unwrap();
    assert!(matches!(
        session.submit_guess("not it", 1_600.0).unwrap(),
        GuessOutcome::Wrong { deducted: 2, score: 8, incorrect: 1 }
    ));
}

#[test]
fn hints_reveal_in_order() {
    let (mut session, _) = start(Category::Books, 4);
    let hints = session.round().unwrap().puzzle().hints;
    for (i, expected) in hints.iter().enumerate() {
        match session.request_hint().unwrap() {
            HintOutcome::Revealed { number, text, .. } => {
                assert_eq!(number, i + 1);
                assert_eq!(text, *expected);
            }
            HintOutcome::Exhausted => panic!("hint {} missing", i + 1),
        }
    }
    assert_eq!(session.request_hint().unwrap(), HintOutcome::Exhausted);
    assert_eq!(session.score(), 0);
}

#[test]
fn timer_expiry_reveals_answer() {
    let config = GameConfig::from_json(Some(r#"{"round_seconds": 5}"#)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = GameSession::new(&config);
    session.choose_category("tv").unwrap();
    session.start_game(&mut rng, 100.0).unwrap();
    let answer = current_title(&session);

    let mut shown = Vec::new();
    let mut expired = None;
    let mut t = 100.0;
    while expired.is_none() {
        t += 16.0;
        match session.tick(t, &mut rng).unwrap() {
            Some(TickEvent::Countdown(s)) => shown.push(s),
            Some(TickEvent::TimeUp { answer, final_score }) => expired = Some((answer, final_score)),
            Some(TickEvent::NextRound(_)) => panic!("no round was solved"),
            None => {}
        }
    }
    assert_eq!(shown, [4, 3, 2, 1]);
    assert_eq!(expired, Some((answer, 0)));
    assert_eq!(session.screen(), Screen::Feedback);
}

#[test]
fn screens_follow_the_menu_flow() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut session = GameSession::new(&GameConfig::default());
    assert_eq!(session.screen(), Screen::Menu);
    assert!(matches!(session.return_to_menu(), Err(GameError::InvalidTransition { .. })));

    assert_eq!(session.open_leaderboard().unwrap(), Screen::Leaderboard);
    assert_eq!(session.return_to_menu().unwrap(), Screen::Menu);

    session.choose_category("Songs").unwrap();
    assert_eq!(session.screen(), Screen::Lobby);
    session.start_game(&mut rng, 0.0).unwrap();
    assert_eq!(session.screen(), Screen::Game);
    assert!(matches!(session.choose_category("movies"), Err(GameError::InvalidTransition { .. })));

    session.exit_game().unwrap();
    let feedback = session.submit_feedback(Some("Player4242"), "loved it").unwrap();
    assert_eq!(feedback.category, "songs");
    assert_eq!(session.feedback_sent().unwrap(), Screen::Menu);
}

#[test]
fn final_scores_reach_the_leaderboard() {
    let store = MemoryStore::new();
    let (mut session, _) = start(Category::Movies, 8);
    session.submit_guess(current_title(&session), 0.0).unwrap();
    let final_score = session.exit_game().unwrap();
    assert_eq!(final_score, 10);

    assert_eq!(block_on(submit_score(&store, "Player1111", final_score)).unwrap(), SubmitOutcome::Created);
    assert_eq!(block_on(submit_score(&store, "Player2222", 30)).unwrap(), SubmitOutcome::Created);
    assert_eq!(
        block_on(submit_score(&store, "Player1111", 4)).unwrap(),
        SubmitOutcome::Kept { best: 10 }
    );

    let top = block_on(store.top(3)).unwrap();
    assert_eq!(banner_text(&top), "Top Scores: Player2222: 30 | Player1111: 10");
}
