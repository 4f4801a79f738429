//! Browser shell: wires the DOM to a [`GameSession`] and drives the frame loop.
//!
//! All state lives in the `APP` thread-local. Event listeners and the
//! animation-frame callback borrow it, mutate the session and push the result
//! back into the page. Leaderboard and feedback calls run as local futures and
//! re-borrow `APP` only once their response arrives.
use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::backdrop::Backdrop;
use crate::catalog::Puzzle;
use crate::config::GameConfig;
use crate::dom;
use crate::error::GameError;
use crate::leaderboard::{Backend, ScoreStore, banner_text, submit_score};
use crate::player::{USERNAME_KEY, resolve_username, welcome_text};
use crate::screen::{Action, Screen};
use crate::session::{GameSession, GuessOutcome, HintOutcome, TickEvent};

const CHECKMARK_MS: f64 = 1500.0;
const HINT_BUBBLE_MS: f64 = 3000.0;
const BACKDROP_FONT: &str = "32px 'Segoe UI Emoji', 'Noto Color Emoji', sans-serif";

/// Deadlines (frame timestamps) at which transient overlays are hidden again.
#[derive(Default)]
struct Overlays {
    checkmark_until: Option<f64>,
    hint_until: Option<f64>,
    toast_until: Option<f64>,
}

struct App {
    doc: Document,
    config: GameConfig,
    session: GameSession,
    store: Rc<Backend>,
    rng: StdRng,
    username: String,
    backdrop: Backdrop,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    overlays: Overlays,
    last_banner_ms: Option<f64>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    dom::ensure_shell(&doc)?;
    let (canvas, ctx) = dom::ensure_backdrop(&doc)?;

    let mut rng = StdRng::from_entropy();
    let storage = dom::local_storage();
    let stored = storage.as_ref().and_then(|s| s.get_item(USERNAME_KEY).ok().flatten());
    let (username, fresh) = resolve_username(stored, &mut rng);
    if fresh {
        match storage.as_ref().map(|s| s.set_item(USERNAME_KEY, &username)) {
            Some(Ok(())) => debug!(%username, "stored new username"),
            _ => warn!("local storage unavailable, username will not persist"),
        }
    }
    dom::set_text(&doc, "username-display", &welcome_text(&username));
    info!(%username, "player ready");

    let app = App {
        session: GameSession::new(&config),
        store: Rc::new(Backend::from_config(&config)),
        doc: doc.clone(),
        config,
        rng,
        username,
        backdrop: Backdrop::new(),
        canvas,
        ctx,
        overlays: Overlays::default(),
        last_banner_ms: None,
    };
    APP.with(|cell| cell.replace(Some(app)));

    with_app(|app| apply_screen(app, Screen::Menu));
    bind_listeners(&doc)?;
    start_frame_loop();
    Ok(())
}

fn on_click(doc: &Document, id: &str, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let el = dom::by_id(doc, id)?;
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| handler()) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_listeners(doc: &Document) -> Result<(), JsValue> {
    for (button, category) in dom::category_buttons(doc) {
        let Some(category) = category else {
            warn!("category button without a known data-category");
            continue;
        };
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_app(|app| match app.session.choose_category(category.key()) {
                Ok(category) => {
                    dom::set_text(&app.doc, "selected-category", category.label());
                    let screen = app.session.screen();
                    apply_screen(app, screen);
                }
                Err(e) => warn!(error = %e, "could not choose category"),
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    on_click(doc, "start-game-btn", || {
        with_app(|app| {
            let now = now_ms();
            match app.session.start_game(&mut app.rng, now) {
                Ok(puzzle) => {
                    apply_screen(app, Screen::Game);
                    show_round(app, puzzle);
                }
                Err(e) => toast(app, &e.to_string()),
            }
        })
    })?;

    for id in ["return-menu-btn", "return-feedback-btn", "return-menu-from-leaderboard"] {
        on_click(doc, id, || with_app(|app| transition(app, GameSession::return_to_menu)))?;
    }

    // The banner stays visible on every screen; the session decides whether it may open.
    for id in ["leaderboard-btn", "leaderboard-banner"] {
        on_click(doc, id, || with_app(open_leaderboard))?;
    }

    on_click(doc, "submit-btn", || with_app(submit_guess))?;
    {
        let input = dom::by_id(doc, "user-input")?;
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Enter" {
                evt.prevent_default();
                with_app(submit_guess);
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    on_click(doc, "hint-btn", || with_app(request_hint))?;

    on_click(doc, "exit-game-btn", || {
        with_app(|app| match app.session.exit_game() {
            Ok(final_score) => game_ended(app, Action::ExitGame, final_score),
            Err(e) => warn!(error = %e, "exit ignored"),
        })
    })?;

    on_click(doc, "submit-feedback-btn", || with_app(send_feedback))?;
    Ok(())
}

fn open_leaderboard(app: &mut App) {
    match app.session.open_leaderboard() {
        Ok(screen) => apply_screen(app, screen),
        Err(GameError::LeaderboardOnlyFromMenu) => {
            toast(app, "Leaderboard can be viewed fully from the main menu!")
        }
        Err(e) => warn!(error = %e, "could not open leaderboard"),
    }
}

fn transition(app: &mut App, step: fn(&mut GameSession) -> Result<Screen, GameError>) {
    match step(&mut app.session) {
        Ok(screen) => apply_screen(app, screen),
        Err(e) => warn!(error = %e, "transition rejected"),
    }
}

/// Shows `screen` and performs the DOM side of its entry effects.
fn apply_screen(app: &mut App, screen: Screen) {
    let effects = screen.entry_effects();
    dom::show_screen(&app.doc, screen);
    app.backdrop.set_enabled(effects.animate_backdrop);
    if effects.reset_score {
        dom::set_text(&app.doc, "game-score", &app.session.score().to_string());
    }
    if effects.show_final_score {
        dom::set_text(&app.doc, "final-score", &app.session.score().to_string());
    }
    if effects.refresh_leaderboard {
        refresh_leaderboard(app);
    }
}

fn show_round(app: &mut App, puzzle: &Puzzle) {
    let doc = &app.doc;
    dom::set_text(doc, "emoji-display", puzzle.emoji);
    dom::set_text(doc, "game-time", &app.session.round_seconds().to_string());
    dom::clear_input(doc, "user-input");
    dom::reset_round_marks(doc);
    dom::set_visible_by_id(doc, "hint-bubble", false);
    app.overlays.checkmark_until = None;
    app.overlays.hint_until = None;
}

fn submit_guess(app: &mut App) {
    let guess = dom::input_value(&app.doc, "user-input");
    let now = now_ms();
    let outcome = match app.session.submit_guess(&guess, now) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = %e, "guess ignored");
            return;
        }
    };
    dom::clear_input(&app.doc, "user-input");
    match outcome {
        GuessOutcome::Correct { score, .. } => {
            dom::set_text(&app.doc, "game-score", &score.to_string());
            dom::set_visible_by_id(&app.doc, "checkmark", true);
            app.overlays.checkmark_until = Some(now + CHECKMARK_MS);
        }
        GuessOutcome::Wrong { score, incorrect, .. } => {
            dom::set_text(&app.doc, "game-score", &score.to_string());
            dom::mark_wrong(&app.doc, incorrect);
        }
        GuessOutcome::GameOver { final_score, .. } => {
            toast(app, "Game Over! Too many incorrect guesses.");
            game_ended(app, Action::GameOver, final_score);
        }
    }
}

fn request_hint(app: &mut App) {
    match app.session.request_hint() {
        Ok(HintOutcome::Revealed { number, text, score, .. }) => {
            dom::set_text(&app.doc, "game-score", &score.to_string());
            dom::set_text(&app.doc, "hint-bubble", &format!("Hint {number}: {text}"));
            dom::set_visible_by_id(&app.doc, "hint-bubble", true);
            app.overlays.hint_until = Some(now_ms() + HINT_BUBBLE_MS);
        }
        Ok(HintOutcome::Exhausted) => toast(app, "No more hints available for this emoji."),
        Err(e) => debug!(error = %e, "hint ignored"),
    }
}

/// The session already moved to the feedback screen; mirror it and, when the
/// ending `how` calls for it, record the score.
fn game_ended(app: &mut App, how: Action, final_score: u32) {
    let screen = app.session.screen();
    apply_screen(app, screen);
    if !how.records_score() {
        debug!(?how, final_score, "game ended without recording a score");
        return;
    }
    let store = Rc::clone(&app.store);
    let name = app.username.clone();
    spawn_local(async move {
        if let Err(e) = submit_score(&*store, &name, final_score).await {
            error!(error = %e, "failed to submit score");
        }
    });
}

fn send_feedback(app: &mut App) {
    let message = dom::textarea_value(&app.doc, "feedback-input");
    let feedback = match app.session.submit_feedback(Some(&app.username), &message) {
        Ok(feedback) => feedback,
        Err(GameError::EmptyFeedback) => {
            toast(app, "Please write something before submitting.");
            return;
        }
        Err(e) => {
            warn!(error = %e, "feedback rejected");
            return;
        }
    };
    let store = Rc::clone(&app.store);
    spawn_local(async move {
        let result = store.add_feedback(&feedback).await;
        with_app(|app| match result {
            Ok(()) => {
                info!("feedback submitted");
                dom::clear_textarea(&app.doc, "feedback-input");
                toast(app, "Thank you for your feedback!");
                transition(app, GameSession::feedback_sent);
            }
            Err(e) => {
                error!(error = %e, "failed to submit feedback");
                toast(app, "There was a problem submitting your feedback.");
            }
        });
    });
}

fn toast(app: &mut App, message: &str) {
    dom::set_text(&app.doc, "toast", message);
    dom::set_visible_by_id(&app.doc, "toast", true);
    app.overlays.toast_until = Some(now_ms() + f64::from(app.config.toast_ms));
}

fn refresh_banner(app: &App) {
    let store = Rc::clone(&app.store);
    let limit = app.config.banner_size;
    spawn_local(async move {
        match store.top(limit).await {
            Ok(entries) => with_app(|app| dom::set_text(&app.doc, "top-scores-text", &banner_text(&entries))),
            Err(e) => warn!(error = %e, "failed to load top scores"),
        }
    });
}

fn refresh_leaderboard(app: &App) {
    let store = Rc::clone(&app.store);
    let limit = app.config.leaderboard_size;
    spawn_local(async move {
        match store.top(limit).await {
            Ok(entries) => with_app(|app| {
                if let Err(e) = dom::render_leaderboard(&app.doc, &entries) {
                    error!(error = ?e, "failed to render leaderboard");
                }
            }),
            Err(e) => error!(error = %e, "failed to load leaderboard"),
        }
    });
}

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_app(|app| frame(app, ts));
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn frame(app: &mut App, now: f64) {
    match app.session.tick(now, &mut app.rng) {
        Ok(None) => {}
        Ok(Some(TickEvent::Countdown(secs))) => dom::set_text(&app.doc, "game-time", &secs.to_string()),
        Ok(Some(TickEvent::NextRound(puzzle))) => show_round(app, puzzle),
        Ok(Some(TickEvent::TimeUp { answer, final_score })) => {
            dom::set_text(&app.doc, "game-time", "0");
            toast(app, &format!("Time's up! The correct answer was: {answer}"));
            game_ended(app, Action::TimeUp, final_score);
        }
        Err(e) => error!(error = %e, "session tick failed"),
    }

    expire_overlays(app, now);

    let banner_due = app
        .last_banner_ms
        .is_none_or(|last| now - last >= f64::from(app.config.banner_refresh_ms));
    if banner_due {
        app.last_banner_ms = Some(now);
        refresh_banner(app);
    }

    render_backdrop(app, now);
}

fn expire_overlays(app: &mut App, now: f64) {
    let doc = &app.doc;
    for (slot, id) in [
        (&mut app.overlays.checkmark_until, "checkmark"),
        (&mut app.overlays.hint_until, "hint-bubble"),
        (&mut app.overlays.toast_until, "toast"),
    ] {
        if slot.is_some_and(|until| now >= until) {
            *slot = None;
            dom::set_visible_by_id(doc, id, false);
        }
    }
}

fn render_backdrop(app: &mut App, now: f64) {
    let (w, h) = window()
        .map(|win| {
            let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (dim(win.inner_width()), dim(win.inner_height()))
        })
        .unwrap_or((0.0, 0.0));
    if app.canvas.width() != w as u32 || app.canvas.height() != h as u32 {
        app.canvas.set_width(w as u32);
        app.canvas.set_height(h as u32);
        app.ctx.set_text_align("center");
    }
    app.backdrop.update(now, w, h, &mut app.rng);

    let ctx = &app.ctx;
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_font(BACKDROP_FONT);
    for p in app.backdrop.particles() {
        ctx.set_global_alpha(p.opacity(now));
        let _ = ctx.fill_text(p.emoji, p.x, p.y(now));
    }
    ctx.set_global_alpha(1.0);
}
