// Browser smoke tests, run with `wasm-pack test --headless --firefox`.
// The shell binds its listeners once per page, so everything that needs a
// booted game runs inside the single boot test.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn element(id: &str) -> web_sys::Element {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .unwrap_or_else(|| panic!("missing #{id}"))
}

fn click(el: web_sys::Element) {
    el.dyn_into::<web_sys::HtmlElement>().expect("clickable element").click();
}

fn visible(id: &str) -> bool {
    !element(id).class_list().contains("hidden")
}

#[wasm_bindgen_test]
fn boots_into_the_menu_and_guards_the_leaderboard() {
    emoji_guess::start_game(Some(r#"{"round_seconds": 10}"#.to_string())).unwrap();

    assert!(visible("menu-screen"));
    for id in ["lobby-screen", "game-screen", "feedback-screen", "leaderboard-screen"] {
        assert!(!visible(id), "#{id} should start hidden");
    }
    let welcome = element("username-display").text_content().unwrap_or_default();
    assert!(welcome.starts_with("Welcome, "), "unexpected welcome text {welcome:?}");

    // From the menu the banner opens the full leaderboard.
    click(element("leaderboard-banner"));
    assert!(visible("leaderboard-screen"));
    click(element("return-menu-from-leaderboard"));
    assert!(visible("menu-screen"));

    // Anywhere else it only explains where the leaderboard lives.
    let movies = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".category-btn[data-category=\"movies\"]").ok().flatten())
        .expect("movies button");
    click(movies);
    assert!(visible("lobby-screen"));
    click(element("leaderboard-banner"));
    assert!(visible("lobby-screen"));
    assert!(!visible("leaderboard-screen"));
    assert!(visible("toast"));
    assert_eq!(
        element("toast").text_content().as_deref(),
        Some("Leaderboard can be viewed fully from the main menu!")
    );
}

#[wasm_bindgen_test]
fn rejects_malformed_config() {
    assert!(emoji_guess::start_game(Some("{\"round_secs\": 1}".to_string())).is_err());
}
