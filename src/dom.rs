//! Thin helpers over `web_sys` for the game's page structure.
//!
//! The page may ship its own markup; when `#eg-root` is missing the default
//! layout below is injected so the crate also runs on a blank page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlInputElement,
    HtmlTextAreaElement, Storage, window,
};

use crate::catalog::Category;
use crate::leaderboard::{LeaderboardEntry, display_name};
use crate::screen::Screen;

pub const ROOT_ID: &str = "eg-root";
pub const BACKDROP_CANVAS_ID: &str = "eg-backdrop";
const HIDDEN: &str = "hidden";
const SHOWN: &str = "show";

const STYLE: &str = "
.hidden { display: none !important; }
#eg-root { position: relative; z-index: 10; font-family: 'Segoe UI', sans-serif; text-align: center; color: #f4f4f4; }
#eg-root button { margin: 4px; padding: 8px 14px; border-radius: 8px; border: 1px solid #444; background: #2b2b3a; color: #ffd166; cursor: pointer; }
#emoji-display { font-size: 64px; margin: 16px 0; }
#leaderboard-banner { cursor: pointer; position: fixed; top: 0; left: 0; right: 0; padding: 4px; background: rgba(0,0,0,0.5); color: #ffd166; z-index: 40; }
#toast { position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); padding: 8px 14px; background: rgba(0,0,0,0.75); border-radius: 8px; z-index: 50; }
#hint-bubble { display: inline-block; padding: 6px 12px; background: #ffd166; color: #222; border-radius: 12px; }
";

const MARKUP: &str = r#"
<div id="leaderboard-banner"><span id="top-scores-text">Top Scores: </span></div>
<p id="username-display"></p>
<section id="menu-screen">
  <h1>Emoji Guess</h1>
  <div id="category-buttons">
    <button class="category-btn" data-category="movies">Movies</button>
    <button class="category-btn" data-category="songs">Songs</button>
    <button class="category-btn" data-category="books">Books</button>
    <button class="category-btn" data-category="tv">TV Shows</button>
    <button class="category-btn" data-category="countries">Countries</button>
    <button class="category-btn" data-category="brands">Brands</button>
  </div>
  <button id="leaderboard-btn">Leaderboard</button>
</section>
<section id="lobby-screen" class="hidden">
  <h2>Category: <span id="selected-category"></span></h2>
  <button id="start-game-btn">Start Game</button>
  <button id="return-menu-btn">Back</button>
</section>
<section id="game-screen" class="hidden">
  <div>Score: <span id="game-score">0</span> | Time: <span id="game-time">30</span></div>
  <div id="emoji-display"></div>
  <div id="feedback">
    <span id="checkmark" class="hidden">✅</span>
    <span class="x-icon hidden">❌</span><span class="x-icon hidden">❌</span><span class="x-icon hidden">❌</span>
  </div>
  <div id="hint-bubble" class="hidden"></div>
  <div>
    <input id="user-input" type="text" autocomplete="off" placeholder="Your guess">
    <button id="submit-btn">Guess</button>
    <button id="hint-btn">Hint</button>
    <button id="exit-game-btn">Exit</button>
  </div>
</section>
<section id="feedback-screen" class="hidden">
  <h2>Final score: <span id="final-score">0</span></h2>
  <textarea id="feedback-input" rows="4" cols="40" placeholder="Tell us what you think"></textarea>
  <div>
    <button id="submit-feedback-btn">Send Feedback</button>
    <button id="return-feedback-btn">Main Menu</button>
  </div>
</section>
<section id="leaderboard-screen" class="hidden">
  <h2>Leaderboard</h2>
  <table id="leaderboard-table"><thead><tr><th>#</th><th>Name</th><th>Score</th></tr></thead><tbody></tbody></table>
  <button id="return-menu-from-leaderboard">Main Menu</button>
</section>
<div id="toast" class="hidden"></div>
"#;

pub fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Injects the default layout unless the page already provides one.
pub fn ensure_shell(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(ROOT_ID).is_some() {
        return Ok(());
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLE));
    body.append_child(&style)?;

    let root = doc.create_element("div")?;
    root.set_id(ROOT_ID);
    root.set_inner_html(MARKUP);
    body.append_child(&root)?;
    tracing::debug!("injected default page layout");
    Ok(())
}

/// Full-viewport canvas behind the UI for the floating emoji.
pub fn ensure_backdrop(doc: &Document) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(BACKDROP_CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(BACKDROP_CANVAS_ID);
        c.set_attribute("style", "position:fixed; left:0; top:0; width:100%; height:100%; pointer-events:none; z-index:0;")?;
        doc.body().ok_or_else(|| JsValue::from_str("no body"))?.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_text_align("center");
    Ok((canvas, ctx))
}

pub fn set_text(doc: &Document, id: &str, text: &str) {
    match doc.get_element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => tracing::warn!(id, "element not found"),
    }
}

pub fn set_visible(el: &Element, visible: bool) {
    let classes = el.class_list();
    let (add, remove) = if visible { (SHOWN, HIDDEN) } else { (HIDDEN, SHOWN) };
    let _ = classes.add_1(add);
    let _ = classes.remove_1(remove);
}

pub fn set_visible_by_id(doc: &Document, id: &str, visible: bool) {
    if let Some(el) = doc.get_element_by_id(id) {
        set_visible(&el, visible);
    }
}

pub fn show_screen(doc: &Document, screen: Screen) {
    for s in Screen::ALL {
        set_visible_by_id(doc, s.element_id(), s == screen);
    }
}

pub fn input_value(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn clear_input(doc: &Document, id: &str) {
    if let Some(input) = doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

pub fn textarea_value(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default()
}

pub fn clear_textarea(doc: &Document, id: &str) {
    if let Some(t) = doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok()) {
        t.set_value("");
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Hides the checkmark and every X icon.
pub fn reset_round_marks(doc: &Document) {
    set_visible_by_id(doc, "checkmark", false);
    for icon in query_all(doc, ".x-icon") {
        set_visible(&icon, false);
    }
}

/// Reveals the X icon for the `count`-th wrong guess (1-based).
pub fn mark_wrong(doc: &Document, count: u32) {
    let icons = query_all(doc, ".x-icon");
    if let Some(icon) = (count as usize).checked_sub(1).and_then(|i| icons.get(i)) {
        set_visible(icon, true);
    }
}

pub fn category_buttons(doc: &Document) -> Vec<(Element, Option<Category>)> {
    query_all(doc, ".category-btn")
        .into_iter()
        .map(|el| {
            let category = el.get_attribute("data-category").and_then(|k| k.parse::<Category>().ok());
            (el, category)
        })
        .collect()
}

/// Rebuilds the leaderboard table body. Names are inserted as text.
pub fn render_leaderboard(doc: &Document, entries: &[LeaderboardEntry]) -> Result<(), JsValue> {
    let Some(tbody) = doc.query_selector("#leaderboard-table tbody")? else {
        tracing::warn!("leaderboard table missing");
        return Ok(());
    };
    tbody.set_text_content(None);
    for (i, entry) in entries.iter().enumerate() {
        let row = doc.create_element("tr")?;
        for cell in [(i + 1).to_string(), display_name(&entry.name).to_string(), entry.score.to_string()] {
            let td = doc.create_element("td")?;
            td.set_text_content(Some(&cell));
            row.append_child(&td)?;
        }
        tbody.append_child(&row)?;
    }
    Ok(())
}

pub fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}
