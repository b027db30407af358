//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into a frame.

pub mod menu;
mod prompt;
pub mod status;

use ratatui::{Frame, layout::Rect};

use crate::App;

const GAP_HEIGHT: u16 = 1;
const PROMPT_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Split `area` into menu, prompt and status rows.
///
/// The status bar takes the bottom row and the prompt sits one row below the
/// menu. When the terminal is too short the menu is cut first, so the prompt
/// and status bar stay visible down to a height of two rows.
pub fn areas(area: Rect) -> [Rect; 3] {
    let status_height = area.height.min(STATUS_HEIGHT);
    let status = Rect { y: area.bottom() - status_height, height: status_height, ..area };

    let body = Rect { height: area.height - status_height, ..area };
    let prompt_height = body.height.min(PROMPT_HEIGHT);
    let prompt_y = (body.y + menu::height() + GAP_HEIGHT).min(body.bottom() - prompt_height);
    let prompt = Rect { y: prompt_y, height: prompt_height, ..body };

    let menu = Rect { height: menu::height().min(prompt_y - body.y), ..body };
    [menu, prompt, status]
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let [menu_area, prompt_area, status_area] = areas(frame.area());

    menu::render(frame, menu_area);
    prompt::render(frame, app, prompt_area);
    status::render(frame, app, status_area);
}
