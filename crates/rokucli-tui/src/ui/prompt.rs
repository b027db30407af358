//! Prompt line
//!
//! While a text capture runs, shows the capture prompt followed by the local
//! echo, with the cursor after it. Otherwise shows the last status message.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rokucli_app::CAPTURE_PROMPT;

use crate::App;

/// Render the prompt line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(echo) = app.capture_text() else {
        let message = app.status_message().unwrap_or_default();
        let style = if message.starts_with("Error:") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(Paragraph::new(Span::styled(message, style)), area);
        return;
    };

    let line = Line::from(vec![
        Span::styled(CAPTURE_PROMPT, Style::default().fg(Color::Yellow)),
        Span::raw(echo),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let offset = CAPTURE_PROMPT.chars().count() + echo.chars().count();
    let x = area.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
    frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
}
