//! Status bar
//!
//! Displays the device, the input mode and the last accepted command.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::App;

/// Text of the status bar.
pub fn status_text(app: &App) -> String {
    let last = app.last_command().map_or_else(|| "-".to_string(), |command| command.to_string());
    format!(
        " {} | {} | last: {last} | sent: {}",
        app.device_addr(),
        app.mode(),
        app.commands_sent()
    )
}

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(status_text(app))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
