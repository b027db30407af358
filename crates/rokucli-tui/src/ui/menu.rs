//! Usage menu
//!
//! The help table listing every remote button and its key. The first half
//! of the bindings fills the left column, the rest the right.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use rokucli_app::keymap::{QUIT_HINT, USAGE};

const LEFT_WIDTH: usize = 31;
const RIGHT_WIDTH: usize = 25;

/// Lines of the usage table, border and footer included.
pub fn usage_lines() -> Vec<String> {
    let border = format!("+{}+{}+", "-".repeat(LEFT_WIDTH), "-".repeat(RIGHT_WIDTH));

    let (left, right) = USAGE.split_at(USAGE.len().div_ceil(2));

    let mut lines = vec![border.clone()];
    for (i, (name, keys)) in left.iter().enumerate() {
        let left_cell = cell(name, keys, 15);
        let right_cell = right.get(i).map_or_else(String::new, |(n, k)| cell(n, k, 16));
        lines.push(format!("| {left_cell:<30}| {right_cell:<24}|"));
    }
    lines.push(border);
    lines.push(format!(" {QUIT_HINT}"));
    lines
}

fn cell(name: &str, keys: &str, name_width: usize) -> String {
    format!("{name:<name_width$}{keys}")
}

/// Height the menu needs.
pub fn height() -> u16 {
    u16::try_from(usage_lines().len()).unwrap_or(u16::MAX)
}

/// Render the usage menu.
pub fn render(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = usage_lines().into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_binding() {
        insta::assert_snapshot!(usage_lines().join("\n"), @r"
        +-------------------------------+-------------------------+
        | Back           B or <Backsp>  | Replay          R       |
        | Home           H              | Info/Settings   i       |
        | Left           h or <Left>    | Rewind          r       |
        | Down           j or <Down>    | Fast-Fwd        f       |
        | Up             k or <Up>      | Play/Pause      <Space> |
        | Right          l or <Right>   | Enter Text      /       |
        | Ok/Enter       <Enter>        | Use Keyboard    u       |
        +-------------------------------+-------------------------+
         (press q to exit)
        ");
    }
}
