//! Help screen showing keybindings

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(Color::from(theme.palette.primary_dark)))
        .title(" Keybinds ")
        .title_style(Style::default().fg(Color::from(theme.palette.accent)));

    let content = vec![
        keybind("j / Down", "Next role", theme),
        keybind("k / Up", "Previous role", theme),
        keybind("g / Home", "First role", theme),
        keybind("G / End", "Last role", theme),
        keybind("?", "Toggle this help", theme),
        keybind("q / Esc", "Quit", theme),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default()
                .fg(Color::from(theme.palette.accent))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(desc.to_string()),
    ])
}
