//! Root layout widget

use crate::app::state::PreviewState;
use crate::config::Config;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{badges, help, swatches};

/// ┌──────────────────────┬───────────────────┐
/// │  Palette roles       │  Priority badges  │
/// │                      ├───────────────────┤
/// │                      │  Projects         │
/// ├──────────────────────┴───────────────────┤
/// │ j/k move  ? help  q quit                 │
/// └──────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, theme: &Theme, state: &PreviewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    if state.show_help {
        help::render(frame, theme, rows[0]);
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(cols[1]);

        swatches::render(frame, cfg, theme, state, cols[0]);
        badges::render_priorities(frame, theme, right[0]);
        badges::render_projects(frame, cfg, theme, right[1]);
    }

    let footer = Line::from(vec![
        Span::styled(" j/k", Style::default().fg(Color::from(theme.palette.accent))),
        Span::raw(" move  "),
        Span::styled("?", Style::default().fg(Color::from(theme.palette.accent))),
        Span::raw(" help  "),
        Span::styled("q", Style::default().fg(Color::from(theme.palette.accent))),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(footer), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Action;
    use crate::config::defaults::defaults;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_palette_and_badges() {
        let cfg = defaults();
        let theme = Theme::from_config(&cfg);
        let state = PreviewState::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, &cfg, &theme, &state)).unwrap();

        let text = screen_text(&terminal);
        for role in crate::tui::theme::Role::ALL {
            assert!(text.contains(role.name()), "missing {}", role.name());
        }
        assert!(text.contains("#F44336"));
        assert!(text.contains("High"));
        assert!(text.contains("Work"));
    }

    #[test]
    fn test_render_help() {
        let cfg = defaults();
        let theme = Theme::new();
        let mut state = PreviewState::default();
        state.apply(Action::ToggleHelp);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(f, &cfg, &theme, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Keybinds"));
        assert!(!text.contains("primaryColor"));
    }
}
