//! Palette role list with color swatches

use crate::app::state::PreviewState;
use crate::config::Config;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(frame: &mut Frame, cfg: &Config, theme: &Theme, state: &PreviewState, area: Rect) {
    let palette = &theme.palette;
    let swatch = " ".repeat(cfg.ui.swatch_width as usize);

    let items: Vec<ListItem> = palette
        .entries()
        .map(|(role, color)| {
            ListItem::new(Line::from(vec![
                Span::styled(swatch.clone(), Style::default().bg(Color::from(color))),
                Span::raw(" "),
                Span::styled(
                    format!("{:<20}", role.name()),
                    Style::default().fg(Color::from(palette.primary)),
                ),
                Span::raw(color.to_string()),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(Color::from(palette.primary_dark)))
        .title(format!(" Palette: {} ", state.selected_role().name()))
        .title_style(Style::default().fg(Color::from(palette.accent)));

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
