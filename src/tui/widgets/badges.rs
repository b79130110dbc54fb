//! Priority badges and project chips

use crate::config::Config;
use crate::tui::theme::{project_color, Priority, Theme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn panel<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(Color::from(theme.palette.primary_dark)))
        .title(title)
        .title_style(Style::default().fg(Color::from(theme.palette.accent)))
}

pub fn render_priorities(frame: &mut Frame, theme: &Theme, area: Rect) {
    let badges: Vec<Span> = Priority::ALL
        .into_iter()
        .flat_map(|p| {
            let style = Style::default()
                .bg(Color::from(theme.palette.priority_color(p)))
                .fg(Color::from(p.badge_text_color()))
                .add_modifier(Modifier::BOLD);
            [Span::styled(format!(" {} ", p.label()), style), Span::raw(" ")]
        })
        .collect();

    let para = Paragraph::new(vec![Line::default(), Line::from(badges)])
        .block(panel(theme, " Priorities "));
    frame.render_widget(para, area);
}

pub fn render_projects(frame: &mut Frame, cfg: &Config, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = if cfg.projects.is_empty() {
        vec![Line::from(Span::styled(
            "No projects configured",
            Style::default().add_modifier(Modifier::ITALIC),
        ))]
    } else {
        cfg.projects
            .iter()
            .map(|p| {
                let color = project_color(p.color.as_deref());
                Line::from(vec![
                    Span::styled("  ", Style::default().bg(Color::from(color))),
                    Span::raw(format!(" {} ", p.name)),
                    Span::styled(color.to_string(), Style::default().fg(Color::from(color))),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(panel(theme, " Projects ")), area);
}
