//! Theme configuration - task manager palette

pub mod borders;
pub mod palette;
pub mod priority;
pub mod project;

pub use borders::BorderStyle;
pub use palette::{OverrideError, Palette, Role};
pub use priority::Priority;
pub use project::{parse_project_color, project_color};

use crate::color::ParseColorError;
use crate::config::Config;
use thiserror::Error;

/// A theme setting in the config that falls back to a default.
#[derive(Debug, Error, PartialEq)]
pub enum ThemeIssue {
    #[error(transparent)]
    Override(#[from] OverrideError),
    #[error("project '{project}': {source}")]
    ProjectColor {
        project: String,
        source: ParseColorError,
    },
}

/// Active theme. Built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub border: BorderStyle,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::TASKS,
            border: BorderStyle::default(),
        }
    }

    /// Apply the config's palette overrides. Bad entries are logged and skipped,
    /// as are project colors that will fall back to the default.
    pub fn from_config(cfg: &Config) -> Self {
        let (palette, _) = Palette::with_overrides(Palette::TASKS, &cfg.theme.overrides);
        for issue in Self::validate(cfg) {
            tracing::warn!("using default: {issue}");
        }
        Self {
            palette,
            border: cfg.ui.border,
        }
    }

    /// Every override and project color in `cfg` that would fall back to a default.
    pub fn validate(cfg: &Config) -> Vec<ThemeIssue> {
        let (_, errors) = Palette::with_overrides(Palette::TASKS, &cfg.theme.overrides);
        let mut issues: Vec<ThemeIssue> = errors.into_iter().map(ThemeIssue::from).collect();
        for p in &cfg.projects {
            if let Err(source) = parse_project_color(p.color.as_deref()) {
                issues.push(ThemeIssue::ProjectColor {
                    project: p.name.clone(),
                    source,
                });
            }
        }
        issues
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        self.border.to_border_set()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
