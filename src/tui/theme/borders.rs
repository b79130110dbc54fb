//! Border styles

use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

/// Border style - rounded by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Rounded,
    Plain,
    Thick,
}

impl BorderStyle {
    pub fn to_border_set(self) -> border::Set<'static> {
        match self {
            BorderStyle::Rounded => border::ROUNDED,
            BorderStyle::Plain => border::PLAIN,
            BorderStyle::Thick => border::THICK,
        }
    }
}
