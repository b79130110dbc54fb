//! Project chip colors

use crate::color::{Argb, ParseColorError};

/// Color given to a project that never picked one.
pub const DEFAULT_PROJECT_COLOR: Argb = Argb::from_hex_literal("#4285F4");

/// Parse a project's stored color, ignoring surrounding whitespace. Missing or
/// blank means the default color.
pub fn parse_project_color(hex: Option<&str>) -> Result<Argb, ParseColorError> {
    match hex.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse(),
        None => Ok(DEFAULT_PROJECT_COLOR),
    }
}

/// Like [`parse_project_color`], falling back to the default on bad input.
pub fn project_color(hex: Option<&str>) -> Argb {
    parse_project_color(hex).unwrap_or(DEFAULT_PROJECT_COLOR)
}
