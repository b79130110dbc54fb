//! Color palette - task manager theme

use crate::color::{Argb, ParseColorError};
use std::collections::BTreeMap;
use thiserror::Error;

use super::priority::Priority;

/// Semantic slot in the palette. Names are stable and used as config keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    PrimaryDark,
    Accent,
    TaskHighPriority,
    TaskMediumPriority,
    TaskLowPriority,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::PrimaryDark,
        Role::Accent,
        Role::TaskHighPriority,
        Role::TaskMediumPriority,
        Role::TaskLowPriority,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primaryColor",
            Role::PrimaryDark => "primaryColorDark",
            Role::Accent => "accentColor",
            Role::TaskHighPriority => "taskHighPriority",
            Role::TaskMediumPriority => "taskMediumPriority",
            Role::TaskLowPriority => "taskLowPriority",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// A palette override from config that could not be applied.
#[derive(Debug, Error, PartialEq)]
pub enum OverrideError {
    #[error("unknown palette role '{0}'")]
    UnknownRole(String),
    #[error("bad color for {role}: {source}")]
    BadColor {
        role: &'static str,
        source: ParseColorError,
    },
}

/// Task manager palette. Read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Argb,
    pub primary_dark: Argb,
    pub accent: Argb,
    pub task_high_priority: Argb,
    pub task_medium_priority: Argb,
    pub task_low_priority: Argb,
}

impl Palette {
    /// Blue chrome with an orange accent; red, amber and green for priorities.
    pub const TASKS: Self = Self {
        primary: Argb::from_hex_literal("#1976D2"),
        primary_dark: Argb::from_hex_literal("#0D47A1"),
        accent: Argb::from_hex_literal("#FF9800"),
        task_high_priority: Argb::from_hex_literal("#F44336"),
        task_medium_priority: Argb::from_hex_literal("#FFA000"),
        task_low_priority: Argb::from_hex_literal("#4CAF50"),
    };

    pub const fn get(&self, role: Role) -> Argb {
        match role {
            Role::Primary => self.primary,
            Role::PrimaryDark => self.primary_dark,
            Role::Accent => self.accent,
            Role::TaskHighPriority => self.task_high_priority,
            Role::TaskMediumPriority => self.task_medium_priority,
            Role::TaskLowPriority => self.task_low_priority,
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<Argb> {
        Role::from_name(name).map(|r| self.get(r))
    }

    /// All roles with their colors, in `Role::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = (Role, Argb)> + '_ {
        Role::ALL.into_iter().map(|r| (r, self.get(r)))
    }

    pub const fn priority_color(&self, priority: Priority) -> Argb {
        self.get(priority.role())
    }

    /// Build a palette from `base` with config overrides (role name -> hex).
    ///
    /// Entries that fail to resolve keep the base color and are returned
    /// alongside the palette.
    pub fn with_overrides(
        base: Palette,
        overrides: &BTreeMap<String, String>,
    ) -> (Palette, Vec<OverrideError>) {
        let mut palette = base;
        let mut errors = Vec::new();

        for (name, raw) in overrides {
            let Some(role) = Role::from_name(name) else {
                errors.push(OverrideError::UnknownRole(name.clone()));
                continue;
            };
            match raw.parse::<Argb>() {
                Ok(color) => *palette.slot_mut(role) = color,
                Err(source) => errors.push(OverrideError::BadColor {
                    role: role.name(),
                    source,
                }),
            }
        }

        (palette, errors)
    }

    fn slot_mut(&mut self, role: Role) -> &mut Argb {
        match role {
            Role::Primary => &mut self.primary,
            Role::PrimaryDark => &mut self.primary_dark,
            Role::Accent => &mut self.accent,
            Role::TaskHighPriority => &mut self.task_high_priority,
            Role::TaskMediumPriority => &mut self.task_medium_priority,
            Role::TaskLowPriority => &mut self.task_low_priority,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::TASKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERALS: [(&str, &str); 6] = [
        ("primaryColor", "#1976D2"),
        ("primaryColorDark", "#0D47A1"),
        ("accentColor", "#FF9800"),
        ("taskHighPriority", "#F44336"),
        ("taskMediumPriority", "#FFA000"),
        ("taskLowPriority", "#4CAF50"),
    ];

    #[test]
    fn test_defaults_match_literals() {
        let palette = Palette::TASKS;
        for (name, lit) in LITERALS {
            let color = palette.get_by_name(name).unwrap();
            assert_eq!(color.alpha(), 0xFF, "{name}");
            let digits = hex::decode(&lit[1..]).unwrap();
            assert_eq!([color.red(), color.green(), color.blue()], digits[..], "{name}");
            assert!(color.to_rgb_hex().eq_ignore_ascii_case(lit), "{name}");
        }
    }

    #[test]
    fn test_repeated_reads_identical() {
        let first: Vec<u32> = Palette::TASKS.entries().map(|(_, c)| c.to_u32()).collect();
        let second: Vec<u32> = Palette::default().entries().map(|(_, c)| c.to_u32()).collect();
        assert_eq!(first, second);
        assert_eq!(Palette::TASKS.get(Role::Accent), Palette::TASKS.accent);
    }

    #[test]
    fn test_priority_colors_distinct() {
        let p = Palette::TASKS;
        let high = p.priority_color(Priority::High);
        let medium = p.priority_color(Priority::Medium);
        let low = p.priority_color(Priority::Low);
        assert_ne!(high, medium);
        assert_ne!(high, low);
        assert_ne!(medium, low);
        assert_eq!(high, p.task_high_priority);
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("primary"), None);
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("accentColor".to_string(), "#FF5722".to_string());
        overrides.insert("taskLowPriority".to_string(), "green".to_string());
        overrides.insert("background".to_string(), "#000000".to_string());

        let (palette, errors) = Palette::with_overrides(Palette::TASKS, &overrides);
        assert_eq!(palette.accent, Argb::from_hex_literal("#FF5722"));
        assert_eq!(palette.task_low_priority, Palette::TASKS.task_low_priority);
        assert_eq!(palette.primary, Palette::TASKS.primary);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&OverrideError::UnknownRole("background".to_string())));
        assert!(errors.contains(&OverrideError::BadColor {
            role: "taskLowPriority",
            source: ParseColorError::MissingHash,
        }));
    }
}
