//! Task priority levels and their badge colors

use crate::color::Argb;

use super::palette::Role;

/// Task priority as stored on a task: 1 = low, 2 = medium, 3 = high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Badge display order, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Any level other than 1 or 3 renders as medium.
    pub const fn from_level(level: i32) -> Self {
        match level {
            1 => Priority::Low,
            3 => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub const fn level(self) -> i32 {
        self as i32
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub const fn role(self) -> Role {
        match self {
            Priority::Low => Role::TaskLowPriority,
            Priority::Medium => Role::TaskMediumPriority,
            Priority::High => Role::TaskHighPriority,
        }
    }

    /// Text color on the badge. Black reads better on the amber medium badge.
    pub const fn badge_text_color(self) -> Argb {
        match self {
            Priority::Medium => Argb::BLACK,
            Priority::Low | Priority::High => Argb::WHITE,
        }
    }
}
