use std::fmt;

use serde::{Deserialize, Serialize};

/// Period-over-period movement of a dashboard metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stable,
}

impl Direction {
    pub fn from_percent(change: i64) -> Self {
        match change {
            c if c > 0 => Direction::Up,
            c if c < 0 => Direction::Down,
            _ => Direction::Stable,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Visual treatment of a metric badge in the rendered dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BadgeStyle {
    Positive,
    Negative,
    Neutral,
}

impl BadgeStyle {
    /// Resolves a free-form state tag to a style. Unknown tags land on the
    /// explicit `Neutral` branch rather than an implicit fallthrough.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "up" | "positive" => BadgeStyle::Positive,
            "down" | "negative" => BadgeStyle::Negative,
            "stable" | "neutral" => BadgeStyle::Neutral,
            _ => BadgeStyle::Neutral,
        }
    }
}

impl From<Direction> for BadgeStyle {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => BadgeStyle::Positive,
            Direction::Down => BadgeStyle::Negative,
            Direction::Stable => BadgeStyle::Neutral,
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BadgeStyle::Positive => "positive",
            BadgeStyle::Negative => "negative",
            BadgeStyle::Neutral => "neutral",
        };
        f.write_str(label)
    }
}
