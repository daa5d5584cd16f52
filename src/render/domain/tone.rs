//! Badge tones and their per-theme palettes.

use crate::{contributor::domain::Classification, shell::domain::Theme, task::domain::TaskPriority};
use serde::Serialize;

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    /// Purple.
    Purple,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
}

impl BadgeTone {
    /// Returns the tone of a contributor classification badge.
    #[must_use]
    pub const fn for_classification(classification: Classification) -> Self {
        match classification {
            Classification::Maintainer => Self::Purple,
            Classification::Core => Self::Blue,
            Classification::Regular => Self::Green,
            Classification::Newcomer => Self::Orange,
        }
    }

    /// Returns the tone of a task priority badge.
    #[must_use]
    pub const fn for_priority(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::High => Self::Red,
            TaskPriority::Medium => Self::Yellow,
            TaskPriority::Low => Self::Green,
        }
    }

    /// Returns the colour name.
    #[must_use]
    pub const fn hue(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    /// Returns the background and text shades for `theme`.
    #[must_use]
    pub const fn palette(self, theme: Theme) -> Palette {
        let (background, foreground) = match theme {
            Theme::Light => (100, 800),
            Theme::Dark => (900, 200),
        };
        Palette {
            hue: self.hue(),
            background,
            foreground,
        }
    }
}

impl From<Classification> for BadgeTone {
    fn from(value: Classification) -> Self {
        Self::for_classification(value)
    }
}

impl From<TaskPriority> for BadgeTone {
    fn from(value: TaskPriority) -> Self {
        Self::for_priority(value)
    }
}

/// Background and text colour pair of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    hue: &'static str,
    background: u16,
    foreground: u16,
}

impl Palette {
    /// Returns the background colour, such as `bg-purple-100`.
    #[must_use]
    pub fn background(&self) -> String {
        format!("bg-{}-{}", self.hue, self.background)
    }

    /// Returns the text colour, such as `text-purple-800`.
    #[must_use]
    pub fn foreground(&self) -> String {
        format!("text-{}-{}", self.hue, self.foreground)
    }

    /// Returns both colours separated by a space.
    #[must_use]
    pub fn classes(&self) -> String {
        format!("{} {}", self.background(), self.foreground())
    }
}
