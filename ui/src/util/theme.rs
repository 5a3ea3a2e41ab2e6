//! Color themes for metric cards.
//!
//! DESIGN
//! ======
//! A theme is a closed tag mapped to four CSS class roles. Lookup by name is
//! total: any name outside the table resolves to `Blue`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

/// Named color palette for a `StatCard`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ColorTheme {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
}

/// CSS classes for the four style roles a theme tints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
}

const BLUE: Palette = Palette {
    background: "tone-blue-surface",
    border: "tone-blue-border",
    icon: "tone-blue-icon",
    value: "tone-blue-value",
};

const GREEN: Palette = Palette {
    background: "tone-green-surface",
    border: "tone-green-border",
    icon: "tone-green-icon",
    value: "tone-green-value",
};

const YELLOW: Palette = Palette {
    background: "tone-yellow-surface",
    border: "tone-yellow-border",
    icon: "tone-yellow-icon",
    value: "tone-yellow-value",
};

const RED: Palette = Palette {
    background: "tone-red-surface",
    border: "tone-red-border",
    icon: "tone-red-icon",
    value: "tone-red-value",
};

impl ColorTheme {
    /// Resolve a theme by name. Unknown names resolve to `Blue`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => Self::Blue,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "red" => Self::Red,
            _other => {
                #[cfg(feature = "hydrate")]
                log::debug!("unknown color theme {_other:?}; using blue");
                Self::Blue
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Blue => BLUE,
            Self::Green => GREEN,
            Self::Yellow => YELLOW,
            Self::Red => RED,
        }
    }
}

impl From<&str> for ColorTheme {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ColorTheme {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
