//! Display options shared across crates.

use serde::{Deserialize, Serialize};

/// Light or dark appearance. Only ever selects colour constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Toggle between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Which flavour of particle field to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Full-screen backdrop: anchored twinkling dust, orbs and a grid.
    #[default]
    Background,
    /// Hero backdrop: drifting particles joined by faint links.
    Hero,
}

impl FieldVariant {
    /// Cycle to the next variant.
    pub fn next(self) -> Self {
        match self {
            FieldVariant::Background => FieldVariant::Hero,
            FieldVariant::Hero => FieldVariant::Background,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldVariant::Background => "background",
            FieldVariant::Hero => "hero",
        }
    }
}
