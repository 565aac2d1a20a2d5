//! Configuration file handling for lumen.
//!
//! Settings live in a TOML file in the platform config directory. Every
//! key is optional; anything missing falls back to [`Config::default`].

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lumen_core::{FieldVariant, Rgba, Theme};
use lumen_field::FieldParams;
use lumen_motion::CarouselParams;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use error::ConfigError;

/// Colour used for carousel items whose colour does not parse.
const FALLBACK_ITEM_COLOR: Rgba = Rgba::rgb(148, 163, 184);

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub variant: FieldVariant,
    /// Target frames per second.
    pub fps: u32,
    /// Fixed seed for particle placement; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub carousel: CarouselConfig,
    pub background: FieldOverrides,
    pub hero: FieldOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            variant: FieldVariant::default(),
            fps: 60,
            seed: None,
            carousel: CarouselConfig::default(),
            background: FieldOverrides::default(),
            hero: FieldOverrides::default(),
        }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Degrees per tick while auto-spinning.
    pub spin_rate: f32,
    pub idle_timeout_ms: u64,
    pub items: Vec<CarouselItem>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let defaults = CarouselParams::default();
        let items = [
            ("Rust", "#f74c00"),
            ("Ratatui", "#60a5fa"),
            ("Crossterm", "#a855f7"),
            ("Serde", "#f472b6"),
            ("TOML", "#34d399"),
            ("Clap", "#fbbf24"),
            ("Tracing", "#2496ed"),
            ("Rand", "#ff6c37"),
            ("Cargo", "#05998b"),
        ]
        .into_iter()
        .map(|(label, color)| CarouselItem {
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect();

        Self {
            spin_rate: defaults.spin_rate,
            idle_timeout_ms: defaults.idle_timeout_ms,
            items,
        }
    }
}

/// One card on the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub label: String,
    /// `#rrggbb`.
    pub color: String,
}

impl CarouselItem {
    /// Parsed colour, or a neutral grey if the value is malformed.
    pub fn rgba(&self) -> Rgba {
        Rgba::from_hex(&self.color).unwrap_or_else(|| {
            warn!(label = %self.label, color = %self.color, "unparseable carousel colour");
            FALLBACK_ITEM_COLOR
        })
    }
}

/// Per-preset overrides for the particle field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_radius: Option<f32>,
}

impl FieldOverrides {
    /// Apply the overrides that are set on top of `params`.
    pub fn apply(&self, mut params: FieldParams) -> FieldParams {
        if let Some(density) = self.density {
            params.density = density;
        }
        if let Some(max_count) = self.max_count {
            params.max_count = max_count;
        }
        if let Some(radius) = self.pointer_radius {
            params.pointer_radius = radius;
        }
        params
    }
}

impl Config {
    /// Default location: `config.toml` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory for log files.
    pub fn log_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Read and validate the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(write_err)
    }

    /// Reject values the animations cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".into()));
        }
        if self.carousel.items.is_empty() {
            return Err(ConfigError::Invalid("carousel.items must not be empty".into()));
        }
        if let Some(item) = self
            .carousel
            .items
            .iter()
            .find(|item| Rgba::from_hex(&item.color).is_none())
        {
            return Err(ConfigError::Invalid(format!(
                "carousel item {:?} has colour {:?}, expected #rrggbb",
                item.label, item.color
            )));
        }
        for (name, overrides) in [("background", &self.background), ("hero", &self.hero)] {
            if overrides.density.is_some_and(|d| d <= 0.0) {
                return Err(ConfigError::Invalid(format!("{name}.density must be positive")));
            }
            if overrides.pointer_radius.is_some_and(|r| r < 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name}.pointer_radius must not be negative"
                )));
            }
        }
        Ok(())
    }

    /// Field parameters for `variant` with this config's overrides applied.
    pub fn field_params(&self, variant: FieldVariant) -> FieldParams {
        let base = FieldParams::for_variant(variant);
        match variant {
            FieldVariant::Background => self.background.apply(base),
            FieldVariant::Hero => self.hero.apply(base),
        }
    }

    pub fn carousel_params(&self) -> CarouselParams {
        CarouselParams {
            spin_rate: self.carousel.spin_rate,
            idle_timeout_ms: self.carousel.idle_timeout_ms,
            ..CarouselParams::default()
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "lumen", "lumen")
}
