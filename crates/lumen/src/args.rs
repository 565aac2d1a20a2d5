use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lumen_config::Config;
use lumen_core::{FieldVariant, Theme};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
/// An interactive particle backdrop and tech-stack carousel for the terminal
pub struct Args {
    /// Colour theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Which particle field to start with
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,
    /// Seed for reproducible particle placement
    #[arg(long)]
    pub seed: Option<u64>,
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. "info" or "lumen_field=debug". RUST_LOG wins if set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Background,
    Hero,
}

impl From<VariantArg> for FieldVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Background => FieldVariant::Background,
            VariantArg::Hero => FieldVariant::Hero,
        }
    }
}

impl Args {
    /// Overlay command-line values on a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme.into();
        }
        if let Some(variant) = self.variant {
            config.variant = variant.into();
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "lumen", "--theme", "light", "--variant", "hero", "--fps", "30", "--seed", "9",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.variant, FieldVariant::Hero);
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let args = Args::parse_from(["lumen"]);
        let mut config = Config::default();
        config.seed = Some(3);
        args.apply(&mut config);

        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.seed, Some(3));
        assert_eq!(args.log_level, "info");
    }
}
