mod app;
mod args;
mod canvas;
mod logging;
mod ring_view;

use std::io;

use clap::Parser;
use color_eyre::eyre::eyre;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use lumen_config::Config;
use tracing::info;

use crate::app::App;
use crate::args::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let log_file = logging::init(&args.log_level)?;

    let path = args
        .config
        .clone()
        .or_else(Config::default_path)
        .ok_or_else(|| eyre!("no config directory on this platform; pass --config"))?;
    let mut config = Config::load_or_default(&path)?;
    args.apply(&mut config);
    config.validate()?;
    info!(config = %path.display(), log = ?log_file, "configuration loaded");

    let terminal = ratatui::init();
    if let Err(err) = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange) {
        ratatui::restore();
        return Err(err.into());
    }
    let result = App::new(config).run(terminal);
    let detached = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    result?;
    detached?;
    Ok(())
}
