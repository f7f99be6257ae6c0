//! Terminal client: flags, logging, configuration, connection and the
//! interactive session. Everything that touches stdout, stderr or the exit
//! code lives under this module.

mod logging;
mod render;
mod setup;
mod styles;
mod terminal;

use clap::Parser;
use directories::ProjectDirs;
use emptrack::api::TrackerApi;
use emptrack::config::TrackerConfig;
use emptrack::error::{Result, TrackerError};
use emptrack::menu;
use emptrack::store::mysql::MySqlStore;
use setup::Cli;
use std::path::PathBuf;
use terminal::TermPrompter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_dir = config_dir(cli.config)?;
    let config = TrackerConfig::load(&config_dir)?.with_env_overrides()?;
    tracing::debug!(dir = %config_dir.display(), ?config, "configuration loaded");

    let store = MySqlStore::connect(&config)?;
    let mut api = TrackerApi::new(store);
    let mut ui = TermPrompter::new();

    ui.banner()?;
    let session = menu::run(&mut api, &mut ui);
    ui.restore();

    let closed = api.into_store().close();
    session.and(closed)
}

/// `--config` (or `EMPTRACK_CONFIG_DIR`), else the platform config directory.
fn config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("com", "emptrack", "emptrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            TrackerError::Config("could not determine a config directory; pass --config".into())
        })
}
