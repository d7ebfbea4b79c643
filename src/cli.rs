mod cli_model;
mod config;

pub use config::Config;

use crate::log_utils::{init_log, LogLevel};

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();

    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .expect("Missing default log level");
    init_log(level)?;

    Config::from_matches(&m)
}
