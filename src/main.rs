mod adapters;
mod app;
mod cli;
mod config;
mod core;
mod error;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};

use crate::adapters::pacmd::PacmdAdapter;
use crate::cli::{parse_failure_code, Cli};
use crate::config::{ConfigStore, SinkConfig};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match parse_failure_code(&err) {
            Some(code) => {
                let _ = err.print();
                return ExitCode::from(code);
            }
            None => err.exit(),
        },
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let config = load_config();
    let backend = PacmdAdapter::new(config.control_program.clone());
    debug!("using control program `{}`", backend.program());
    let mut stdout = std::io::stdout().lock();

    ExitCode::from(app::exit_code(app::run(&cli, &config, &backend, &mut stdout)))
}

fn load_config() -> SinkConfig {
    match ConfigStore::new() {
        Ok(store) => store.load_or_default(),
        Err(err) => {
            warn!("ignoring config: {err:#}");
            SinkConfig::default()
        }
    }
}
