use std::io::Write;

use log::{debug, info};

use crate::adapters::SinkBackend;
use crate::cli::{help_text, Cli, USAGE_EXIT_CODE};
use crate::config::SinkConfig;
use crate::core::{find_sink, parse_sinks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Switched { index: u32 },
    Listed,
    MissingDevice,
    UnknownDevice,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Switched { .. } | Outcome::Listed => 0,
            Outcome::MissingDevice => USAGE_EXIT_CODE,
            Outcome::UnknownDevice => 2,
        }
    }
}

/// Exit code for errors raised by the control program or the listing parser.
pub const FAILURE_EXIT_CODE: u8 = 3;

/// Reports a failed run on stderr and picks the process exit code.
pub fn exit_code(result: anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            debug!("{err:?}");
            eprintln!("error: {err:#}");
            FAILURE_EXIT_CODE
        }
    }
}

pub fn run(
    cli: &Cli,
    config: &SinkConfig,
    backend: &impl SinkBackend,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    if cli.list {
        let sinks = parse_sinks(&backend.list_sinks_text()?)?;
        for sink in &sinks {
            writeln!(out, "{}", sink.display_line())?;
        }
        return Ok(Outcome::Listed);
    }

    let Some(device) = cli.device.as_deref() else {
        writeln!(out, "{}", help_text(&config.known_devices))?;
        return Ok(Outcome::MissingDevice);
    };

    let listing = backend.list_sinks_text()?;
    let sinks = parse_sinks(&listing)?;
    debug!("parsed {} sink(s)", sinks.len());

    let Some(sink) = find_sink(&sinks, device) else {
        info!("no sink name contains {device:?}");
        writeln!(out, "Device {device} unknown")?;
        writeln!(out, "known devices :")?;
        writeln!(out, "{listing}")?;
        writeln!(out, "{}", help_text(&config.known_devices))?;
        return Ok(Outcome::UnknownDevice);
    };

    writeln!(out, "Found sink {device}, index {}", sink.index)?;
    let diagnostics = backend.set_default_sink(sink.index)?;
    if !diagnostics.trim().is_empty() {
        writeln!(out, "{}", diagnostics.trim_end())?;
    }
    writeln!(out, "Changed sink to {device}, index {}", sink.index)?;

    Ok(Outcome::Switched { index: sink.index })
}
