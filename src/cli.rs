use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

/// Change your sound sink from command line.
#[derive(Debug, Parser)]
#[command(name = "sound-sink", version, about, long_about = None)]
pub struct Cli {
    /// Part of the sink name to switch to, matched case-insensitively
    #[arg(allow_negative_numbers = true, value_parser = NonEmptyStringValueParser::new())]
    pub device: Option<String>,

    /// List the sinks known to the audio server and exit
    #[arg(short, long)]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Exit code for a missing device token or a rejected command line.
pub const USAGE_EXIT_CODE: u8 = 1;

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Exit code for a failed parse, or `None` when clap rendered help or version.
pub fn parse_failure_code(err: &clap::Error) -> Option<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(USAGE_EXIT_CODE),
    }
}

pub fn help_text(known_devices: &[String]) -> String {
    let mut command = Cli::command().after_help(format!(
        "where DEVICE in [{}]",
        known_devices
            .iter()
            .map(|device| format!("{device:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    command.render_help().to_string()
}
