use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("`{program}` is not installed or not on PATH")]
    CommandUnavailable { program: String },

    #[error("malformed sink index in line: {line:?}")]
    MalformedIndex { line: String },

    #[error("`set-default-sink {index}` exited with {status}: {stderr}")]
    SwitchFailed {
        index: u32,
        status: ExitStatus,
        stderr: String,
    },
}
