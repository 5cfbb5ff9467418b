use std::io::ErrorKind;
use std::process::{Command, Output};

use anyhow::Context;
use log::{debug, info, warn};

use crate::adapters::SinkBackend;
use crate::core::sinks::filter_listing;
use crate::error::SinkError;

#[derive(Debug, Clone)]
pub struct PacmdAdapter {
    program: String,
}

impl PacmdAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        debug!("running `{} {}`", self.program, args.join(" "));
        match Command::new(&self.program).args(args).output() {
            Ok(output) => Ok(output),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(SinkError::CommandUnavailable {
                program: self.program.clone(),
            }
            .into()),
            Err(err) => Err(err).with_context(|| {
                format!("failed to run `{} {}`", self.program, args.join(" "))
            }),
        }
    }
}

impl SinkBackend for PacmdAdapter {
    fn list_sinks_text(&self) -> anyhow::Result<String> {
        let output = self.run(&["list-sinks"])?;
        if !output.status.success() {
            warn!(
                "`{} list-sinks` exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(filter_listing(&stdout))
    }

    fn set_default_sink(&self, index: u32) -> anyhow::Result<String> {
        let index_arg = index.to_string();
        let output = self.run(&["set-default-sink", &index_arg])?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(SinkError::SwitchFailed {
                index,
                status: output.status,
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        info!("default sink set to index {index}");
        Ok(stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::PacmdAdapter;
    use crate::adapters::SinkBackend;
    use crate::error::SinkError;

    #[test]
    fn missing_program_is_reported_as_unavailable() {
        let adapter = PacmdAdapter::new("sound-sink-test-no-such-program");
        let err = adapter.list_sinks_text().unwrap_err();
        match err.downcast_ref::<SinkError>() {
            Some(SinkError::CommandUnavailable { program }) => {
                assert_eq!(program, "sound-sink-test-no-such-program")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
