use super::{PostProcessError, PostProcessor, ToolStatus};
use std::io;
use std::process::{Command, Stdio};

pub const DEFAULT_PROGRAM: &str = "convert";

/// Shells out to ImageMagick (or any program taking the same arguments).
#[derive(Debug, Clone)]
pub struct ImageMagick {
    program: String,
}

impl ImageMagick {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ImageMagick {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl PostProcessor for ImageMagick {
    fn program(&self) -> &str {
        &self.program
    }

    /// Runs the program without arguments. Any exit status counts as
    /// installed (`convert` exits non-zero when given no files).
    fn probe(&mut self) -> ToolStatus {
        let status = Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(_) => ToolStatus::Available,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ToolStatus::Missing,
            Err(e) => {
                log::warn!("Failed to start '{}': {e}", self.program);
                ToolStatus::Unusable(e.to_string())
            }
        }
    }

    fn run(&mut self, args: &[String]) -> Result<(), PostProcessError> {
        log::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    PostProcessError::ToolMissing(self.program.clone())
                } else {
                    PostProcessError::Failed {
                        program: self.program.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => format!("{}: {msg}", output.status),
            };
            return Err(PostProcessError::Failed {
                program: self.program.clone(),
                reason,
            });
        }

        Ok(())
    }
}
