//! Opening the finished page in the platform's default viewer.
//!
//! [`Opener`] is the single capability the orchestrator depends on. The
//! production implementation, [`SystemOpener`], shells out to the platform's
//! "open with default application" command; tests substitute their own.
//!
//! Launching is best-effort: by the time it runs the output file already
//! exists, so a [`LaunchError`] is reported as a warning and never changes
//! the exit status.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{debug, instrument};

/// Why the default viewer could not be started.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Status { program: String, status: ExitStatus },
}

/// Something that can hand a file to the user's default application.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Opens files through an OS command such as `open` or `xdg-open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: String,
    leading_args: Vec<String>,
}

impl SystemOpener {
    /// Use `program`, passing `leading_args` before the file path.
    pub fn new(program: impl Into<String>, leading_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            leading_args,
        }
    }

    /// The opener for the target this binary was built for.
    ///
    /// - Windows: `cmd /C start "" <path>`
    /// - macOS: `open <path>`
    /// - everything else: `xdg-open <path>`
    pub fn for_current_platform() -> Self {
        if cfg!(target_os = "windows") {
            Self::new(
                "cmd",
                vec!["/C".to_string(), "start".to_string(), String::new()],
            )
        } else if cfg!(target_os = "macos") {
            Self::new("open", Vec::new())
        } else {
            Self::new("xdg-open", Vec::new())
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Opener for SystemOpener {
    #[instrument(level = "debug", skip_all, fields(program = %self.program, path = %path.display()))]
    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(path)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        debug!(%status, "Viewer command finished");

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Status {
                program: self.program.clone(),
                status,
            })
        }
    }
}
