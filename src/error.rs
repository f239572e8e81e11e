//! Fatal error conditions.
//!
//! Every variant here ends the run: `main` prints it and exits with a failure
//! status. Failing to open the finished page in a viewer is not an [`Error`];
//! see [`crate::launcher::LaunchError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// An article file is missing or unreadable.
    #[error("could not read article '{}'", path.display())]
    ReadArticle {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An article file has no header line at all.
    #[error("article '{}' is empty; expected a header line", path.display())]
    EmptyArticle { path: PathBuf },

    /// The document tree could not be rendered to bytes.
    #[error("could not serialize HTML document")]
    Serialize(#[source] io::Error),

    /// The output file could not be created or written.
    #[error("could not write output file '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file named on the command line could not be read.
    #[error("could not read config file '{}'", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::config::Config`].
    #[error("invalid config file '{}'", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
