//! Command-line interface definitions and argument resolution.
//!
//! [`Cli`] is the raw `clap` surface. [`Cli::resolve`] turns it into
//! [`Settings`], fixing up file extensions along the way and reporting each
//! fix as a [`Normalization`] so the caller can warn about it.

use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # One article: reads story.txt, writes output.html
/// onion_summary story
///
/// # Three articles: reads article0.txt, article1.txt, article2.txt
/// onion_summary article -c 3 -o digest.html
///
/// # Write the page without opening a viewer
/// onion_summary story --no-open
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input TXT file base name. If using multiple input files, do not include the number at the end.
    pub base_input: String,

    /// Output file path
    #[arg(short, long, default_value = "output.html")]
    pub output: String,

    /// Number of files to process. If using multiple input files, do not include the number at the end.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Optional path to a config.yaml file
    #[arg(long, env = "ONION_SUMMARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the page but do not open it in the default viewer
    #[arg(long, env = "ONION_SUMMARY_NO_OPEN")]
    pub no_open: bool,
}

/// Resolved, immutable run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Input file stem, without extension or index number.
    pub base_input: String,
    /// Where the HTML page is written.
    pub output_path: PathBuf,
    /// Number of articles to merge, at least 1.
    pub count: u32,
    /// Whether to hand the page to the default viewer afterwards.
    pub open: bool,
}

/// A correction applied to a user-supplied argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalization {
    /// The base input name carried an extension, which was removed.
    StrippedInputExtension { extension: String },
    /// The output path had no extension, so `.html` was appended.
    AddedOutputExtension,
    /// The output path ends in something other than `.html`; kept as given.
    UnexpectedOutputExtension { extension: String },
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalization::StrippedInputExtension { extension } => {
                write!(f, "Stripping input extension .{extension}...")
            }
            Normalization::AddedOutputExtension => {
                write!(f, "Normalising output by adding .html extension...")
            }
            Normalization::UnexpectedOutputExtension { extension } => {
                write!(f, "Unexpected file type .{extension}. Proceed with caution.")
            }
        }
    }
}

impl Cli {
    /// Normalize the raw arguments into [`Settings`].
    ///
    /// The returned notes are in the order the corrections were made
    /// (output path first, then base input).
    pub fn resolve(self) -> (Settings, Vec<Normalization>) {
        let mut notes = Vec::new();

        let (output_path, note) = normalize_output_path(&self.output);
        notes.extend(note);
        let (base_input, note) = normalize_base_input(&self.base_input);
        notes.extend(note);

        let settings = Settings {
            base_input,
            output_path: PathBuf::from(output_path),
            count: self.count,
            open: !self.no_open,
        };
        (settings, notes)
    }
}

/// Lowercased extension of the final path component, if any.
fn extension_of(raw: &str) -> Option<String> {
    Path::new(raw)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Append `.html` when no extension was given; flag any other extension.
pub fn normalize_output_path(raw: &str) -> (String, Option<Normalization>) {
    match extension_of(raw) {
        None => (format!("{raw}.html"), Some(Normalization::AddedOutputExtension)),
        Some(ext) if ext == "html" => (raw.to_string(), None),
        Some(extension) => (
            raw.to_string(),
            Some(Normalization::UnexpectedOutputExtension { extension }),
        ),
    }
}

/// Strip a trailing extension from the base input name.
///
/// The stem keeps its case (`Story.TXT` becomes `Story`) so it still names
/// the file on case-sensitive filesystems.
pub fn normalize_base_input(raw: &str) -> (String, Option<Normalization>) {
    match extension_of(raw) {
        None => (raw.to_string(), None),
        Some(extension) => (
            Path::new(raw)
                .with_extension("")
                .to_string_lossy()
                .into_owned(),
            Some(Normalization::StrippedInputExtension { extension }),
        ),
    }
}
