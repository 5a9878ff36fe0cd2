pub mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use atomicwrites::{AtomicFile, OverwriteBehavior};
use thiserror::Error;

pub use report::{render_html, ReportOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    None
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory: {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: atomicwrites::Error<std::io::Error>,
    },
}

/// Writes the whole document through a uniquely named temporary file that
/// replaces `dest` only once complete.
pub fn write_output(dest: &Path, contents: &str) -> Result<(), OutputError> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    AtomicFile::new(dest, OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            f.write_all(contents.as_bytes())?;
            f.flush()
        })
        .map_err(|source| OutputError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
    log::debug!("wrote {} bytes to {}", contents.len(), dest.display());
    Ok(())
}
