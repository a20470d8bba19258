//! Lexical sort of observation files
//!
//! The system `sort` utility is run with `LC_ALL=C` so lines compare byte by
//! byte, which for `YYYY-MM-DDTHH:MM` prefixes is chronological order. It
//! sorts files larger than memory by spilling to disk itself.

use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::constants::{SORT_PROGRAM, SORTED_FILE_SUFFIX};
use crate::{Error, Result};

/// Sort `input` into a temporary file beside it
///
/// The temporary file is deleted when the returned handle is dropped.
pub fn sort_observation_file(input: &Path) -> Result<NamedTempFile> {
    if !input.is_file() {
        return Err(Error::io(
            format!("Observation file not found: {}", input.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ));
    }

    let directory = input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = input
        .file_name()
        .map(|name| format!("{}.", name.to_string_lossy()))
        .unwrap_or_default();

    let sorted = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(SORTED_FILE_SUFFIX)
        .tempfile_in(directory)
        .map_err(|e| {
            Error::io(
                format!("Failed to create sorted file in {}", directory.display()),
                e,
            )
        })?;

    debug!(
        "Sorting {} into {}",
        input.display(),
        sorted.path().display()
    );

    let output = Command::new(SORT_PROGRAM)
        .env("LC_ALL", "C")
        .arg("-o")
        .arg(sorted.path())
        .arg(input)
        .output()
        .map_err(|e| Error::io(format!("Failed to run '{}'", SORT_PROGRAM), e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::sort_failed(format!(
            "'{}' exited with {}: {}",
            SORT_PROGRAM,
            output.status,
            stderr.trim()
        )));
    }

    Ok(sorted)
}
