//! Acquisition of the taint status value from the kernel.
//!
//! The kernel exposes the taint bitmask as a single line of ASCII decimal
//! digits in [`TAINT_STATUS_FILE`]. Reading it is the only fallible part
//! of the program; [`parse_taint_value`] is kept separate so tests can
//! feed arbitrary byte content without a file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Well-known file exposing the kernel taint bitmask.
pub const TAINT_STATUS_FILE: &str = "/proc/sys/kernel/tainted";

/// The taint file holds one short decimal line; anything past this is not
/// a valid status anyway.
const READ_LIMIT: u64 = 64;

/// Content that does not parse as a single unsigned 64-bit decimal integer.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a single unsigned 64-bit decimal integer")]
pub struct ParseTaintError;

/// Failure to obtain the taint status from the source file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file is missing or could not be opened.
    #[error("cannot open input file \"{}\": {source}", .path.display())]
    Unavailable {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source file was opened but reading from it failed.
    #[error("cannot read taint status from input file \"{}\": {source}", .path.display())]
    Unreadable {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source file content is not an unsigned 64-bit decimal integer.
    #[error("input file \"{}\" contains unparsable data", .path.display())]
    Malformed {
        /// Path of the source file.
        path: PathBuf,
    },

    /// An allocation failed while acquiring the status.
    #[error("out of memory")]
    OutOfMemory,
}

/// Parse raw taint-source content as an unsigned 64-bit decimal integer.
///
/// Trailing whitespace (the newline the kernel appends) is ignored.
///
/// # Errors
///
/// Returns [`ParseTaintError`] when the content is empty, contains a
/// non-digit character, or overflows `u64`.
pub fn parse_taint_value(raw: &str) -> Result<u64, ParseTaintError> {
    let digits = raw.trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTaintError);
    }
    digits.parse::<u64>().map_err(|_| ParseTaintError)
}

/// Read and parse the taint status from `path`.
///
/// The file handle is scoped to this call and released on every path.
///
/// # Errors
///
/// Returns [`SourceError::Unavailable`] when the file cannot be opened,
/// [`SourceError::Unreadable`] on an I/O failure mid-read,
/// [`SourceError::Malformed`] when the content is not a valid unsigned
/// decimal, and [`SourceError::OutOfMemory`] when the underlying I/O
/// reports an allocation failure.
pub fn read_taint_status(path: &Path) -> Result<u64, SourceError> {
    debug!(path = %path.display(), "reading taint status");

    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::OutOfMemory {
            SourceError::OutOfMemory
        } else {
            SourceError::Unavailable {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })?;

    let mut buf = Vec::new();
    file.take(READ_LIMIT)
        .read_to_end(&mut buf)
        .map_err(|err| {
            if err.kind() == io::ErrorKind::OutOfMemory {
                SourceError::OutOfMemory
            } else {
                SourceError::Unreadable {
                    path: path.to_path_buf(),
                    source: err,
                }
            }
        })?;

    let raw = String::from_utf8(buf).map_err(|_| SourceError::Malformed {
        path: path.to_path_buf(),
    })?;

    let status = parse_taint_value(&raw).map_err(|_| SourceError::Malformed {
        path: path.to_path_buf(),
    })?;

    debug!(status, "taint status read");
    Ok(status)
}
