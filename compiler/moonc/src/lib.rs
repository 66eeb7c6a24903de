//! Moon lexer driver.
//!
//! `moonc <file>` lexes one source file and prints its diagnostics followed
//! by one line per token.

pub mod render;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Fatal driver errors. Each one ends the process with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("expected 1 file")]
    Usage,
    #[error("couldn't open file")]
    Open { path: PathBuf, source: io::Error },
    /// The source exceeds the 32-bit span range.
    #[error("file too large ({len} bytes, limit {})", u32::MAX)]
    TooLarge { path: PathBuf, len: u64 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run the driver on the arguments that follow the program name.
///
/// Lexical diagnostics are not fatal: they are written to `out` ahead of
/// the token dump and the call still returns `Ok`.
pub fn run<I>(args: I, out: &mut impl Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let path = match (args.next(), args.next()) {
        (Some(path), None) => PathBuf::from(path),
        _ => return Err(CliError::Usage),
    };

    let source = read_file(path)?;
    let output = moon_lexer::lex(&source);

    for error in &output.errors {
        render::write_error(out, error)?;
    }
    for token in &output.tokens {
        render::write_token(out, token)?;
    }
    Ok(())
}

fn read_file(path: PathBuf) -> Result<Vec<u8>, CliError> {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => {
            debug!(path = %path.display(), error = %source, "couldn't open file");
            return Err(CliError::Open { path, source });
        }
    };
    check_size(&path, u64::try_from(bytes.len()).unwrap_or(u64::MAX))?;
    debug!(path = %path.display(), len = bytes.len(), "read source");
    Ok(bytes)
}

fn check_size(path: &Path, len: u64) -> Result<(), CliError> {
    if len > u64::from(u32::MAX) {
        debug!(path = %path.display(), len, "source too large");
        return Err(CliError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }
    Ok(())
}
