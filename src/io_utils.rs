use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 text with one word per line.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn seedroll_cli_error(context: &str, err: crate::SeedrollError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::SeedrollError) -> String {
    use crate::SeedrollError::*;
    match err {
        EmptyResource | WrongWordCount { .. } | DuplicateWord { .. } => {
            format!("{err}. The wordlist must hold 2048 distinct words, one per line.")
        }
        IndexOutOfRange { max, .. } => {
            format!("{err}. Use an index from 0 to {}.", max.saturating_sub(1))
        }
        InvalidRollSum(_) => {
            format!("{err}. Each roll value must be a power of two from 1 to 1024.")
        }
        DuplicateRoll(_) => format!("{err}. Report each roll value once."),
        EmptyTally => format!("{err}. Pass at least one roll value."),
        UnknownWord(_) => format!("{err}. Check the spelling against the BIP39 English list."),
        Csv(_) | Io(_) => err.to_string(),
    }
}
