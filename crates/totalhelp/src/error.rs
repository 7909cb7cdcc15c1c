//! Error types for totalhelp.
//!
//! Only invalid caller input is reported here. Problems with individual
//! child processes (not found, timeouts, non-zero exits) become placeholder
//! nodes during discovery and never surface as errors.

use std::io;

/// Errors returned by rendering and the `full_help*` entry points.
#[derive(Debug, thiserror::Error)]
pub enum TotalHelpError {
    /// The requested output format is not one of `text`, `md` or `html`.
    #[error("Invalid format '{0}'. Must be one of [\"text\", \"md\", \"html\"]")]
    InvalidFormat(String),

    /// External discovery was asked to probe an empty command line.
    #[error("No command given to probe")]
    EmptyCommand,

    /// The HTML page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Writing a rendered document failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = TotalHelpError::InvalidFormat("pdf".into());
        assert_eq!(
            err.to_string(),
            "Invalid format 'pdf'. Must be one of [\"text\", \"md\", \"html\"]"
        );
    }
}
