//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in tabsplit                               │
//! │                                                                         │
//! │  Command Function ── Result<T, CliError>                                │
//! │         │                                                               │
//! │         ├── Config error?  ── ConfigError ──────────┐                   │
//! │         ├── Bad id?        ── ParticipantNotFound ──┤                   │
//! │         ├── Bad file?      ── Io / Json ────────────┼──► exit code      │
//! │         └── Nothing to do? ── NothingToCalculate ───┘    + message      │
//! │                                                           on stderr     │
//! │                                                                         │
//! │  Inside a session, errors are printed and the session keeps going.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::state::ConfigError;

// =============================================================================
// Exit Codes
// =============================================================================

/// Success.
pub const EXIT_SUCCESS: u8 = 0;

/// General error (I/O, unexpected failure).
pub const EXIT_ERROR: u8 = 1;

/// Usage error: bad arguments, bad input file, bad config.
pub const EXIT_USAGE: u8 = 2;

/// Input was readable but there is nothing to split (no bill or no people).
pub const EXIT_NOTHING_TO_CALCULATE: u8 = 3;

// =============================================================================
// CLI Error
// =============================================================================

/// Errors surfaced to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// No roster entry matches the id.
    #[error("No participant with id {0}")]
    ParticipantNotFound(String),

    /// Several roster entries match an id prefix.
    #[error("Id {0} matches more than one participant; type more of it")]
    AmbiguousId(String),

    /// Id prefix too short to look up.
    #[error("Id {0} is too short; use at least {min} characters", min = crate::state::MIN_ID_PREFIX)]
    InvalidId(String),

    /// A session line could not be understood.
    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    /// A session command was missing an argument.
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A `--person` flag could not be parsed.
    #[error("Invalid participant '{0}'; expected NAME[:PAID[:PERSONAL]]")]
    InvalidParticipant(String),

    /// Bill missing/non-positive or no participants.
    #[error("{}", crate::render::NO_RESULT_PROMPT)]
    NothingToCalculate,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NothingToCalculate => EXIT_NOTHING_TO_CALCULATE,
            CliError::Io(_) => EXIT_ERROR,
            _ => EXIT_USAGE,
        }
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
