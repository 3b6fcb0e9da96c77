//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum OptionQError {
    /// No option can be selected in a non-terminal state.
    ///
    /// This indicates a malformed environment, not a recoverable condition.
    #[error("No options are available in non-terminal state {state}")]
    NoAvailableOptions {
        /// Debug representation of the state.
        state: String,
    },

    /// An option returned a termination probability outside `[0, 1]`.
    #[error("Termination probability {value} of option {option} is out of [0, 1]")]
    TerminationOutOfRange {
        /// Debug representation of the option id.
        option: String,
        /// The returned probability.
        value: f64,
    },

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
