//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unexpected failure (I/O, config).
    pub const GENERAL: i32 = 1;

    /// Item not found in the searched container(s).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Requested more units than the matched item holds.
    pub const INSUFFICIENT_QUANTITY: i32 = 5;

    /// Peek on an empty container.
    pub const EMPTY_CONTAINER: i32 = 6;
}
