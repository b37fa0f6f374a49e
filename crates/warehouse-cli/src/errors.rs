//! CLI error types for structured error handling.
//!
//! Core errors travel through `anyhow` unchanged; this module maps them,
//! along with CLI-specific input errors, to exit codes and hints.

use std::fmt;

use warehouse_core::WarehouseError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input (item name, quantity, format)
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a failed command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<WarehouseError>() {
        Some(WarehouseError::ItemNotFound { .. }) => exit_codes::NOT_FOUND,
        Some(WarehouseError::InsufficientQuantity { .. }) => exit_codes::INSUFFICIENT_QUANTITY,
        Some(WarehouseError::EmptyContainer(_)) => exit_codes::EMPTY_CONTAINER,
        Some(WarehouseError::InvalidQuantity) => exit_codes::INVALID_INPUT,
        Some(WarehouseError::Storage(_)) | None => exit_codes::GENERAL,
    }
}

/// Contextual hint for a failed command, if one applies.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<WarehouseError>()? {
        WarehouseError::ItemNotFound { .. } => Some("Run `warehouse view` to list items."),
        WarehouseError::InsufficientQuantity { .. } => {
            Some("Run `warehouse search <NAME>` to check the available quantity.")
        }
        WarehouseError::EmptyContainer(_) => {
            Some("Run `warehouse add <NAME> <QTY>` to receive stock.")
        }
        WarehouseError::InvalidQuantity | WarehouseError::Storage(_) => None,
    }
}
