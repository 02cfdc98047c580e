// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Lookup misses and already-present favorites are normal outcomes, not
//! errors; see [`crate::services::AddOutcome`]. Errors here are the terminal
//! failures: anything the database client reports during the query or the
//! write.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Result type alias for the updater and database layer
pub type Result<T> = std::result::Result<T, AppError>;
