// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the combinatorial generators and the Kostka engine.
//!
//! All errors are raised at the boundary of a call, before any enumeration
//! starts. Infeasible requests (e.g. more parts than the integer allows) are
//! not errors: they produce an empty iterator or the zero polynomial.

use thiserror::Error;

/// Main error type for partition, tableau and Kostka operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatoricsError {
    /// An argument violates a precondition of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sequence that was supposed to be a partition is not one.
    #[error("Invalid partition: {0}")]
    InvalidPartition(String),

    /// A tableau has rows that do not form a partition shape.
    #[error("Invalid tableau: {0}")]
    InvalidTableau(String),

    /// A ring element had to be inverted but is not a unit.
    #[error("Not invertible: {0}")]
    NotInvertible(String),
}

/// Result type alias for combinatorics operations.
pub type Result<T> = std::result::Result<T, CombinatoricsError>;
