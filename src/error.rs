// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `tv_remote` library.
//!
//! Device operations themselves never fail: out-of-range requests are
//! rejected through return values. These errors surface at the storage
//! and parsing edges, where they are logged and turned into defaults
//! before reaching the [`Television`](crate::Television).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing a stored record.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred while reading or writing durable storage.
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },
}

/// Errors related to parsing flat records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying CSV reader rejected the input.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The file has a header but no data row.
    #[error("record is empty")]
    EmptyRecord,

    /// Expected field is missing from the record.
    #[error("missing field in record: {0}")]
    MissingField(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to durable storage.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A store refused the write on purpose (test stores only).
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
