// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the driver surface
//!
//! Every failure of a run reaches the caller as a [`Neo4jError`]. The kind of
//! failure is carried by its [`ErrorCode`], so callers branch on the code
//! rather than on distinct error types.
//!
//! Failures detected while constructing values locally (an out-of-range
//! time field, an unknown zone id, ...) are reported with [`ValueError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Code for a driver that cannot reach the server or cluster.
pub const SERVICE_UNAVAILABLE: &str = "ServiceUnavailable";

/// Code for a session that is no longer valid on the server.
pub const SESSION_EXPIRED: &str = "SessionExpired";

/// Code for a malformed request or response.
pub const PROTOCOL_ERROR: &str = "ProtocolError";

/// Result type alias for operations that surface a [`Neo4jError`]
pub type Result<T> = std::result::Result<T, Neo4jError>;

/// Classification code of a [`Neo4jError`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// Transport or server unreachable; retry or fail over
    ServiceUnavailable,
    /// Session no longer valid on the server; open a new session
    SessionExpired,
    /// Malformed request or response; not retriable
    ProtocolError,
    /// Code reported by the server, passed through untouched
    Server(String),
}

impl ErrorCode {
    /// The code as it appears on the wire and in the `error` constants.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::ServiceUnavailable => SERVICE_UNAVAILABLE,
            ErrorCode::SessionExpired => SESSION_EXPIRED,
            ErrorCode::ProtocolError => PROTOCOL_ERROR,
            ErrorCode::Server(code) => code,
        }
    }

    /// Classification part of a server code (`Neo.<Classification>.<Category>.<Title>`).
    pub fn classification(&self) -> Option<Classification> {
        match self {
            ErrorCode::Server(code) => code.split('.').nth(1).and_then(|c| c.parse().ok()),
            _ => None,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            SERVICE_UNAVAILABLE => ErrorCode::ServiceUnavailable,
            SESSION_EXPIRED => ErrorCode::SessionExpired,
            PROTOCOL_ERROR => ErrorCode::ProtocolError,
            other => ErrorCode::Server(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            SERVICE_UNAVAILABLE | SESSION_EXPIRED | PROTOCOL_ERROR => ErrorCode::from(code.as_str()),
            _ => ErrorCode::Server(code),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification segment of a server status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// The client sent something wrong; do not retry unchanged
    ClientError,
    /// Temporary condition; the same work may succeed later
    TransientError,
    /// The database failed; the operation may not have been applied
    DatabaseError,
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ClientError" => Ok(Classification::ClientError),
            "TransientError" => Ok(Classification::TransientError),
            "DatabaseError" => Ok(Classification::DatabaseError),
            _ => Err(format!("Unknown error classification: {}", s)),
        }
    }
}

// Transient on the wire but caused by the client, so never retried.
const CLIENT_CAUSED_TRANSIENT_CODES: [&str; 2] = [
    "Neo.TransientError.Transaction.Terminated",
    "Neo.TransientError.Transaction.LockClientStopped",
];

/// The single error kind surfaced to callers
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message} ({code})")]
pub struct Neo4jError {
    /// Human readable description
    pub message: String,
    /// Classification code
    pub code: ErrorCode,
}

impl Neo4jError {
    /// Create an error with an explicit code
    pub fn new(message: impl Into<String>, code: impl Into<ErrorCode>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(message, ErrorCode::ServiceUnavailable)
    }

    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::new(message, ErrorCode::SessionExpired)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(message, ErrorCode::ProtocolError)
    }

    /// Error carrying a code reported by the server
    pub fn server(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message, ErrorCode::from(code.into()))
    }

    /// Whether the same work may succeed when attempted again
    pub fn is_retriable(&self) -> bool {
        match &self.code {
            ErrorCode::ServiceUnavailable | ErrorCode::SessionExpired => true,
            ErrorCode::ProtocolError => false,
            ErrorCode::Server(code) => {
                self.code.classification() == Some(Classification::TransientError)
                    && !CLIENT_CAUSED_TRANSIENT_CODES.contains(&code.as_str())
            }
        }
    }
}

/// Errors raised while constructing or converting values locally
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Integer cannot be converted to a double without losing precision
    #[error("Integer {0} is outside the safe range of a 64-bit float")]
    OutOfSafeRange(i64),

    /// Malformed integer text
    #[error("Invalid integer '{value}' for radix {radix}")]
    InvalidInteger { value: String, radix: u32 },

    /// Radix outside 2..=36
    #[error("Radix {0} out of range, expected 2..=36")]
    InvalidRadix(u32),

    /// A numeric component that must be whole was fractional or not finite
    #[error("{field} must be an integral number, got {value}")]
    NonIntegral { field: &'static str, value: String },

    /// A temporal or spatial field outside its allowed range
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        expected: &'static str,
    },

    /// Year, month and day do not form a calendar date
    #[error("Invalid date {year}-{month}-{day}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Zone id not in the IANA time zone database
    #[error("Unknown time zone id: {0}")]
    UnknownZone(String),

    /// Local date time does not exist in the zone (skipped by a DST gap)
    #[error("Local date time {local} does not exist in zone {zone}")]
    NonexistentLocalTime { local: String, zone: String },

    /// Explicit point dimension does not match the coordinates given
    #[error("Point dimension {dimension} does not match {coordinates} coordinates")]
    DimensionMismatch { dimension: usize, coordinates: usize },

    /// Keys and values of a record differ in length
    #[error("Record has {keys} keys but {values} values")]
    FieldCountMismatch { keys: usize, values: usize },

    /// Connection URL cannot be used
    #[error("Invalid connection URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
