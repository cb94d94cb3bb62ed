//! Unified error codes for the seating service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Settings errors
//! - 2xxx: Table errors
//! - 3xxx: Queue errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can branch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Settings ====================
    /// No settings have been provisioned yet
    SettingsNotConfigured = 1001,
    /// Settings id does not match the stored record
    SettingsNotFound = 1002,
    /// Tables or chairs per table not positive
    InvalidSettings = 1003,

    // ==================== 2xxx: Table ====================
    /// Table identifier is not part of the configured set
    TableNotFound = 2001,
    /// Table is already in the free pool
    TableAlreadyFree = 2002,
    /// Table is occupied and cannot be assigned
    TableNotFree = 2003,
    /// Headcount not positive
    InvalidHeadcount = 2101,

    // ==================== 3xxx: Queue ====================
    /// Queue number is not waiting
    QueueTicketNotFound = 3001,

    // ==================== 9xxx: System ====================
    /// Storage error
    StorageError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Settings
            ErrorCode::SettingsNotConfigured => "Settings not configured",
            ErrorCode::SettingsNotFound => "Settings not found",
            ErrorCode::InvalidSettings => "Tables or chairs per table must be at least one!",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableAlreadyFree => "Table is already free",
            ErrorCode::TableNotFree => "Table is not free",
            ErrorCode::InvalidHeadcount => "Headcount must be at least one person!",

            // Queue
            ErrorCode::QueueTicketNotFound => "Queue number not found",

            // System
            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 is not a known error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Settings
            1001 => Ok(ErrorCode::SettingsNotConfigured),
            1002 => Ok(ErrorCode::SettingsNotFound),
            1003 => Ok(ErrorCode::InvalidSettings),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableAlreadyFree),
            2003 => Ok(ErrorCode::TableNotFree),
            2101 => Ok(ErrorCode::InvalidHeadcount),

            // Queue
            3001 => Ok(ErrorCode::QueueTicketNotFound),

            // System
            9002 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
