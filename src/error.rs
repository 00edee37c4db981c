//! Error types for snmp-smi.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type for all library operations
//! - [`ParseErrorKind`] - Why a dotted-decimal OID string was rejected
//! - [`ValidationErrorKind`] - Which SMI constraint an OID violates
//!
//! Errors are plain values. The `Display` output of parse and validation
//! errors is stable and meant to be shown to users as-is.
//!
//! ```
//! use snmp_smi::{Error, Oid, ValidationErrorKind};
//!
//! match Oid::parse("3.1") {
//!     Err(Error::Validation(ValidationErrorKind::InvalidFirstArc(v))) => assert_eq!(v, 3),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for snmp-smi operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed dotted-decimal OID text.
    #[error("{kind}")]
    Parse {
        kind: ParseErrorKind,
        input: Box<str>,
    },

    /// Well-formed OID violating an SMI constraint.
    #[error("{0}")]
    Validation(ValidationErrorKind),

    /// Name that is not one of the SMI base types.
    #[error("unknown base type: {0}")]
    UnknownBaseType(Box<str>),
}

impl Error {
    /// Create a parse error for the given input string.
    pub fn parse(kind: ParseErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::Parse {
            kind,
            input: input.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(kind: ValidationErrorKind) -> Self {
        Self::Validation(kind)
    }

    /// The input string that failed to parse, if this is a parse error.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Parse { input, .. } => Some(input),
            _ => None,
        }
    }
}

/// Reasons the OID parser rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Two `.` characters appear next to each other.
    ConsecutivePeriods,
    /// The last character of the input is a `.`.
    TrailingPeriod,
    /// A character that is neither an ASCII digit nor `.`.
    InvalidCharacter {
        /// Zero-based byte offset into the input.
        position: usize,
        character: char,
    },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsecutivePeriods => write!(f, "cannot have consecutive periods"),
            Self::TrailingPeriod => write!(f, "cannot end with a period"),
            Self::InvalidCharacter {
                position,
                character,
            } => write!(f, "invalid character at position {}: {}", position, character),
        }
    }
}

/// SMI constraints an OID can violate.
///
/// Positions are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// Fewer than two sub-identifiers.
    TooShort,
    /// Sub-identifier below zero.
    Negative { position: usize, value: i64 },
    /// Sub-identifier above 2^32-1.
    TooLarge { position: usize, value: i64 },
    /// First sub-identifier is not 0, 1, or 2.
    InvalidFirstArc(i64),
    /// More than [`MAX_OID_LEN`](crate::oid::MAX_OID_LEN) sub-identifiers.
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort => write!(f, "must have at least two sub-identifiers"),
            Self::Negative { position, value } => {
                write!(f, "sub-identifier at position {} is negative: {}", position, value)
            }
            Self::TooLarge { position, value } => {
                write!(f, "sub-identifier at position {} is too large: {}", position, value)
            }
            Self::InvalidFirstArc(v) => write!(f, "first sub-identifier must be 0, 1, or 2: {}", v),
            Self::TooManyArcs { count, max } => {
                write!(f, "has {} sub-identifiers, exceeds maximum {}", count, max)
            }
        }
    }
}
