//! Test fixtures standing in for the external type system.
//!
//! The matcher layer is generic over an opaque type value and a
//! classification oracle; this module provides a small concrete taxonomy so
//! the test suite and documentation examples have something to probe. It is
//! a test collaborator, not part of the layer's contract: real consumers
//! implement [`TypeClass`] on their own type representation.

use serde::{Deserialize, Serialize};

use crate::classify::TypeClass;

/// Column-type taxonomy used by the test suite and documentation examples.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Boolean type.
    Boolean,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// Fixed-point decimal with precision and scale.
    Decimal {
        /// Total number of significant digits.
        precision: u8,
        /// Digits to the right of the decimal point.
        scale: u8,
    },
    /// Variable-length UTF-8 string.
    Varchar,
    /// Date (days since epoch).
    Date,
    /// Timestamp with microsecond precision.
    Timestamp,
}

impl ColumnType {
    /// Shorthand for a decimal type.
    pub const fn decimal(precision: u8, scale: u8) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Get the display name for this type.
    pub fn display_name(&self) -> String {
        match self {
            Self::Boolean => "Boolean".to_string(),
            Self::Int16 => "Int16".to_string(),
            Self::Int32 => "Int32".to_string(),
            Self::Int64 => "Int64".to_string(),
            Self::Float64 => "Float64".to_string(),
            Self::Decimal { precision, scale } => format!("Decimal({precision},{scale})"),
            Self::Varchar => "Varchar".to_string(),
            Self::Date => "Date".to_string(),
            Self::Timestamp => "Timestamp".to_string(),
        }
    }
}

impl TypeClass for ColumnType {
    fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int16 | Self::Int32 | Self::Int64 | Self::Float64 | Self::Decimal { .. }
        )
    }

    fn is_integral(&self) -> bool {
        matches!(self, Self::Int16 | Self::Int32 | Self::Int64)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
