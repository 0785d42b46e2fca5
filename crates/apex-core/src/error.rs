//! # Error Types
//!
//! Domain-specific error types for apex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  apex-core errors (this file)                                          │
//! │  ├── CoreError        - Draft editing and amount-in-words failures     │
//! │  └── ValidationError  - Invoice form rules                             │
//! │                                                                         │
//! │  apex-invoice errors (CLI crate)                                       │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals calculator has no error type at all: it is a total function
//! over non-negative decimals.

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line item with this id exists in the draft.
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// The draft always keeps one row for the user to fill in.
    ///
    /// ## User Workflow
    /// ```text
    /// Draft has 1 line item
    ///      │
    ///      ▼
    /// remove_line_item(id)
    ///      │
    ///      ▼
    /// LastLineItem (row stays, nothing changes)
    /// ```
    #[error("Cannot remove the last line item of an invoice")]
    LastLineItem,

    /// Amounts in words are only defined for non-negative amounts.
    /// Invoice totals never legitimately go below zero.
    #[error("Amount must not be negative: {amount}")]
    NegativeAmount { amount: Decimal },

    /// The denomination table stops at Kharab; a quotient of up to 999 is
    /// still rendered there, anything larger is refused.
    #[error("Amount {amount} exceeds the largest amount that can be written in words")]
    AmountTooLarge { amount: Decimal },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a draft may be finalized, and by
/// draft updates that would put a negative rate or quantity on a line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. non-digit invoice number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// A collection that needs at least one entry is empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
