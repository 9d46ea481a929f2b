//! Common error infrastructure for item-core.
//!
//! This module provides shared types and traits used across all error types in item-core.
//! Domain-specific errors (e.g., [`PlatformError`](crate::platform::PlatformError)) are
//! defined next to the interfaces that produce them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure source has its own error type with specific variants
//! - **No Wrapping**: Errors raised inside a scoped metadata edit reach the caller unchanged
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: The caller supplied something the host rejects (unknown kind,
///   out-of-range amount). Retrying without changes will fail again.
/// - **Internal**: The host and the builder disagree about the item's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown material, stack size above the material's limit
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a committed snapshot whose variant does not match the item kind
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all item-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ItemError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
