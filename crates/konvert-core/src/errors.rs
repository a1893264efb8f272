use miette::Diagnostic;
use thiserror::Error;

use crate::unit::Unit;

/// Unified error type for all Konvert operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// A direct rule for this ordered unit pair was already registered.
    ///
    /// Registering a rule also registers its inverse, so this fires both for
    /// an exact repeat and for an attempt to re-register the reverse pair.
    #[error("already have a conversion from {from} to {to}")]
    #[diagnostic(help("each unit pair may carry at most one direct rule"))]
    DuplicateRule { from: Unit, to: Unit },

    /// No chain of rules connects the source unit to the target unit.
    #[error("don't know how to convert from {from} to {to}")]
    #[diagnostic(help("register a rule linking the two units, directly or through intermediates"))]
    NoPath { from: Unit, to: Unit },
}

/// Convenience alias for results carrying a [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
