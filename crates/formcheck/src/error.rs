//! Error types for declarations and rule violations.

use std::num::ParseIntError;
use thiserror::Error;

use crate::validator::Category;

/// A range or number expression that does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("range should be like '8|16', '|8|16', '8|16|' or '|8|16|', got: {0}")]
    RangeSyntax(String),

    #[error("num should be like '8' or '|8|', got: {0}")]
    NumberSyntax(String),

    #[error("bound out of range in '{expr}': {source}")]
    Bound {
        expr: String,
        #[source]
        source: ParseIntError,
    },
}

/// A validator declaration rejected by the declaration check.
///
/// These indicate a programming or configuration mistake, never bad user
/// input, so callers usually treat them as fatal during startup.
#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("{category} rule for '{field}': {source}")]
    Expr {
        category: Category,
        field: String,
        #[source]
        source: ExprError,
    },

    #[error("regexp rule for '{field}' has an invalid pattern: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid email pattern: {0}")]
    EmailPattern(#[source] regex::Error),
}

impl DeclarationError {
    /// Name of the input field whose declaration was rejected, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DeclarationError::Expr { field, .. } | DeclarationError::Pattern { field, .. } => {
                Some(field)
            }
            DeclarationError::EmailPattern(_) => None,
        }
    }
}

/// The first failed rule, carrying the message declared for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    pub message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeclarationError>;
