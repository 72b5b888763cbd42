//! Error types for the user domain.

use crate::model::UserId;
use std::fmt;
use thiserror::Error;
use typedd::{ContractViolation, IncompleteValue};

/// A field of a user-domain type, named in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Email,
    PasswordHash,
    Bio,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Email => "email",
            Field::PasswordHash => "password hash",
            Field::Bio => "bio",
            Field::Address => "address",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A raw value could not be parsed into a valid domain type.
    #[error("invalid {field}: {}", messages.join("; "))]
    Parse { field: Field, messages: Vec<String> },

    /// The request tried to carry a partially filled value.
    #[error("incomplete {field}: {source}")]
    Incomplete {
        field: Field,
        source: IncompleteValue,
    },

    /// The update is well-formed but not allowed, e.g. clearing a required field.
    #[error("invalid update of {field}: {message}")]
    InvalidUpdate { field: Field, message: String },

    /// A field violated a store constraint, such as a unique index.
    #[error("constraint violation on {field}: {}", messages.join("; "))]
    ConstraintViolation { field: Field, messages: Vec<String> },

    /// The requested user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The store could not be reached.
    #[error("user storage error: {0}")]
    Storage(String),

    /// A collaborator broke the completeness contract.
    ///
    /// Never produced for user input. Treat it as an internal failure, not as
    /// a bad request, and do not retry.
    #[error(transparent)]
    Defect(#[from] ContractViolation),
}

impl UserError {
    pub(crate) fn parse(field: Field, message: impl Into<String>) -> Self {
        UserError::Parse {
            field,
            messages: vec![message.into()],
        }
    }

    /// True only for [`UserError::Defect`].
    pub fn is_defect(&self) -> bool {
        matches!(self, UserError::Defect(_))
    }

    /// True for errors caused by the caller's input rather than by the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            UserError::Parse { .. }
                | UserError::Incomplete { .. }
                | UserError::InvalidUpdate { .. }
                | UserError::ConstraintViolation { .. }
                | UserError::NotFound(_)
        )
    }
}
