//! # Completeness Errors
//!
//! Two error types leave this crate:
//!
//! - [`IncompleteValue`]: a value that had to be complete was not. Raised by
//!   [`ensure_complete`](crate::ensure_complete) and by
//!   [`Optional::present`](crate::Optional::present).
//! - [`ContractViolation`]: an [`IncompleteValue`] caught by a validation
//!   decorator at a component boundary. It is the fatal class.

use std::fmt::Debug;

/// A value that should have been complete was found incomplete.
///
/// Carries the offending value's type name and its `Debug` rendering. Types
/// holding secrets should redact them in their `Debug` impl.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value of type {type_name} is incomplete: {value}")]
pub struct IncompleteValue {
    type_name: &'static str,
    value: String,
}

impl IncompleteValue {
    /// Captures `value` as the offending value.
    pub fn of<T: Debug + ?Sized>(value: &T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value: format!("{value:?}"),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Where a [`ContractViolation`] was caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// An argument on its way into a service.
    ServiceInput,
    /// A value returned by a repository.
    RepositoryOutput,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::ServiceInput => f.write_str("service input"),
            Boundary::RepositoryOutput => f.write_str("repository output"),
        }
    }
}

/// A collaborator broke the completeness contract.
///
/// Never expected in a correctly wired program. It means a component handed an
/// incomplete value across a boundary, which is a programming defect rather
/// than bad user input. Callers must not map it onto an ordinary error
/// response or retry the operation; surface it as an internal failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contract violation at {boundary}: {source}")]
pub struct ContractViolation {
    boundary: Boundary,
    #[source]
    source: IncompleteValue,
}

impl ContractViolation {
    pub fn new(boundary: Boundary, source: IncompleteValue) -> Self {
        Self { boundary, source }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn incomplete(&self) -> &IncompleteValue {
        &self.source
    }
}
