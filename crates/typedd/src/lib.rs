//! # typedd
//!
//! This crate provides the building blocks for domain models that can never be
//! observed in an incomplete state. A value of a "must-be-valid" type is built
//! through validating constructors, and from then on every boundary it crosses
//! can prove it is still fully populated.
//!
//! ## Why a Completeness Protocol?
//!
//! Validating constructors guarantee that *well-behaved* code produces valid
//! values. They say nothing about the zero value, which every type still has
//! (`Default`), or about a collaborator that builds a record by hand and
//! forgets a field. The protocol makes "is this value fully populated?" a
//! question every type can answer, so the question can be asked mechanically
//! at the seams of the program.
//!
//! ## Architecture Overview
//!
//! The crate is three layers, leaves first:
//!
//! 1. **Protocol** ([`Complete`]) - one pure predicate, derived for composites
//!    with `#[derive(Complete)]`, hand-written for leaf types.
//! 2. **Wrapper** ([`Optional`]) - an optional value that refuses partially
//!    complete payloads, for partial updates.
//! 3. **Decorators** ([`ValidatedService`], [`ValidatedRepository`]) - wrap a
//!    [`Service`] or [`Repository`] and check inputs and outputs at the
//!    boundary. [`ValidationMode`] decides at wiring time whether they are
//!    composed in.
//!
//! ## Core Abstractions
//!
//! ### [`Complete`] - The Protocol
//!
//! ```rust
//! use typedd::{ensure_complete, Complete};
//!
//! // A leaf type: complete unless it is the zero value.
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct City(String);
//!
//! impl Complete for City {
//!     fn is_complete(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! // A composite: complete when every field is.
//! #[derive(Debug, Default, Clone, PartialEq, Complete)]
//! struct Address {
//!     city: City,
//!     postcode: City,
//!     #[complete(skip)]
//!     floor: u8,
//! }
//!
//! let partial = Address { city: City("Berlin".into()), ..Address::default() };
//! assert!(!partial.is_complete());
//! assert!(ensure_complete(&partial).is_err());
//! ```
//!
//! ### [`Optional`] - All or Nothing
//!
//! ```rust
//! # use typedd::Complete;
//! # #[derive(Debug, Default, Clone, PartialEq)]
//! # struct City(String);
//! # impl Complete for City { fn is_complete(&self) -> bool { !self.0.is_empty() } }
//! # #[derive(Debug, Default, Clone, PartialEq, Complete)]
//! # struct Address { city: City, postcode: City }
//! use typedd::Optional;
//!
//! // Not mentioned: leave the stored value alone.
//! let (_, present) = Optional::<Address>::empty().into_parts();
//! assert!(!present);
//!
//! // Explicitly cleared: the zero value is accepted.
//! assert!(Optional::present(Address::default()).is_ok());
//!
//! // Half built: rejected before it can travel anywhere.
//! let partial = Address { city: City("Berlin".into()), postcode: City::default() };
//! assert!(Optional::present(partial).is_err());
//! ```
//!
//! ## Error Handling
//!
//! - [`IncompleteValue`] is the only error the protocol and the wrapper raise.
//! - [`ContractViolation`] is what a decorator produces. It marks a wiring or
//!   collaborator defect and must not be handled like a domain error.
//!
//! ## Testing
//!
//! Strict wiring is the test configuration: run your suite against decorated
//! components and a contract breach fails the first test that crosses the
//! broken boundary.

// Lets `#[derive(Complete)]` expand to `::typedd::Complete` inside this crate's own tests.
extern crate self as typedd;

pub mod complete;
pub mod contract;
pub mod error;
pub mod mode;
pub mod option;
pub mod validated;

// Re-export core types for convenience
pub use complete::{ensure_complete, Complete};
pub use contract::{Repository, Service};
pub use error::{Boundary, ContractViolation, IncompleteValue};
pub use mode::{UnknownMode, ValidationMode};
pub use option::Optional;
pub use typedd_derive::Complete;
pub use validated::{ValidatedRepository, ValidatedService};
