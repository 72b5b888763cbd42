//! # typedd sample: users
//!
//! A small user-management domain built on `typedd`, exposed as a library for
//! integration testing.
//!
//! ## Core Components
//!
//! - **[model]**: Value types with validating constructors ([`model::EmailAddress`],
//!   [`model::PasswordHash`], ...) and the composites built from them
//!   ([`model::User`], [`model::CreateUserRequest`], [`model::UpdateUserRequest`]).
//! - **[service]**: [`service::UserService`], the business rules in front of a repository.
//! - **[store]**: [`store::UserStore`], an in-memory repository running as an actor.
//! - **[payload]**: serde request bodies and their conversion into domain requests.
//! - **[lifecycle]**: configuration, tracing setup, and strict or lean wiring.
//! - **[mock]**: [`mock::MockUserRepository`] for tests.
//!
//! ## Quick Start
//!
//! The `typedd-sample` binary starts a [`lifecycle::UserSystem`], registers a
//! user, updates it, and shows a strict-mode rejection.

pub mod error;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod payload;
pub mod service;
pub mod store;

pub use error::{Field, UserError};
