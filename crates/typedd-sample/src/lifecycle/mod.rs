//! # System Lifecycle & Wiring
//!
//! This module starts the user store, composes the service graph in front of
//! it, and shuts everything down again.
//!
//! ## Strict and Lean Wiring
//!
//! The validation mode is decided once, when the graph is built:
//!
//! ```text
//! strict:  ValidatedService<UserService<ValidatedRepository<StoreClient>>>
//! lean:    UserService<StoreClient>
//! ```
//!
//! Both are handed out as the same [`SharedUserService`](crate::service::SharedUserService),
//! so nothing downstream can tell which one it got. For valid values they
//! behave identically; strict wiring additionally turns an incomplete value at
//! a boundary into [`UserError::Defect`](crate::error::UserError::Defect).
//!
//! ```rust
//! use typedd::ValidationMode;
//! use typedd_sample::lifecycle::{SystemConfig, UserSystem};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SystemConfig::default().with_mode(ValidationMode::Strict);
//!     let system = UserSystem::new(config);
//!     assert!(system.mode().is_strict());
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Configuration
//!
//! [`SystemConfig::from_env`] reads:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `TYPEDD_VALIDATION` | `strict`, `lean` | strict in debug builds, lean in release |
//! | `TYPEDD_STORE_BUFFER` | positive integer | 32 |
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the service** - the last [`StoreClient`](crate::store::StoreClient)
//!    goes with it and the channel closes.
//! 2. **Store detects closure** - `recv()` returns `None`, it logs and exits.
//! 3. **Await the task** - [`UserSystem::shutdown`] returns once the store is gone.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`](self::tracing) module for
//! what gets logged where.

pub mod config;
pub mod tracing;
pub mod user_system;

pub use self::config::*;
pub use self::tracing::*;
pub use self::user_system::*;
