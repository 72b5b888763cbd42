//! # User Store
//!
//! An in-memory [`Repository`](typedd::Repository) of users, run as a single
//! Tokio task. [`UserStore`] is the server half: it owns the data and the
//! receiving end of the channel. [`StoreClient`] is the cloneable half that
//! callers hold.
//!
//! ```rust
//! use typedd::Repository;
//! use typedd_sample::model::{Bio, CreateUserRequest, EmailAddress, PasswordHash};
//! use typedd_sample::store::UserStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = UserStore::new(16);
//!     tokio::spawn(store.run());
//!
//!     let request = CreateUserRequest::new(
//!         EmailAddress::parse("ada@example.com").unwrap(),
//!         PasswordHash::from_password("analytical").unwrap(),
//!         Bio::default(),
//!     );
//!     let user = client.create(request).await.unwrap();
//!     assert_eq!(client.get(user.id()).await.unwrap(), user);
//! }
//! ```

mod actor;
mod client;
mod message;

pub use actor::UserStore;
pub use client::StoreClient;
pub use message::{Response, StoreRequest};
