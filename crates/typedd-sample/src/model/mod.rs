//! # User Domain Model
//!
//! Value types with validating constructors, and the composites built from
//! them. Every type here implements [`Complete`](typedd::Complete): leaves by
//! hand, composites by derive.

mod address;
mod user;
mod values;

pub use address::{City, PostalAddress, Postcode};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserChanges};
pub use values::{Bio, EmailAddress, PasswordHash, UserId, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};
