//! Procedural macros for the `typedd` completeness protocol.
//!
//! `#[derive(Complete)]` writes the delegation a composite type would otherwise
//! hand-author: its `is_complete` is the conjunction of the `is_complete` of
//! every field. Leaf types implement `Complete` by hand (usually "not the zero
//! value") and composites opt in with one derive.
//!
//! # Attributes
//!
//! - `#[complete(skip)]` on a field: the field is unconstrained and never
//!   consulted. Use it for plain data (`u32`, `String`, flags) that does not
//!   implement `Complete`.
//!
//! # Example
//!
//! ```ignore
//! use typedd::Complete;
//!
//! #[derive(Complete)]
//! struct Address {
//!     city: City,
//!     postcode: Postcode,
//!     #[complete(skip)]
//!     note: String,
//! }
//! ```

use proc_macro::TokenStream;

mod complete;

/// Derive macro implementing `typedd::Complete` by delegating to every field.
///
/// Structs (named, tuple, unit) and enums are supported. For enums only the
/// fields of the active variant are checked. Each generic type parameter gets
/// a `typedd::Complete` bound.
#[proc_macro_derive(Complete, attributes(complete))]
pub fn derive_complete(input: TokenStream) -> TokenStream {
    complete::derive(input)
}
