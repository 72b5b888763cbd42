//! # Tracing Setup
//!
//! Store and service log through `tracing` with structured fields:
//!
//! - the store task logs `info` on start, shutdown and every successful write,
//!   `debug` with the full request, `warn` on not-found and constraint errors;
//! - clients and the service open a span per call (`#[instrument]`);
//! - validation decorators log every contract violation at `error`.
//!
//! A strict-mode rejection reads like:
//!
//! ```text
//! ERROR create: Contract violation boundary=service input type_name=typedd_sample::model::user::CreateUserRequest value=CreateUserRequest { .. password_hash: PasswordHash(<empty>) .. }
//! ```
//!
//! Password digests always print redacted.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=info cargo run -p typedd-sample     # lifecycle and writes
/// RUST_LOG=debug cargo run -p typedd-sample    # plus full requests
/// ```
///
/// Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and span names say where a line came from
        .compact()
        .init();
}
