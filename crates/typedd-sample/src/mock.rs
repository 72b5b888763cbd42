//! # Mock Repository & Testing Guide
//!
//! [`MockUserRepository`] implements [`Repository`] for users entirely in
//! memory. Queue the responses you want with the fluent `expect_*` builders,
//! run the code under test, then call [`verify`](MockUserRepository::verify).
//!
//! ## When to use the Mock vs the Real Store
//!
//! | Feature | MockUserRepository | UserStore |
//! |---------|--------------------|-----------|
//! | **State** | None, only queued responses | Real indexes by id and email |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//! | **Broken Output** | Easy (return a zero `User`) | Impossible by construction |
//! | **Use Case** | Service logic and decorators | The store itself, full system |
//!
//! The mock is the simplest way to play a broken collaborator: queue a `User`
//! built from zero values and wrap the mock in a
//! [`ValidatedRepository`](typedd::ValidatedRepository).
//!
//! ```rust
//! use typedd::{Repository, ValidatedRepository};
//! use typedd_sample::mock::MockUserRepository;
//! use typedd_sample::model::{User, UserId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockUserRepository::new();
//!     let id = UserId::generate();
//!     mock.expect_get(id).return_ok(User::default());
//!
//!     let repository = ValidatedRepository::new(mock.clone());
//!     let err = repository.get(id).await.unwrap_err();
//!     assert!(err.is_defect());
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level Mocks
//!
//! To drive a real [`StoreClient`] without spawning a [`UserStore`](crate::store::UserStore),
//! use [`mock_store`] and answer requests by hand with [`next_request`].

use crate::error::UserError;
use crate::model::{CreateUserRequest, UpdateUserRequest, User, UserId};
use crate::store::{StoreClient, StoreRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use typedd::Repository;

enum Expectation {
    Create(Result<User, UserError>),
    Update(Result<(), UserError>),
    Get {
        id: UserId,
        response: Result<User, UserError>,
    },
}

impl Expectation {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "create",
            Expectation::Update(_) => "update",
            Expectation::Get { .. } => "get",
        }
    }
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Expectation>> {
    // A panicking test thread must not hide the remaining expectations.
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A user repository that answers from a queue of expectations.
///
/// Clones share the queue, so keep one clone for `verify` and hand another to
/// the code under test.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    expectations: Queue,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<User> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    /// Expects an `update` call.
    pub fn expect_update(&self) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Update)
    }

    /// Expects a `get` call for `id`.
    pub fn expect_get(&self, id: UserId) -> ExpectationBuilder<User> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations);
        if !remaining.is_empty() {
            let names: Vec<_> = remaining.iter().map(Expectation::name).collect();
            panic!("Not all expectations were met. {} remaining: {names:?}", names.len());
        }
    }

    fn next(&self, call: &str) -> Expectation {
        match lock(&self.expectations).pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {call} call, no expectation queued"),
        }
    }
}

#[async_trait]
impl Repository for MockUserRepository {
    type Id = UserId;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type Entity = User;
    type Error = UserError;

    async fn create(&self, _request: CreateUserRequest) -> Result<User, UserError> {
        match self.next("create") {
            Expectation::Create(response) => response,
            other => panic!("Expected {} call, got create", other.name()),
        }
    }

    async fn update(&self, _request: UpdateUserRequest) -> Result<(), UserError> {
        match self.next("update") {
            Expectation::Update(response) => response,
            other => panic!("Expected {} call, got update", other.name()),
        }
    }

    async fn get(&self, id: UserId) -> Result<User, UserError> {
        match self.next("get") {
            Expectation::Get { id: expected, response } => {
                assert_eq!(id, expected, "get called with an unexpected id");
                response
            }
            other => panic!("Expected {} call, got get", other.name()),
        }
    }
}

/// Queues one response for an expected call.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    make: Box<dyn FnOnce(Result<T, UserError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        expectations: Queue,
        make: impl FnOnce(Result<T, UserError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// The call succeeds with `value`.
    pub fn return_ok(self, value: T) {
        let expectation = (self.make)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: UserError) {
        let expectation = (self.make)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

/// A [`StoreClient`] wired to a receiver the test controls.
pub fn mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request sent to a [`mock_store`] client.
pub async fn next_request(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<StoreRequest> {
    receiver.recv().await
}
