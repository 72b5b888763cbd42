//! # Service and Repository Contracts
//!
//! The two component shapes the validation decorators know how to wrap. The
//! core does not implement them; domain crates do. What the core does require
//! is that every identifier, request and entity flowing through them is
//! [`Complete`], so a decorator can check it.
//!
//! Both traits are `#[async_trait]` so implementations may front an actor, a
//! database or any other asynchronous collaborator. The traits are
//! dyn-compatible once their associated types are fixed, which is how a wiring
//! layer hands out one trait object whether or not decorators are present.

use crate::complete::Complete;
use async_trait::async_trait;
use std::fmt::Debug;

/// The business-logic boundary.
#[async_trait]
pub trait Service: Send + Sync {
    /// Identifies an entity.
    type Id: Complete + Debug + Send + Sync + 'static;

    /// Everything needed to create an entity.
    type Create: Complete + Debug + Send + Sync + 'static;

    /// A partial update; unmentioned fields are left alone.
    type Update: Complete + Debug + Send + Sync + 'static;

    /// The entity returned to callers.
    type Entity: Complete + Debug + Send + Sync + 'static;

    /// Domain errors: constraint violations, not-found, parse failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates and returns a valid entity.
    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error>;

    /// Applies a partial update.
    async fn update(&self, request: Self::Update) -> Result<(), Self::Error>;

    /// Fetches an entity by id.
    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error>;
}

/// The storage boundary.
///
/// Implementations MUST report a violated uniqueness constraint with an error
/// the caller can tell apart from "not found" and from generic failures.
#[async_trait]
pub trait Repository: Send + Sync {
    type Id: Complete + Debug + Send + Sync + 'static;
    type Create: Complete + Debug + Send + Sync + 'static;
    type Update: Complete + Debug + Send + Sync + 'static;
    type Entity: Complete + Debug + Send + Sync + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persists a new entity and returns it.
    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error>;

    /// Persists a partial update.
    async fn update(&self, request: Self::Update) -> Result<(), Self::Error>;

    /// Loads an entity by id.
    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error>;
}

#[async_trait]
impl<S: Service + ?Sized> Service for std::sync::Arc<S> {
    type Id = S::Id;
    type Create = S::Create;
    type Update = S::Update;
    type Entity = S::Entity;
    type Error = S::Error;

    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error> {
        (**self).create(request).await
    }

    async fn update(&self, request: Self::Update) -> Result<(), Self::Error> {
        (**self).update(request).await
    }

    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error> {
        (**self).get(id).await
    }
}

#[async_trait]
impl<R: Repository + ?Sized> Repository for std::sync::Arc<R> {
    type Id = R::Id;
    type Create = R::Create;
    type Update = R::Update;
    type Entity = R::Entity;
    type Error = R::Error;

    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error> {
        (**self).create(request).await
    }

    async fn update(&self, request: Self::Update) -> Result<(), Self::Error> {
        (**self).update(request).await
    }

    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error> {
        (**self).get(id).await
    }
}
