//! # Validation Decorators
//!
//! [`ValidatedService`] and [`ValidatedRepository`] wrap a component and
//! satisfy the same contract as the component they wrap. They add one thing:
//! a completeness check at the boundary.
//!
//! - The service decorator checks every argument **before** forwarding it. A
//!   failed check never reaches the inner service.
//! - The repository decorator checks every successful result **after** the
//!   inner repository returns. Errors from the inner repository pass through
//!   untouched and unchecked.
//!
//! A failed check is a [`ContractViolation`], converted into the component's
//! own error type via `From`. It is logged at `error` level. The decorated
//! graph is what strict wiring composes; lean wiring composes the inner
//! components directly, see [`ValidationMode`](crate::ValidationMode).

use crate::complete::{ensure_complete, Complete};
use crate::contract::{Repository, Service};
use crate::error::{Boundary, ContractViolation};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{error, instrument};

/// Checks `value`, turning an incomplete one into the caller's error type.
fn check<T, E>(boundary: Boundary, value: &T) -> Result<(), E>
where
    T: Complete + Debug,
    E: From<ContractViolation>,
{
    ensure_complete(value).map_err(|source| {
        error!(
            %boundary,
            type_name = source.type_name(),
            value = source.value(),
            "Contract violation"
        );
        E::from(ContractViolation::new(boundary, source))
    })
}

/// Asserts completeness of every input before it reaches the wrapped service.
#[derive(Debug, Clone)]
pub struct ValidatedService<S> {
    inner: S,
}

impl<S> ValidatedService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S> Service for ValidatedService<S>
where
    S: Service,
    S::Error: From<ContractViolation>,
{
    type Id = S::Id;
    type Create = S::Create;
    type Update = S::Update;
    type Entity = S::Entity;
    type Error = S::Error;

    #[instrument(level = "debug", skip_all)]
    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error> {
        check::<_, S::Error>(Boundary::ServiceInput, &request)?;
        self.inner.create(request).await
    }

    #[instrument(level = "debug", skip_all)]
    async fn update(&self, request: Self::Update) -> Result<(), Self::Error> {
        check::<_, S::Error>(Boundary::ServiceInput, &request)?;
        self.inner.update(request).await
    }

    #[instrument(level = "debug", skip_all)]
    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error> {
        check::<_, S::Error>(Boundary::ServiceInput, &id)?;
        self.inner.get(id).await
    }
}

/// Asserts completeness of every value the wrapped repository returns.
#[derive(Debug, Clone)]
pub struct ValidatedRepository<R> {
    inner: R,
}

impl<R> ValidatedRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[async_trait]
impl<R> Repository for ValidatedRepository<R>
where
    R: Repository,
    R::Error: From<ContractViolation>,
{
    type Id = R::Id;
    type Create = R::Create;
    type Update = R::Update;
    type Entity = R::Entity;
    type Error = R::Error;

    #[instrument(level = "debug", skip_all)]
    async fn create(&self, request: Self::Create) -> Result<Self::Entity, Self::Error> {
        let entity = self.inner.create(request).await?;
        check::<_, R::Error>(Boundary::RepositoryOutput, &entity)?;
        Ok(entity)
    }

    // Nothing comes back from an update, so there is nothing to check.
    async fn update(&self, request: Self::Update) -> Result<(), Self::Error> {
        self.inner.update(request).await
    }

    #[instrument(level = "debug", skip_all)]
    async fn get(&self, id: Self::Id) -> Result<Self::Entity, Self::Error> {
        let entity = self.inner.get(id).await?;
        check::<_, R::Error>(Boundary::RepositoryOutput, &entity)?;
        Ok(entity)
    }
}
