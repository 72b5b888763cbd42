//! # User Service
//!
//! The business-logic layer in front of a [`UserRepository`]. It owns the
//! rules the store does not know about; today that is "required fields cannot
//! be cleared by an update". Uniqueness lives in the store.

use crate::error::{Field, UserError};
use crate::model::{CreateUserRequest, UpdateUserRequest, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use typedd::{Complete, Optional, Repository, Service};

/// Any [`Repository`] of users.
pub trait UserRepository:
    Repository<
    Id = UserId,
    Create = CreateUserRequest,
    Update = UpdateUserRequest,
    Entity = User,
    Error = UserError,
>
{
}

impl<R> UserRepository for R where
    R: Repository<
            Id = UserId,
            Create = CreateUserRequest,
            Update = UpdateUserRequest,
            Entity = User,
            Error = UserError,
        > + ?Sized
{
}

/// The user service as a trait object, whichever way it was wired.
pub type SharedUserService = Arc<
    dyn Service<
        Id = UserId,
        Create = CreateUserRequest,
        Update = UpdateUserRequest,
        Entity = User,
        Error = UserError,
    >,
>;

#[derive(Debug, Clone)]
pub struct UserService<R> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Rejects an update that sets a required field to its zero value.
fn ensure_not_cleared<T>(field: Field, value: &Optional<T>) -> Result<(), UserError>
where
    T: Complete,
{
    match value.as_present() {
        Some(v) if !v.is_complete() => Err(UserError::InvalidUpdate {
            field,
            message: format!("{field} is required and cannot be cleared"),
        }),
        _ => Ok(()),
    }
}

#[async_trait]
impl<R: UserRepository> Service for UserService<R> {
    type Id = UserId;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type Entity = User;
    type Error = UserError;

    #[instrument(skip_all, fields(email = %request.email()))]
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError> {
        debug!("Creating user");
        let user = self.repository.create(request).await?;
        info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    #[instrument(skip_all, fields(user_id = %request.id()))]
    async fn update(&self, request: UpdateUserRequest) -> Result<(), UserError> {
        ensure_not_cleared(Field::Email, request.email())?;
        ensure_not_cleared(Field::PasswordHash, request.password_hash())?;

        if request.is_noop() {
            warn!("Update carries no changes");
        }
        self.repository.update(request).await?;
        info!("User updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: UserId) -> Result<User, UserError> {
        debug!("Fetching user");
        self.repository.get(id).await
    }
}
