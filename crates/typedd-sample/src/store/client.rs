use super::message::StoreRequest;
use crate::error::UserError;
use crate::model::{CreateUserRequest, UpdateUserRequest, User, UserId};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use typedd::Repository;

/// The [`Repository`] face of a running [`UserStore`](super::UserStore).
///
/// Holds only a sender, so cloning is cheap. The store shuts down once every
/// clone is dropped.
#[derive(Debug, Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

fn store_closed<T>(_: T) -> UserError {
    UserError::Storage("user store is closed".to_string())
}

fn store_dropped<T>(_: T) -> UserError {
    UserError::Storage("user store dropped the request".to_string())
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Repository for StoreClient {
    type Id = UserId;
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type Entity = User;
    type Error = UserError;

    #[instrument(skip_all)]
    async fn create(&self, request: CreateUserRequest) -> Result<User, UserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { request, respond_to })
            .await
            .map_err(store_closed)?;
        response.await.map_err(store_dropped)?
    }

    #[instrument(skip_all, fields(user_id = %request.id()))]
    async fn update(&self, request: UpdateUserRequest) -> Result<(), UserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { request, respond_to })
            .await
            .map_err(store_closed)?;
        response.await.map_err(store_dropped)?
    }

    #[instrument(skip(self))]
    async fn get(&self, id: UserId) -> Result<User, UserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(store_closed)?;
        response.await.map_err(store_dropped)?
    }
}
