use crate::error::UserError;
use crate::model::{CreateUserRequest, UpdateUserRequest, User, UserId};
use tokio::sync::oneshot;

/// One-shot channel the store answers on.
pub type Response<T> = oneshot::Sender<Result<T, UserError>>;

/// A request sent to the [`UserStore`](super::UserStore).
///
/// One variant per [`Repository`](typedd::Repository) operation.
#[derive(Debug)]
pub enum StoreRequest {
    Create {
        request: CreateUserRequest,
        respond_to: Response<User>,
    },
    Update {
        request: UpdateUserRequest,
        respond_to: Response<()>,
    },
    Get {
        id: UserId,
        respond_to: Response<User>,
    },
}
