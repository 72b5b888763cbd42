use super::config::SystemConfig;
use crate::service::{SharedUserService, UserRepository, UserService};
use crate::store::UserStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;
use typedd::{ValidatedRepository, ValidatedService, ValidationMode};

/// Composes the user service on top of `repository`.
///
/// Strict wiring wraps the repository and the service in validation
/// decorators; lean wiring composes them directly. Callers get the same
/// trait object either way.
pub fn compose<R>(repository: R, mode: ValidationMode) -> SharedUserService
where
    R: UserRepository + 'static,
{
    match mode {
        ValidationMode::Strict => Arc::new(ValidatedService::new(UserService::new(
            ValidatedRepository::new(repository),
        ))),
        ValidationMode::Lean => Arc::new(UserService::new(repository)),
    }
}

/// The running user system: a store task and the service in front of it.
pub struct UserSystem {
    service: SharedUserService,
    mode: ValidationMode,
    store_handle: JoinHandle<()>,
}

impl UserSystem {
    /// Spawns the store and wires the service. Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        let (store, client) = UserStore::new(config.store_buffer);
        let store_handle = tokio::spawn(store.run());
        let service = compose(client, config.mode);

        info!(mode = %config.mode, store_buffer = config.store_buffer, "User system started");
        Self {
            service,
            mode: config.mode,
            store_handle,
        }
    }

    /// A handle to the service.
    ///
    /// Clones keep the store alive; drop them before calling
    /// [`shutdown`](Self::shutdown) or it will wait for them.
    pub fn service(&self) -> SharedUserService {
        self.service.clone()
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Drops the service, which closes the store channel, and waits for the store task.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down user system");
        drop(self.service);
        self.store_handle
            .await
            .map_err(|e| format!("user store task failed: {e}"))?;
        info!("User system shut down");
        Ok(())
    }
}
