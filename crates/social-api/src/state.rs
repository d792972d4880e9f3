use std::sync::Arc;

use social_core::{AccountManager, CoreResult, MessageManager};
use social_db::Database;
use tracing::error;

use crate::error::ApiError;

pub type Accounts = AccountManager<Database>;
pub type Messages = MessageManager<Database, Database>;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: Accounts,
    pub messages: Messages,
}

impl AppStateInner {
    /// Wires both managers to the same database.
    pub fn new(db: Arc<Database>) -> AppState {
        Arc::new(Self {
            accounts: AccountManager::new(db.clone()),
            messages: MessageManager::new(db.clone(), db),
        })
    }
}

/// Runs a blocking core call off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> CoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Join(e)
        })?
        .map_err(ApiError::from)
}
