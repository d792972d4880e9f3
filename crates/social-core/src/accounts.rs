use std::sync::Arc;

use social_db::AccountStore;
use social_types::{Account, NewAccount};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::validation;

/// Registration and login against an [`AccountStore`].
pub struct AccountManager<S> {
    store: Arc<S>,
}

impl<S> Clone for AccountManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: AccountStore> AccountManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// Field checks run before the uniqueness lookup, so an invalid
    /// candidate never touches the store.
    pub fn register(&self, username: Option<&str>, password: Option<&str>) -> CoreResult<Account> {
        let username = validation::username(username)?;
        let password = validation::password(password)?;

        if self.store.find_account_by_username(username)?.is_some() {
            info!(username = %username, "Registration rejected: username taken");
            return Err(CoreError::DuplicateUsername(username.to_string()));
        }

        let account = self.store.save_account(NewAccount {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        info!(account_id = account.account_id, username = %account.username, "Account registered");
        Ok(account)
    }

    /// Exact, case-sensitive match on both username and password.
    pub fn login(&self, username: Option<&str>, password: Option<&str>) -> CoreResult<Account> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(CoreError::InvalidCredentials);
        };

        match self.store.find_account_by_username(username)? {
            Some(account) if account.password == password => {
                debug!(account_id = account.account_id, "Login succeeded");
                Ok(account)
            }
            _ => {
                info!(username = %username, "Login rejected");
                Err(CoreError::InvalidCredentials)
            }
        }
    }
}
