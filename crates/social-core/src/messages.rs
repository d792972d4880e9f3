use std::sync::Arc;

use social_db::{AccountStore, MessageStore};
use social_types::{Message, NewMessage};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::validation;

/// Outcome of [`MessageManager::delete_message`]. Absence is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Deletion {
    Deleted,
    NotFound,
}

/// Message CRUD. Author existence is checked against the account store
/// at creation time only.
pub struct MessageManager<M, A> {
    messages: Arc<M>,
    accounts: Arc<A>,
}

impl<M, A> Clone for MessageManager<M, A> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            accounts: self.accounts.clone(),
        }
    }
}

impl<M: MessageStore, A: AccountStore> MessageManager<M, A> {
    pub fn new(messages: Arc<M>, accounts: Arc<A>) -> Self {
        Self { messages, accounts }
    }

    /// Creates a message. `time_posted_epoch` defaults to now.
    pub fn create_message(
        &self,
        text: Option<&str>,
        posted_by: i64,
        time_posted_epoch: Option<i64>,
    ) -> CoreResult<Message> {
        let text = validation::message_text(text)?;

        if !self.accounts.account_exists(posted_by)? {
            info!(posted_by, "Message rejected: unknown author");
            return Err(CoreError::InvalidInput(format!("account {posted_by} does not exist")));
        }

        let message = self.messages.save_message(NewMessage {
            posted_by,
            message_text: text.to_string(),
            time_posted_epoch: time_posted_epoch.unwrap_or_else(|| chrono::Utc::now().timestamp()),
        })?;

        debug!(message_id = message.message_id, posted_by, "Message created");
        Ok(message)
    }

    pub fn get_all_messages(&self) -> CoreResult<Vec<Message>> {
        Ok(self.messages.find_all_messages()?)
    }

    pub fn get_message_by_id(&self, message_id: i64) -> CoreResult<Option<Message>> {
        Ok(self.messages.find_message_by_id(message_id)?)
    }

    /// Replaces the text of an existing message.
    ///
    /// A missing message is reported before the new text is looked at.
    pub fn update_message(&self, message_id: i64, new_text: Option<&str>) -> CoreResult<Message> {
        let mut message = self
            .messages
            .find_message_by_id(message_id)?
            .ok_or(CoreError::NotFound(message_id))?;

        let text = validation::message_text(new_text)?;
        message.message_text = text.to_string();

        let updated = self.messages.update_message(&message)?;
        debug!(message_id, "Message updated");
        Ok(updated)
    }

    pub fn delete_message(&self, message_id: i64) -> CoreResult<Deletion> {
        let Some(message) = self.messages.find_message_by_id(message_id)? else {
            return Ok(Deletion::NotFound);
        };

        self.messages.delete_message(&message)?;
        debug!(message_id, "Message deleted");
        Ok(Deletion::Deleted)
    }

    pub fn get_messages_by_account(&self, account_id: i64) -> CoreResult<Vec<Message>> {
        Ok(self.messages.find_messages_by_posted_by(account_id)?)
    }
}
