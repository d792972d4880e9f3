//! Storage contracts consumed by the account and message managers.
//!
//! Storage faults are reported through `anyhow::Result`; absence is `None`
//! or an empty `Vec`, never an error.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use social_types::{Account, Message, NewAccount, NewMessage};

use crate::Database;

pub trait AccountStore: Send + Sync {
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Explicit existence predicate for foreign-key checks.
    fn account_exists(&self, account_id: i64) -> Result<bool>;

    /// Persists a new account and returns it with its assigned id.
    fn save_account(&self, account: NewAccount) -> Result<Account>;
}

pub trait MessageStore: Send + Sync {
    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>>;

    fn find_all_messages(&self) -> Result<Vec<Message>>;

    fn find_messages_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>>;

    /// Persists a new message and returns it with its assigned id.
    fn save_message(&self, message: NewMessage) -> Result<Message>;

    /// Persists the text of an existing message.
    fn update_message(&self, message: &Message) -> Result<Message>;

    fn delete_message(&self, message: &Message) -> Result<()>;
}

impl AccountStore for Database {
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.get_account_by_username(username)?.map(Account::from))
    }

    fn account_exists(&self, account_id: i64) -> Result<bool> {
        self.account_id_exists(account_id)
    }

    fn save_account(&self, account: NewAccount) -> Result<Account> {
        Ok(self.insert_account(&account)?.into())
    }
}

impl MessageStore for Database {
    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        Ok(self.get_message(message_id)?.map(Message::from))
    }

    fn find_all_messages(&self) -> Result<Vec<Message>> {
        Ok(self.get_messages()?.into_iter().map(Message::from).collect())
    }

    fn find_messages_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self
            .get_messages_by_author(account_id)?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    fn save_message(&self, message: NewMessage) -> Result<Message> {
        Ok(self.insert_message(&message)?.into())
    }

    fn update_message(&self, message: &Message) -> Result<Message> {
        match self.set_message_text(message.message_id, &message.message_text)? {
            0 => Err(anyhow!("Message vanished during update: {}", message.message_id)),
            _ => Ok(message.clone()),
        }
    }

    fn delete_message(&self, message: &Message) -> Result<()> {
        self.remove_message(message.message_id)?;
        Ok(())
    }
}

impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        (**self).find_account_by_username(username)
    }

    fn account_exists(&self, account_id: i64) -> Result<bool> {
        (**self).account_exists(account_id)
    }

    fn save_account(&self, account: NewAccount) -> Result<Account> {
        (**self).save_account(account)
    }
}

impl<T: MessageStore + ?Sized> MessageStore for Arc<T> {
    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        (**self).find_message_by_id(message_id)
    }

    fn find_all_messages(&self) -> Result<Vec<Message>> {
        (**self).find_all_messages()
    }

    fn find_messages_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>> {
        (**self).find_messages_by_posted_by(account_id)
    }

    fn save_message(&self, message: NewMessage) -> Result<Message> {
        (**self).save_message(message)
    }

    fn update_message(&self, message: &Message) -> Result<Message> {
        (**self).update_message(message)
    }

    fn delete_message(&self, message: &Message) -> Result<()> {
        (**self).delete_message(message)
    }
}
