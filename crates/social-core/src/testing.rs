//! Test doubles shared by the manager tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use social_db::{AccountStore, Database, MessageStore};
use social_types::{Account, Message, NewAccount, NewMessage};

/// Wraps an in-memory [`Database`] and counts reads and writes.
pub struct CountingStore {
    db: Database,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            db: Database::open_in_memory().unwrap(),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        })
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl AccountStore for CountingStore {
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.read();
        self.db.find_account_by_username(username)
    }

    fn account_exists(&self, account_id: i64) -> Result<bool> {
        self.read();
        self.db.account_exists(account_id)
    }

    fn save_account(&self, account: NewAccount) -> Result<Account> {
        self.write();
        self.db.save_account(account)
    }
}

impl MessageStore for CountingStore {
    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        self.read();
        self.db.find_message_by_id(message_id)
    }

    fn find_all_messages(&self) -> Result<Vec<Message>> {
        self.read();
        self.db.find_all_messages()
    }

    fn find_messages_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>> {
        self.read();
        self.db.find_messages_by_posted_by(account_id)
    }

    fn save_message(&self, message: NewMessage) -> Result<Message> {
        self.write();
        self.db.save_message(message)
    }

    fn update_message(&self, message: &Message) -> Result<Message> {
        self.write();
        MessageStore::update_message(&self.db, message)
    }

    fn delete_message(&self, message: &Message) -> Result<()> {
        self.write();
        self.db.delete_message(message)
    }
}

/// A store whose every call fails, standing in for an unavailable database.
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl AccountStore for FailingStore {
    fn find_account_by_username(&self, _username: &str) -> Result<Option<Account>> {
        Err(anyhow!("database unavailable"))
    }

    fn account_exists(&self, _account_id: i64) -> Result<bool> {
        Err(anyhow!("database unavailable"))
    }

    fn save_account(&self, _account: NewAccount) -> Result<Account> {
        Err(anyhow!("database unavailable"))
    }
}

impl MessageStore for FailingStore {
    fn find_message_by_id(&self, _message_id: i64) -> Result<Option<Message>> {
        Err(anyhow!("database unavailable"))
    }

    fn find_all_messages(&self) -> Result<Vec<Message>> {
        Err(anyhow!("database unavailable"))
    }

    fn find_messages_by_posted_by(&self, _account_id: i64) -> Result<Vec<Message>> {
        Err(anyhow!("database unavailable"))
    }

    fn save_message(&self, _message: NewMessage) -> Result<Message> {
        Err(anyhow!("database unavailable"))
    }

    fn update_message(&self, _message: &Message) -> Result<Message> {
        Err(anyhow!("database unavailable"))
    }

    fn delete_message(&self, _message: &Message) -> Result<()> {
        Err(anyhow!("database unavailable"))
    }
}
