use crate::Database;
use crate::models::{AccountRow, MessageRow};
use anyhow::Result;
use rusqlite::Connection;
use social_types::{NewAccount, NewMessage};

impl Database {
    // -- Accounts --

    pub fn insert_account(&self, account: &NewAccount) -> Result<AccountRow> {
        self.with_conn(|conn| {
            let sql = format!(
                "INSERT INTO account (username, password) VALUES (?1, ?2) RETURNING {}",
                AccountRow::COLUMNS
            );
            let row = conn.query_row(
                &sql,
                (&account.username, &account.password),
                AccountRow::from_row,
            )?;
            Ok(row)
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| query_account_by_username(conn, username))
    }

    pub fn account_id_exists(&self, account_id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM account WHERE account_id = ?1)",
                [account_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    // -- Messages --

    pub fn insert_message(&self, message: &NewMessage) -> Result<MessageRow> {
        self.with_conn(|conn| {
            let sql = format!(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch)
                 VALUES (?1, ?2, ?3) RETURNING {}",
                MessageRow::COLUMNS
            );
            let row = conn.query_row(
                &sql,
                rusqlite::params![
                    message.posted_by,
                    message.message_text,
                    message.time_posted_epoch
                ],
                MessageRow::from_row,
            )?;
            Ok(row)
        })
    }

    pub fn get_message(&self, message_id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM message WHERE message_id = ?1", MessageRow::COLUMNS);
            conn.query_row(&sql, [message_id], MessageRow::from_row).optional()
        })
    }

    pub fn get_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} FROM message ORDER BY message_id", MessageRow::COLUMNS);
            query_messages(conn, &sql, [])
        })
    }

    pub fn get_messages_by_author(&self, posted_by: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} FROM message WHERE posted_by = ?1 ORDER BY message_id",
                MessageRow::COLUMNS
            );
            query_messages(conn, &sql, [posted_by])
        })
    }

    /// Rewrites the text of one message. Returns the number of rows changed.
    pub fn set_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE message SET message_text = ?2 WHERE message_id = ?1",
                rusqlite::params![message_id, message_text],
            )?;
            Ok(changed)
        })
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn remove_message(&self, message_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM message WHERE message_id = ?1", [message_id])?;
            Ok(removed)
        })
    }
}

fn query_account_by_username(conn: &Connection, username: &str) -> Result<Option<AccountRow>> {
    let sql = format!("SELECT {} FROM account WHERE username = ?1", AccountRow::COLUMNS);
    let mut stmt = conn.prepare(&sql)?;

    stmt.query_row([username], AccountRow::from_row).optional()
}

fn query_messages<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(sql)?;

    let rows = stmt
        .query_map(params, MessageRow::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
