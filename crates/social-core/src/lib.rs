//! Validation and persistence rules for accounts and messages.
//!
//! Managers are constructed explicitly with the stores they use and hold no
//! other state. Business-rule failures come back as [`CoreError`] rejections;
//! only storage faults surface as [`CoreError::Storage`].

pub mod accounts;
pub mod error;
pub mod messages;
pub mod validation;

#[cfg(test)]
mod testing;

pub use accounts::AccountManager;
pub use error::{CoreError, CoreResult};
pub use messages::{Deletion, MessageManager};
