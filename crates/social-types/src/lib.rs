pub mod api;
pub mod models;

pub use models::{Account, Message, NewAccount, NewMessage};
