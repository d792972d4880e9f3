pub mod accounts;
pub mod error;
pub mod messages;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::{AppState, AppStateInner};
