#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "This crate contains the session lifecycle, the HTTP client adapter, the"]
#![doc = "domain models, and the task operations for the taskdeck client. It is used"]
#![doc = "by the main binary (`main.rs`) to wire up and run the CLI."]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod tasks;

pub use crate::api::ApiClient;
pub use crate::error::AppError;
pub use crate::session::SessionStore;
pub use crate::storage::SessionStorage;
