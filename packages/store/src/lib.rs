//! Platform-independent client state: domain models, local durable storage,
//! the session store, and client configuration.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

mod file_store;
pub use file_store::FileStorage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use config::ClientConfig;
pub use error::{ModelError, StorageError};
pub use models::{Credentials, NewNote, Note, User};
pub use session::{SessionStore, USER_KEY};
pub use storage::LocalStorage;
