//! # API crate: the client side of the StickyNotes server
//!
//! Everything the frontends need to talk to the notes server and to keep the
//! screen state in sync with it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpClient`]: base URL validation, reqwest client with timeouts, error body parsing |
//! | [`auth`] | [`AuthApi`]: `POST /api/login` |
//! | [`notes`] | [`NotesApi`] CRUD endpoints and the token-carrying [`NoteRepository`] |
//! | [`shell`] | [`Shell`]: session edges, note list, dialogs and error state |
//! | [`flow`] | Whole operations (login, fetch, create, update, delete) over any [`ShellAccess`] |
//! | [`error`] | [`ApiError`] and the crate [`Result`] alias |

pub mod auth;
pub mod client;
pub mod error;
pub mod flow;
pub mod notes;
pub mod shell;

pub use auth::AuthApi;
pub use client::HttpClient;
pub use error::{ApiError, Result};
pub use flow::ShellAccess;
pub use notes::{NoteRepository, NotesApi};
pub use shell::{Dialogs, ErrorMessage, Outcome, Pending, Shell, Transition};

pub use store::{Credentials, NewNote, Note, User};
