//! # Note repository client
//!
//! [`NotesApi`] is the raw CRUD surface of the notes server; every call takes
//! the bearer token explicitly. [`NoteRepository`] pairs an API with the token
//! of the current session so callers only set it once per session.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_all`](NoteRepository::list_all) | `GET /api/notes` |
//! | [`create`](NoteRepository::create) | `POST /api/notes` |
//! | [`update`](NoteRepository::update) | `PUT /api/notes/{id}` |
//! | [`remove`](NoteRepository::remove) | `DELETE /api/notes/{id}` |

use std::future::Future;

use store::{NewNote, Note};
use tracing::debug;

use crate::client::{parse_json, server_message, HttpClient};
use crate::error::{ApiError, Result};

/// CRUD operations on the remote note store.
pub trait NotesApi {
    fn list_notes(&self, token: &str) -> impl Future<Output = Result<Vec<Note>>>;
    fn create_note(&self, token: &str, note: &NewNote) -> impl Future<Output = Result<Note>>;
    fn update_note(
        &self,
        token: &str,
        id: &str,
        note: &NewNote,
    ) -> impl Future<Output = Result<Note>>;
    fn delete_note(&self, token: &str, id: &str) -> impl Future<Output = Result<()>>;
}

impl NotesApi for HttpClient {
    async fn list_notes(&self, token: &str) -> Result<Vec<Note>> {
        let url = self.endpoint(&["api", "notes"])?;
        debug!(url = %url, "Fetching notes");

        let response = self
            .http()
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            let notes: Vec<Note> = parse_json(response, "note list").await?;
            debug!(count = notes.len(), "Fetched notes");
            Ok(notes)
        } else {
            let (status, message) = server_message(response).await;
            Err(ApiError::Server { status, message })
        }
    }

    async fn create_note(&self, token: &str, note: &NewNote) -> Result<Note> {
        let url = self.endpoint(&["api", "notes"])?;
        debug!(url = %url, "Creating note");

        let response = self
            .http()
            .post(url)
            .bearer_auth(token)
            .json(note)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            parse_json(response, "created note").await
        } else {
            let (status, message) = server_message(response).await;
            Err(ApiError::Server { status, message })
        }
    }

    async fn update_note(&self, token: &str, id: &str, note: &NewNote) -> Result<Note> {
        let url = self.endpoint(&["api", "notes", id])?;
        debug!(url = %url, "Updating note");

        let response = self
            .http()
            .put(url)
            .bearer_auth(token)
            .json(note)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            parse_json(response, "updated note").await
        } else {
            let (status, message) = server_message(response).await;
            Err(ApiError::Server { status, message })
        }
    }

    async fn delete_note(&self, token: &str, id: &str) -> Result<()> {
        let url = self.endpoint(&["api", "notes", id])?;
        debug!(url = %url, "Deleting note");

        let response = self
            .http()
            .delete(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            let (status, message) = server_message(response).await;
            Err(ApiError::Server { status, message })
        }
    }
}

/// A [`NotesApi`] bound to the token of the current session.
///
/// Owned by the application shell; clones are independent, so a clone taken
/// for an in-flight request keeps the token it was issued with.
#[derive(Clone)]
pub struct NoteRepository<A> {
    api: A,
    token: Option<String>,
}

impl<A> NoteRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api, token: None }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Attach the bearer token used by subsequent calls.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Detach the token; note calls fail with [`ApiError::AuthRequired`] until
    /// a new one is set.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(ApiError::AuthRequired)
    }
}

impl<A: NotesApi> NoteRepository<A> {
    /// All notes of the current user, in server order.
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        self.api.list_notes(self.token()?).await
    }

    /// Create a note; the server assigns its id.
    pub async fn create(&self, note: &NewNote) -> Result<Note> {
        self.api.create_note(self.token()?, note).await
    }

    /// Replace the content of note `id`.
    pub async fn update(&self, id: &str, note: &NewNote) -> Result<Note> {
        self.api.update_note(self.token()?, id, note).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.api.delete_note(self.token()?, id).await
    }
}
