//! # Application shell: session and note list state machine
//!
//! [`Shell`] owns everything the notes screen renders: the current [`User`],
//! the in-memory note list, the dialog flags and the error message. It has no UI
//! framework dependency; the Dioxus views wrap it in a signal.
//!
//! ## Session edges
//!
//! The shell is either logged out or logged in. Session side effects run only
//! when that changes:
//!
//! | Edge | Effects |
//! |------|---------|
//! | logged out → logged in | persist the user (on login), attach the token, empty the list, bump the epoch |
//! | logged in → logged out | clear the stored user, detach the token, empty the list, reset dialogs, bump the epoch |
//!
//! Entering a session returns [`Transition::LoggedIn`]; the caller then issues
//! the one note fetch for that session. Dialog toggles never fetch.
//!
//! ## Requests and results
//!
//! Every network operation comes in two halves so a UI event loop can await the
//! request without holding the shell:
//!
//! 1. [`Shell::begin_request`] hands out a [`Pending`]: a clone of the note
//!    repository stamped with the current session epoch.
//! 2. When the request resolves, the matching `apply_*` method updates the
//!    list (append, replace by id, or filter out by id) or records the error.
//!
//! Results are applied in the order they arrive, not the order they were
//! issued. A result stamped with an older epoch belongs to a session that has
//! since ended and is dropped ([`Outcome::Stale`]).
//!
//! [`crate::flow`] runs both halves back to back.

use store::{LocalStorage, ModelError, Note, SessionStore, User};
use tracing::{debug, error, info, warn};

use crate::auth::AuthApi;
use crate::error::{ApiError, Result};
use crate::notes::{NoteRepository, NotesApi};

/// A change of session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    LoggedIn,
    LoggedOut,
}

/// Whether a resolved request changed the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The request belonged to a session that has since ended.
    Stale,
}

/// Visibility of the shell's dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dialogs {
    pub login: bool,
    pub note_form: bool,
    /// Id of the note being edited, if any.
    pub editing: Option<String>,
}

/// The error currently shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorMessage {
    pub title: String,
    pub detail: String,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl From<&ApiError> for ErrorMessage {
    fn from(e: &ApiError) -> Self {
        Self::new(e.title(), e.user_message())
    }
}

impl From<ModelError> for ErrorMessage {
    fn from(e: ModelError) -> Self {
        Self::from(&ApiError::Invalid(e))
    }
}

/// A note request prepared from the shell's current session.
#[derive(Clone)]
pub struct Pending<A> {
    repo: NoteRepository<A>,
    epoch: u64,
}

impl<A> Pending<A> {
    pub fn repo(&self) -> &NoteRepository<A> {
        &self.repo
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Top-level client state: session, notes, dialogs and the current error.
pub struct Shell<A, S> {
    sessions: SessionStore<S>,
    repo: NoteRepository<A>,
    user: Option<User>,
    notes: Vec<Note>,
    dialogs: Dialogs,
    error: Option<ErrorMessage>,
    epoch: u64,
}

impl<A, S> Shell<A, S>
where
    A: AuthApi + NotesApi + Clone,
    S: LocalStorage,
{
    /// A logged-out shell. Call [`crate::flow::initialize`] (or
    /// [`restore_session`](Self::restore_session)) to resume a cached session.
    pub fn new(api: A, storage: S) -> Self {
        Self {
            sessions: SessionStore::new(storage),
            repo: NoteRepository::new(api),
            user: None,
            notes: Vec::new(),
            dialogs: Dialogs::default(),
            error: None,
            epoch: 0,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(User::display_name)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn dialogs(&self) -> &Dialogs {
        &self.dialogs
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    /// Counter bumped on every session edge.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn repository(&self) -> &NoteRepository<A> {
        &self.repo
    }

    pub fn session_store(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// True when the "no notes yet" hint should replace the list.
    pub fn shows_empty_hint(&self) -> bool {
        self.notes.is_empty()
    }

    // ---- session edges -------------------------------------------------

    /// Resume the cached session, if any. Does not fetch notes.
    pub fn restore_session(&mut self) -> Option<Transition> {
        if self.user.is_some() {
            return None;
        }
        let user = self.sessions.restore()?;
        self.enter_session(user, false)
    }

    /// End the session. A no-op when already logged out.
    pub fn logout(&mut self) -> Option<Transition> {
        let user = self.user.take()?;
        if let Err(e) = self.sessions.clear() {
            warn!(error = %e, "Failed to clear cached session");
        }
        self.repo.clear_token();
        self.notes.clear();
        self.dialogs = Dialogs::default();
        self.epoch += 1;
        info!(user = %user.identifier(), "Logged out");
        Some(Transition::LoggedOut)
    }

    fn enter_session(&mut self, user: User, persist: bool) -> Option<Transition> {
        if self.user.as_ref() == Some(&user) {
            return None;
        }
        if self.user.is_some() {
            self.logout();
        }
        if persist {
            if let Err(e) = self.sessions.persist(&user) {
                warn!(error = %e, "Failed to persist session; it will not survive a restart");
            }
        }
        self.repo.set_token(user.token());
        self.notes.clear();
        self.dialogs.login = false;
        self.epoch += 1;
        info!(user = %user.identifier(), "Session started");
        self.user = Some(user);
        Some(Transition::LoggedIn)
    }

    // ---- requests ------------------------------------------------------

    /// Prepare a note request for the current session.
    ///
    /// Records [`ApiError::AuthRequired`] as the current error and returns
    /// `None` when logged out.
    pub fn begin_request(&mut self) -> Option<Pending<A>> {
        if !self.repo.has_token() {
            self.fail(ApiError::AuthRequired);
            return None;
        }
        Some(Pending {
            repo: self.repo.clone(),
            epoch: self.epoch,
        })
    }

    /// The auth client used for logging in.
    pub fn auth(&self) -> A {
        self.repo.api().clone()
    }

    fn is_stale(&self, epoch: u64, what: &str) -> bool {
        if epoch == self.epoch {
            return false;
        }
        warn!(epoch, current = self.epoch, "Discarding {what} from an ended session");
        true
    }

    fn fail(&mut self, e: ApiError) -> ApiError {
        error!(error = %e, "Request failed");
        self.error = Some(ErrorMessage::from(&e));
        e
    }

    /// Apply a login result. Success closes the login dialog and enters the
    /// session; failure keeps the dialog open and records the error.
    pub fn apply_login(&mut self, result: Result<User>) -> Result<Option<Transition>> {
        match result {
            Ok(user) => {
                self.dialogs.login = false;
                Ok(self.enter_session(user, true))
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Replace the list with a fetched one.
    pub fn apply_listed(&mut self, epoch: u64, result: Result<Vec<Note>>) -> Result<Outcome> {
        if self.is_stale(epoch, "note list") {
            return Ok(Outcome::Stale);
        }
        match result {
            Ok(notes) => {
                debug!(count = notes.len(), "Note list replaced");
                self.notes = notes;
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Append a created note and close the note form.
    pub fn apply_created(&mut self, epoch: u64, result: Result<Note>) -> Result<Outcome> {
        if self.is_stale(epoch, "created note") {
            return Ok(Outcome::Stale);
        }
        match result {
            Ok(note) => {
                debug!(id = %note.id, "Note created");
                self.notes.push(note);
                self.dialogs.note_form = false;
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Replace the note with id `id` and end editing it.
    pub fn apply_updated(&mut self, epoch: u64, id: &str, result: Result<Note>) -> Result<Outcome> {
        if self.is_stale(epoch, "updated note") {
            return Ok(Outcome::Stale);
        }
        match result {
            Ok(updated) => {
                debug!(id, "Note updated");
                for note in self.notes.iter_mut().filter(|n| n.id == id) {
                    *note = updated.clone();
                }
                if self.dialogs.editing.as_deref() == Some(id) {
                    self.dialogs.editing = None;
                }
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Drop the note with id `id`.
    pub fn apply_removed(&mut self, epoch: u64, id: &str, result: Result<()>) -> Result<Outcome> {
        if self.is_stale(epoch, "deleted note") {
            return Ok(Outcome::Stale);
        }
        match result {
            Ok(()) => {
                debug!(id, "Note deleted");
                self.notes.retain(|n| n.id != id);
                if self.dialogs.editing.as_deref() == Some(id) {
                    self.dialogs.editing = None;
                }
                Ok(Outcome::Applied)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ---- dialogs -------------------------------------------------------

    pub fn show_login(&mut self) {
        if !self.is_logged_in() {
            self.dialogs.login = true;
        }
    }

    pub fn hide_login(&mut self) {
        self.dialogs.login = false;
    }

    pub fn show_note_form(&mut self) {
        if self.is_logged_in() {
            self.dialogs.note_form = true;
        }
    }

    pub fn hide_note_form(&mut self) {
        self.dialogs.note_form = false;
    }

    /// Start editing note `id`; ignored for unknown ids.
    pub fn begin_edit(&mut self, id: &str) {
        if self.notes.iter().any(|n| n.id == id) {
            self.dialogs.editing = Some(id.to_string());
        }
    }

    pub fn cancel_edit(&mut self) {
        self.dialogs.editing = None;
    }

    /// Show `message`, replacing any current error.
    pub fn report(&mut self, message: ErrorMessage) {
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow;
    use std::sync::{Arc, Mutex};
    use store::{Credentials, MemoryStorage, NewNote, USER_KEY};

    /// In-process stand-in for the notes server.
    #[derive(Clone, Default)]
    struct FakeServer {
        state: Arc<Mutex<FakeState>>,
    }

    #[derive(Default)]
    struct FakeState {
        notes: Vec<Note>,
        next_id: u32,
        fail_with: Option<String>,
        tokens_seen: Vec<String>,
        list_calls: usize,
    }

    const GOOD_TOKEN: &str = "token-alice";

    impl FakeServer {
        fn with_notes(notes: &[(&str, &str)]) -> Self {
            let server = Self::default();
            server.state.lock().unwrap().notes = notes
                .iter()
                .map(|(id, content)| Note {
                    id: id.to_string(),
                    content: content.to_string(),
                })
                .collect();
            server
        }

        fn fail_next(&self, message: &str) {
            self.state.lock().unwrap().fail_with = Some(message.to_string());
        }

        fn list_calls(&self) -> usize {
            self.state.lock().unwrap().list_calls
        }

        fn tokens_seen(&self) -> Vec<String> {
            self.state.lock().unwrap().tokens_seen.clone()
        }

        fn check(&self, token: &str) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.tokens_seen.push(token.to_string());
            if let Some(message) = state.fail_with.take() {
                return Err(ApiError::Server {
                    status: 500,
                    message,
                });
            }
            if token != GOOD_TOKEN {
                return Err(ApiError::Server {
                    status: 401,
                    message: "token missing or invalid".into(),
                });
            }
            Ok(())
        }
    }

    impl AuthApi for FakeServer {
        async fn login(&self, credentials: &Credentials) -> Result<User> {
            if credentials.username() == "alice" {
                Ok(User::new("alice", "Alice", GOOD_TOKEN).unwrap())
            } else {
                Err(ApiError::AuthFailed("invalid username or password".into()))
            }
        }
    }

    impl NotesApi for FakeServer {
        async fn list_notes(&self, token: &str) -> Result<Vec<Note>> {
            self.check(token)?;
            let mut state = self.state.lock().unwrap();
            state.list_calls += 1;
            Ok(state.notes.clone())
        }

        async fn create_note(&self, token: &str, note: &NewNote) -> Result<Note> {
            self.check(token)?;
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let created = Note {
                id: format!("n{}", state.next_id),
                content: note.content().to_string(),
            };
            state.notes.push(created.clone());
            Ok(created)
        }

        async fn update_note(&self, token: &str, id: &str, note: &NewNote) -> Result<Note> {
            self.check(token)?;
            let updated = Note {
                id: id.to_string(),
                content: note.content().to_string(),
            };
            let mut state = self.state.lock().unwrap();
            for n in state.notes.iter_mut().filter(|n| n.id == id) {
                *n = updated.clone();
            }
            Ok(updated)
        }

        async fn delete_note(&self, token: &str, id: &str) -> Result<()> {
            self.check(token)?;
            self.state.lock().unwrap().notes.retain(|n| n.id != id);
            Ok(())
        }
    }

    fn alice() -> User {
        User::new("alice", "Alice", GOOD_TOKEN).unwrap()
    }

    fn creds(username: &str) -> Credentials {
        Credentials::new(username, "secret").unwrap()
    }

    fn note(content: &str) -> NewNote {
        NewNote::new(content).unwrap()
    }

    fn logged_in_shell(server: &FakeServer) -> Shell<FakeServer, MemoryStorage> {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, &alice().to_json().unwrap()).unwrap();
        Shell::new(server.clone(), storage)
    }

    #[tokio::test]
    async fn test_initialize_without_cached_session() {
        let server = FakeServer::default();
        let mut shell = Shell::new(server.clone(), MemoryStorage::new());

        flow::initialize(&mut shell).await.unwrap();

        assert!(!shell.is_logged_in());
        assert!(shell.notes().is_empty());
        assert!(shell.shows_empty_hint());
        assert_eq!(server.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_initialize_restores_session_and_fetches_with_token() {
        let server = FakeServer::with_notes(&[("n1", "first"), ("n2", "second")]);
        let mut shell = logged_in_shell(&server);

        flow::initialize(&mut shell).await.unwrap();

        assert_eq!(shell.user(), Some(&alice()));
        assert_eq!(shell.display_name(), Some("Alice"));
        assert_eq!(shell.notes().len(), 2);
        assert_eq!(server.list_calls(), 1);
        assert_eq!(server.tokens_seen(), vec![GOOD_TOKEN.to_string()]);
    }

    #[tokio::test]
    async fn test_initialize_with_corrupted_storage_stays_logged_out() {
        let server = FakeServer::default();
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "{\"identifier\":").unwrap();
        let mut shell = Shell::new(server.clone(), storage.clone());

        flow::initialize(&mut shell).await.unwrap();

        assert!(!shell.is_logged_in());
        assert!(!shell.repository().has_token());
        assert!(shell.error().is_none());
        assert_eq!(server.list_calls(), 0);
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_persists_and_fetches() {
        let server = FakeServer::with_notes(&[("n1", "existing")]);
        let storage = MemoryStorage::new();
        let mut shell = Shell::new(server.clone(), storage.clone());
        shell.show_login();
        assert!(shell.dialogs().login);

        flow::login(&mut shell, creds("alice")).await.unwrap();

        assert!(shell.is_logged_in());
        assert!(!shell.dialogs().login);
        assert_eq!(shell.notes().len(), 1);
        assert_eq!(server.list_calls(), 1);
        assert_eq!(SessionStore::new(storage).restore(), Some(alice()));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_dialog_open() {
        let server = FakeServer::default();
        let storage = MemoryStorage::new();
        let mut shell = Shell::new(server.clone(), storage.clone());
        shell.show_login();

        let err = flow::login(&mut shell, creds("mallory")).await.unwrap_err();

        assert!(matches!(err, ApiError::AuthFailed(_)));
        assert!(!shell.is_logged_in());
        assert!(shell.dialogs().login);
        let message = shell.error().unwrap();
        assert_eq!(message.title, "Login failed");
        assert_eq!(message.detail, "invalid username or password");
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
        assert_eq!(server.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_storage_token_and_user() {
        let server = FakeServer::with_notes(&[("n1", "first")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        shell.show_note_form();

        assert_eq!(shell.logout(), Some(Transition::LoggedOut));

        assert!(shell.user().is_none());
        assert!(!shell.repository().has_token());
        assert!(shell.session_store().restore().is_none());
        assert!(shell.notes().is_empty());
        assert_eq!(shell.dialogs(), &Dialogs::default());

        // Second logout is not an edge
        assert_eq!(shell.logout(), None);
    }

    #[tokio::test]
    async fn test_create_appends_returned_note() {
        let server = FakeServer::with_notes(&[("n0", "old")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        shell.show_note_form();
        let before = shell.notes().len();

        flow::create_note(&mut shell, note("Buy milk")).await.unwrap();

        assert_eq!(shell.notes().len(), before + 1);
        let last = shell.notes().last().unwrap();
        assert_eq!(last.content, "Buy milk");
        assert_eq!(last.id, "n1");
        assert!(!shell.dialogs().note_form);
        // Created locally, not re-fetched
        assert_eq!(server.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_note() {
        let server = FakeServer::with_notes(&[("a", "one"), ("b", "two"), ("c", "three")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        shell.begin_edit("b");
        assert_eq!(shell.dialogs().editing.as_deref(), Some("b"));

        flow::update_note(&mut shell, "b", note("TWO")).await.unwrap();

        let contents: Vec<_> = shell.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "TWO", "three"]);
        assert!(shell.dialogs().editing.is_none());
    }

    #[tokio::test]
    async fn test_remove_filters_out_by_id() {
        let server = FakeServer::with_notes(&[("a", "one"), ("b", "two")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();

        flow::delete_note(&mut shell, "a").await.unwrap();

        assert_eq!(shell.notes().len(), 1);
        assert!(shell.notes().iter().all(|n| n.id != "a"));
    }

    #[tokio::test]
    async fn test_failed_request_leaves_list_unchanged() {
        let server = FakeServer::with_notes(&[("a", "one")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        let before = shell.notes().to_vec();

        server.fail_next("database is down");
        assert!(flow::create_note(&mut shell, note("x")).await.is_err());
        assert_eq!(shell.notes(), before.as_slice());
        assert_eq!(shell.error().unwrap().detail, "database is down");

        shell.dismiss_error();
        assert!(shell.error().is_none());

        server.fail_next("nope");
        assert!(flow::delete_note(&mut shell, "a").await.is_err());
        assert_eq!(shell.notes(), before.as_slice());
    }

    #[tokio::test]
    async fn test_failed_create_keeps_note_form_open() {
        let server = FakeServer::default();
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        shell.show_note_form();

        server.fail_next("disk full");
        assert!(flow::create_note(&mut shell, note("Buy milk")).await.is_err());
        assert!(shell.dialogs().note_form);
        assert!(shell.notes().is_empty());

        // Retrying the same input succeeds and closes the form
        shell.dismiss_error();
        flow::create_note(&mut shell, note("Buy milk")).await.unwrap();
        assert!(!shell.dialogs().note_form);
        assert_eq!(shell.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_list_unchanged() {
        let server = FakeServer::with_notes(&[("a", "one"), ("b", "two")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();
        shell.begin_edit("b");
        let before = shell.notes().to_vec();

        server.fail_next("conflict");
        let err = flow::update_note(&mut shell, "b", note("TWO")).await.unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert_eq!(shell.notes(), before.as_slice());
        assert_eq!(shell.dialogs().editing.as_deref(), Some("b"));
        assert_eq!(shell.error().unwrap().detail, "conflict");
    }

    #[tokio::test]
    async fn test_failed_initial_fetch_keeps_session() {
        let server = FakeServer::with_notes(&[("a", "one")]);
        let mut shell = logged_in_shell(&server);

        server.fail_next("service unavailable");
        assert!(flow::initialize(&mut shell).await.is_err());

        assert_eq!(shell.user(), Some(&alice()));
        assert!(shell.repository().has_token());
        assert!(shell.notes().is_empty());
        assert_eq!(shell.error().unwrap().detail, "service unavailable");

        // The user can retry without logging in again
        shell.dismiss_error();
        flow::refresh_notes(&mut shell).await.unwrap();
        assert_eq!(shell.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_requests_require_session() {
        let server = FakeServer::default();
        let mut shell = Shell::new(server.clone(), MemoryStorage::new());

        let err = flow::create_note(&mut shell, note("x")).await.unwrap_err();

        assert!(matches!(err, ApiError::AuthRequired));
        assert_eq!(shell.error().unwrap().title, "Not logged in");
        assert!(server.tokens_seen().is_empty());
    }

    #[tokio::test]
    async fn test_results_apply_in_resolution_order() {
        let server = FakeServer::with_notes(&[("a", "one")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();

        // Two edits of the same note in flight; the first-issued resolves last
        let first = shell.begin_request().unwrap();
        let second = shell.begin_request().unwrap();
        let first_result = first.repo().update("a", &note("first edit")).await;
        let second_result = second.repo().update("a", &note("second edit")).await;

        shell
            .apply_updated(second.epoch(), "a", second_result)
            .unwrap();
        shell.apply_updated(first.epoch(), "a", first_result).unwrap();

        assert_eq!(shell.notes()[0].content, "first edit");
    }

    #[tokio::test]
    async fn test_results_from_ended_session_are_discarded() {
        let server = FakeServer::with_notes(&[("a", "one")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();

        let pending = shell.begin_request().unwrap();
        let result = pending.repo().create(&note("late")).await;
        shell.logout();

        assert_eq!(
            shell.apply_created(pending.epoch(), result).unwrap(),
            Outcome::Stale
        );
        assert!(shell.notes().is_empty());
    }

    #[tokio::test]
    async fn test_dialog_toggles_never_fetch() {
        let server = FakeServer::with_notes(&[("a", "one")]);
        let mut shell = logged_in_shell(&server);
        flow::initialize(&mut shell).await.unwrap();

        shell.show_note_form();
        shell.hide_note_form();
        shell.begin_edit("a");
        shell.cancel_edit();
        shell.begin_edit("missing");
        assert!(shell.dialogs().editing.is_none());

        // Login dialog cannot open while logged in
        shell.show_login();
        assert!(!shell.dialogs().login);

        assert_eq!(server.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_note_form_requires_session() {
        let mut shell = Shell::new(FakeServer::default(), MemoryStorage::new());
        shell.show_note_form();
        assert!(!shell.dialogs().note_form);
    }

    #[tokio::test]
    async fn test_restore_is_not_repeated_while_logged_in() {
        let server = FakeServer::default();
        let mut shell = logged_in_shell(&server);

        assert_eq!(shell.restore_session(), Some(Transition::LoggedIn));
        let epoch = shell.epoch();
        assert_eq!(shell.restore_session(), None);
        assert_eq!(shell.epoch(), epoch);
    }

    #[tokio::test]
    async fn test_buy_milk_scenario() {
        let server = FakeServer::default();
        let mut shell = Shell::new(server.clone(), MemoryStorage::new());

        flow::initialize(&mut shell).await.unwrap();
        assert!(!shell.is_logged_in());
        assert!(shell.notes().is_empty());

        flow::login(&mut shell, creds("alice")).await.unwrap();
        assert!(shell.is_logged_in());
        assert_eq!(server.list_calls(), 1);

        flow::create_note(&mut shell, note("Buy milk")).await.unwrap();
        assert_eq!(shell.notes().len(), 1);

        let id = shell.notes()[0].id.clone();
        flow::delete_note(&mut shell, &id).await.unwrap();
        assert!(shell.notes().is_empty());
    }

    #[test]
    fn test_validation_errors_become_messages() {
        let message = ErrorMessage::from(ModelError::EmptyContent);
        assert_eq!(message.title, "Invalid input");
        assert_eq!(message.detail, "Note content cannot be empty");
    }
}
