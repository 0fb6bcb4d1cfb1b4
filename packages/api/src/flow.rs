//! Whole shell operations: take a request out of the shell, await it, and
//! apply the result.
//!
//! The shell is reached through [`ShellAccess`] and never borrowed across an
//! `await`, so the same code runs against a plain `&mut Shell` in tests and
//! against a reactive handle in the UI. Every failure is recorded in the
//! shell's error state before it is returned.

use store::{Credentials, LocalStorage, NewNote};

use crate::auth::AuthApi;
use crate::error::{ApiError, Result};
use crate::notes::NotesApi;
use crate::shell::{Shell, Transition};

/// Short-lived mutable access to a [`Shell`].
pub trait ShellAccess {
    type Api: AuthApi + NotesApi + Clone;
    type Storage: LocalStorage;

    fn update<R>(&mut self, f: impl FnOnce(&mut Shell<Self::Api, Self::Storage>) -> R) -> R;
}

impl<A, S> ShellAccess for Shell<A, S>
where
    A: AuthApi + NotesApi + Clone,
    S: LocalStorage,
{
    type Api = A;
    type Storage = S;

    fn update<R>(&mut self, f: impl FnOnce(&mut Shell<A, S>) -> R) -> R {
        f(self)
    }
}

/// Resume the cached session and fetch its notes.
pub async fn initialize(shell: &mut impl ShellAccess) -> Result<()> {
    match shell.update(|s| s.restore_session()) {
        Some(Transition::LoggedIn) => refresh_notes(shell).await,
        _ => Ok(()),
    }
}

/// Authenticate, enter the session and fetch its notes.
pub async fn login(shell: &mut impl ShellAccess, credentials: Credentials) -> Result<()> {
    let auth = shell.update(|s| s.auth());
    let result = auth.login(&credentials).await;
    if shell.update(|s| s.apply_login(result))? == Some(Transition::LoggedIn) {
        refresh_notes(shell).await?;
    }
    Ok(())
}

/// Fetch the full note list for the current session.
pub async fn refresh_notes(shell: &mut impl ShellAccess) -> Result<()> {
    let pending = shell
        .update(|s| s.begin_request())
        .ok_or(ApiError::AuthRequired)?;
    let result = pending.repo().list_all().await;
    shell
        .update(|s| s.apply_listed(pending.epoch(), result))
        .map(drop)
}

pub async fn create_note(shell: &mut impl ShellAccess, input: NewNote) -> Result<()> {
    let pending = shell
        .update(|s| s.begin_request())
        .ok_or(ApiError::AuthRequired)?;
    let result = pending.repo().create(&input).await;
    shell
        .update(|s| s.apply_created(pending.epoch(), result))
        .map(drop)
}

pub async fn update_note(shell: &mut impl ShellAccess, id: &str, input: NewNote) -> Result<()> {
    let pending = shell
        .update(|s| s.begin_request())
        .ok_or(ApiError::AuthRequired)?;
    let result = pending.repo().update(id, &input).await;
    shell
        .update(|s| s.apply_updated(pending.epoch(), id, result))
        .map(drop)
}

pub async fn delete_note(shell: &mut impl ShellAccess, id: &str) -> Result<()> {
    let pending = shell
        .update(|s| s.begin_request())
        .ok_or(ApiError::AuthRequired)?;
    let result = pending.repo().remove(id).await;
    shell
        .update(|s| s.apply_removed(pending.epoch(), id, result))
        .map(drop)
}
