//! Shell operations driven from the UI event loop.
//!
//! The operations themselves live in [`api::flow`]; this module hands them a
//! handle that writes through the shell signal. Failures are already in the
//! shell's error state by the time these return.

use api::flow::{self, ShellAccess};
use api::{Credentials, HttpClient, NewNote, Shell};
use dioxus::prelude::*;
use tracing::debug;

use crate::platform::{AppShell, PlatformStorage};

/// Writes through the shell signal for the duration of one closure.
struct SignalShell(Signal<AppShell>);

impl ShellAccess for SignalShell {
    type Api = HttpClient;
    type Storage = PlatformStorage;

    fn update<R>(&mut self, f: impl FnOnce(&mut Shell<HttpClient, PlatformStorage>) -> R) -> R {
        f(&mut self.0.write())
    }
}

/// Resume the cached session and fetch its notes.
pub async fn initialize(shell: Signal<AppShell>) {
    let _ = flow::initialize(&mut SignalShell(shell)).await;
}

pub async fn login(shell: Signal<AppShell>, credentials: Credentials) {
    let _ = flow::login(&mut SignalShell(shell), credentials).await;
}

pub fn logout(mut shell: Signal<AppShell>) {
    if shell.write().logout().is_none() {
        debug!("Logout requested while logged out");
    }
}

/// Returns `true` when the server accepted the note.
pub async fn create_note(shell: Signal<AppShell>, input: NewNote) -> bool {
    flow::create_note(&mut SignalShell(shell), input).await.is_ok()
}

pub async fn update_note(shell: Signal<AppShell>, id: String, input: NewNote) {
    let _ = flow::update_note(&mut SignalShell(shell), &id, input).await;
}

pub async fn delete_note(shell: Signal<AppShell>, id: String) {
    let _ = flow::delete_note(&mut SignalShell(shell), &id).await;
}
