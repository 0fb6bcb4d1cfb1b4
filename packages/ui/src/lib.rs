//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod actions;

mod platform;
pub use platform::{load_config, make_shell, make_storage, AppShell, PlatformStorage};

pub mod views;

pub const NOTES_CSS: Asset = asset!("/assets/notes.css");

mod provider;
pub use provider::{use_shell, ShellProvider};

mod app_bar;
pub use app_bar::ApplicationBar;

mod auth;
pub use auth::{LoginButton, LoginDialog, LogoutButton};

mod error_dialog;
pub use error_dialog::ErrorDialog;

mod note_card;
pub use note_card::NoteCard;

mod note_form;
pub use note_form::{NewNoteButton, NoteForm};
