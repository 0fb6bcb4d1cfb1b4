use dioxus::prelude::*;

use crate::views::EmptyNotes;
use crate::{use_shell, ApplicationBar, ErrorDialog, LoginDialog, NewNoteButton, NoteCard, NoteForm};

/// The single screen of the app: bar, note grid and every dialog.
#[component]
pub fn NotesView() -> Element {
    let shell = use_shell();
    let (logged_in, empty, notes) = {
        let shell = shell.read();
        (shell.is_logged_in(), shell.shows_empty_hint(), shell.notes().to_vec())
    };

    rsx! {
        ApplicationBar {}
        main {
            if empty {
                EmptyNotes { logged_in }
            } else {
                div {
                    class: "notes-grid",
                    for note in notes {
                        NoteCard { key: "{note.id}", note }
                    }
                }
            }
        }
        NewNoteButton {}
        NoteForm {}
        LoginDialog {}
        ErrorDialog {}
    }
}
