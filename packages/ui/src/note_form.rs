use api::NewNote;
use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::views::ModalOverlay;
use crate::{actions, use_shell, Icon};

/// Floating button that opens the new note form. Hidden while logged out.
#[component]
pub fn NewNoteButton() -> Element {
    let mut shell = use_shell();
    if !shell.read().is_logged_in() {
        return rsx! {};
    }

    rsx! {
        button {
            class: "fab",
            title: "New note",
            onclick: move |_| shell.write().show_note_form(),
            Icon { icon: FaPlus, width: 20, height: 20 }
        }
    }
}

/// Modal form for writing a new note.
#[component]
pub fn NoteForm() -> Element {
    let mut shell = use_shell();
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if !shell.read().dialogs().note_form {
        return rsx! {};
    }

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        match NewNote::new(content()) {
            Ok(input) => {
                submitting.set(true);
                spawn(async move {
                    // Cleared only once the server has the note
                    if actions::create_note(shell, input).await {
                        content.set(String::new());
                    }
                    submitting.set(false);
                });
            }
            Err(e) => shell.write().report(e.into()),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| shell.write().hide_note_form(),
            div {
                class: "modal-body note-form",
                h2 { "New note" }
                textarea {
                    placeholder: "Start writing...",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
                div {
                    class: "buttons",
                    button {
                        class: "outline",
                        onclick: move |_| shell.write().hide_note_form(),
                        "Cancel"
                    }
                    button {
                        class: "primary",
                        disabled: submitting(),
                        onclick: handle_submit,
                        if submitting() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
