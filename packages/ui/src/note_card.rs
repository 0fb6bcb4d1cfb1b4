use api::{NewNote, Note};
use dioxus::prelude::*;

use crate::icons::{FaPen, FaTrashCan};
use crate::{actions, use_shell, Icon};

/// A single note. Switches to an inline editor while it is the one being edited.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let mut shell = use_shell();
    let editing = shell.read().dialogs().editing.as_deref() == Some(note.id.as_str());

    if editing {
        return rsx! {
            NoteEditor { note }
        };
    }

    let edit_id = note.id.clone();
    let delete_id = note.id.clone();

    rsx! {
        article {
            class: "note-card",
            p { "{note.content}" }
            div {
                class: "actions",
                button {
                    class: "ghost",
                    title: "Edit note",
                    onclick: move |_| shell.write().begin_edit(&edit_id),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: "ghost danger",
                    title: "Delete note",
                    onclick: move |_| {
                        let id = delete_id.clone();
                        spawn(actions::delete_note(shell, id));
                    },
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
fn NoteEditor(note: Note) -> Element {
    let mut shell = use_shell();
    let mut content = use_signal({
        let initial = note.content.clone();
        move || initial
    });

    let handle_save = move |_| match NewNote::new(content()) {
        Ok(input) => {
            spawn(actions::update_note(shell, note.id.clone(), input));
        }
        Err(e) => shell.write().report(e.into()),
    };

    rsx! {
        article {
            class: "note-card",
            textarea {
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }
            div {
                class: "actions",
                button {
                    class: "outline",
                    onclick: move |_| shell.write().cancel_edit(),
                    "Cancel"
                }
                button {
                    class: "primary",
                    onclick: handle_save,
                    "Save"
                }
            }
        }
    }
}
