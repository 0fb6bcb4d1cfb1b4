use dioxus::prelude::*;

use crate::use_shell;
use crate::views::ModalOverlay;

/// Modal showing the shell's current error until dismissed.
#[component]
pub fn ErrorDialog() -> Element {
    let mut shell = use_shell();
    let Some(error) = shell.read().error().cloned() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| shell.write().dismiss_error(),
            div {
                class: "modal-body",
                role: "alertdialog",
                h2 { "{error.title}" }
                p { "{error.detail}" }
                div {
                    class: "buttons",
                    button {
                        class: "primary",
                        onclick: move |_| shell.write().dismiss_error(),
                        "OK"
                    }
                }
            }
        }
    }
}
