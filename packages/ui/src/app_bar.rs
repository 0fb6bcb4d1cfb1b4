use dioxus::prelude::*;

use crate::auth::{LoginButton, LogoutButton};
use crate::use_shell;

/// Top bar with the app title and the session controls.
#[component]
pub fn ApplicationBar() -> Element {
    let shell = use_shell();
    let name = shell.read().display_name().map(str::to_owned);

    rsx! {
        header {
            class: "app-bar",
            h1 { "StickyNotes" }
            div {
                class: "session",
                if let Some(name) = name {
                    span { class: "display-name", "{name}" }
                    LogoutButton { class: "outline" }
                } else {
                    LoginButton { class: "outline" }
                }
            }
        }
    }
}
