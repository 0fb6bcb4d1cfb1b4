use dioxus::prelude::*;

/// Hint shown in place of the note grid when there is nothing to display.
#[component]
pub fn EmptyNotes(logged_in: bool) -> Element {
    rsx! {
        div {
            class: "empty-hint",
            if logged_in {
                p { "Click the button in the bottom-right corner to write your first note!" }
            } else {
                p { "Log in to start taking notes." }
            }
        }
    }
}
