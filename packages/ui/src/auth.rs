//! Login and logout controls.

use api::Credentials;
use dioxus::prelude::*;

use crate::actions;
use crate::use_shell;
use crate::views::ModalOverlay;

/// Button that opens the login dialog.
#[component]
pub fn LoginButton(
    #[props(default = "Log in".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut shell = use_shell();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| shell.write().show_login(),
            "{label}"
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let shell = use_shell();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| actions::logout(shell),
            "{label}"
        }
    }
}

/// Username and password form. Rendered only while the login dialog is open.
#[component]
pub fn LoginDialog() -> Element {
    let mut shell = use_shell();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if !shell.read().dialogs().login {
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match Credentials::new(username(), password()) {
            Ok(credentials) => {
                submitting.set(true);
                spawn(async move {
                    actions::login(shell, credentials).await;
                    submitting.set(false);
                    password.set(String::new());
                });
            }
            Err(e) => shell.write().report(e.into()),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| shell.write().hide_login(),
            form {
                class: "modal-body",
                onsubmit: handle_submit,
                h2 { "Log in" }
                label {
                    "Username"
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "buttons",
                    button {
                        r#type: "button",
                        class: "outline",
                        onclick: move |_| shell.write().hide_login(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: submitting(),
                        if submitting() { "Logging in..." } else { "Log in" }
                    }
                }
            }
        }
    }
}
