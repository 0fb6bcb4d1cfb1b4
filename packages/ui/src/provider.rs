//! Application shell context for the component tree.

use dioxus::prelude::*;
use store::ClientConfig;
use tracing::error;

use crate::actions;
use crate::platform::{make_shell, AppShell};

/// Get the application shell.
/// Re-renders the caller whenever the shell changes.
pub fn use_shell() -> Signal<AppShell> {
    use_context::<Signal<AppShell>>()
}

/// Provider component that owns the application shell.
/// Wrap your app with this component; it resumes a cached session on mount.
#[component]
pub fn ShellProvider(config: ClientConfig, children: Element) -> Element {
    let shell = use_hook(move || match make_shell(&config) {
        Ok(shell) => Ok(provide_context(Signal::new(shell))),
        Err(e) => {
            error!(error = %e, url = %config.api.base_url, "Cannot create API client");
            Err(e.to_string())
        }
    });

    let startup = shell.clone().ok();
    use_future(move || async move {
        if let Some(shell) = startup {
            actions::initialize(shell).await;
        }
    });

    match shell {
        Ok(_) => rsx! {
            {children}
        },
        Err(message) => rsx! {
            div {
                class: "startup-error",
                h2 { "StickyNotes cannot start" }
                p { "{message}" }
            }
        },
    }
}
