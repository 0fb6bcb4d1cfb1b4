//! Platform-specific construction of the application shell.
//!
//! - **Web** (WASM + `web` feature): session in `window.localStorage`, API URL
//!   from the compile-time `STICKYNOTES_API_URL`
//! - **Desktop** (native): session under `<data_dir>/<namespace>/`, config from
//!   `<config_dir>/stickynotes/config.toml` and the environment

use api::{HttpClient, Shell};
use store::ClientConfig;
use tracing::info;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::WebStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::FileStorage;

/// The shell as wired on this platform.
pub type AppShell = Shell<HttpClient, PlatformStorage>;

/// Load the client configuration for this platform.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("STICKYNOTES_API_URL") {
            Some(url) if !url.is_empty() => ClientConfig::default().with_base_url(url),
            _ => ClientConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let config = match dirs::config_dir() {
            Some(dir) => ClientConfig::load_or_default(
                &dir.join("stickynotes").join(ClientConfig::filename()),
            ),
            None => ClientConfig::default(),
        };
        config.with_env_overrides()
    }
}

/// Create the platform's durable session storage.
pub fn make_storage(config: &ClientConfig) -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let _ = config;
        store::WebStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        #[cfg(not(target_arch = "wasm32"))]
        let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
        #[cfg(target_arch = "wasm32")]
        let base = std::path::PathBuf::from(".");
        store::FileStorage::new(base.join(&config.storage.namespace))
    }
}

/// Build a logged-out shell for `config`.
pub fn make_shell(config: &ClientConfig) -> api::Result<AppShell> {
    let client = HttpClient::new(&config.api.base_url)?;
    info!(url = client.base_url(), "Notes server configured");
    Ok(Shell::new(client, make_storage(config)))
}
