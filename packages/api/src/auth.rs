//! Login endpoint.

use std::future::Future;

use store::{Credentials, User};
use tracing::{debug, info, warn};

use crate::client::{parse_json, server_message, HttpClient};
use crate::error::{ApiError, Result};

/// Exchanges credentials for an authenticated [`User`].
pub trait AuthApi {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<User>>;
}

impl AuthApi for HttpClient {
    /// `POST /api/login` with `{ username, password }`.
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        let url = self.endpoint(&["api", "login"])?;
        debug!(url = %url, username = %credentials.username(), "Attempting login");

        let response = self
            .http()
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status.is_success() {
            let user: User = parse_json(response, "login response").await?;
            info!(user = %user.identifier(), "Login successful");
            Ok(user)
        } else if status.as_u16() == 401 {
            let (_, message) = server_message(response).await;
            warn!(status = %status, error = %message, "Login failed: invalid credentials");
            Err(ApiError::AuthFailed(message))
        } else {
            let (status, message) = server_message(response).await;
            Err(ApiError::Server { status, message })
        }
    }
}
