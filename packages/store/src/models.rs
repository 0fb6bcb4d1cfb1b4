//! # Domain models shared by the client crates
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The authenticated identity: identifier, display name and bearer token. Stored as JSON under the `user` key and returned by the login endpoint. |
//! | [`Note`] | A note as the server returns it. |
//! | [`NewNote`] | Validated input for creating or replacing a note. |
//! | [`Credentials`] | Validated login form input. |
//!
//! [`User`] deserializes through [`RawUser`] so that a record with missing
//! fields, wrong types, or an empty token is rejected instead of producing a
//! half-initialised session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An authenticated user. The token is never empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUser")]
pub struct User {
    identifier: String,
    display_name: String,
    token: String,
}

/// Unvalidated wire shape of [`User`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    identifier: String,
    display_name: String,
    token: String,
}

impl TryFrom<RawUser> for User {
    type Error = ModelError;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        User::new(raw.identifier, raw.display_name, raw.token)
    }
}

impl User {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let identifier = identifier.into();
        let token = token.into();
        if identifier.trim().is_empty() {
            return Err(ModelError::InvalidUser("identifier is empty".into()));
        }
        if token.trim().is_empty() {
            return Err(ModelError::InvalidUser("token is empty".into()));
        }
        Ok(Self {
            identifier,
            display_name: display_name.into(),
            token,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display name, falling back to the identifier if none was given.
    pub fn display_name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.identifier
        } else {
            &self.display_name
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Parse a stored JSON record, failing on any schema mismatch.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A note owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
}

/// Body of a create or update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewNote {
    content: String,
}

impl NewNote {
    /// Trim `content` and reject it if nothing is left.
    pub fn new(content: impl AsRef<str>) -> Result<Self, ModelError> {
        let content = content.as_ref().trim();
        if content.is_empty() {
            return Err(ModelError::EmptyContent);
        }
        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Login form input, serialized as the login request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl AsRef<str>, password: impl Into<String>) -> Result<Self, ModelError> {
        let username = username.as_ref().trim();
        let password = password.into();
        if username.is_empty() {
            return Err(ModelError::MissingUsername);
        }
        if password.is_empty() {
            return Err(ModelError::MissingPassword);
        }
        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
