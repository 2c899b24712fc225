//! Response DTOs for the auth endpoints.
//!
//! Profile and link shapes are shared with the server through the `profile`
//! crate; only the auth payloads live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// `{ "message": ... }` confirmation body from signup and password reset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Provider id token handed out for bearer calls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdTokenResponse {
    pub id_token: String,
}
