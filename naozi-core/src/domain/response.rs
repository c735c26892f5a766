//! Backend response envelope
//!
//! Every logical operation resolves to the same shape: `success` plus a
//! human-readable `message` on failure, plus whatever operation-specific
//! fields the backend chose to include. Callers always get this struct back;
//! there is no exception-only failure path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::user::UserRecord;

/// Message used whenever the backend cannot be reached or answers with
/// something that is not JSON. Transport and application failures are
/// indistinguishable in the envelope; that is an accepted limitation.
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not reach the server. Please try again.";

/// Message returned for operations that need a session when none exists.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in first";

/// One row of the service catalogue. The sheet behind the backend is free
/// to grow columns, so everything beyond the name is optional and unknown
/// fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceEntry {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One row of a user's order history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    pub order_id: String,
    pub service_type: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<String>,
    pub file_url: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Uniform result of every API operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<OrderRecord>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// A bare success with no extra fields.
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    /// A failure carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// The uniform shape surfaced for any transport-level failure.
    pub fn connection_failed() -> Self {
        Self::failure(CONNECTION_FAILED_MESSAGE)
    }

    /// Message to show a user, with a fallback when the backend sent none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}
