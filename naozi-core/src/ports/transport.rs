//! Transport port - how requests reach the backend

use std::fmt;

use serde_json::Value;

use crate::domain::result::Result;
use crate::domain::ApiResponse;

/// Logical operation tag. The backend multiplexes every operation over one
/// physical URL; this discriminator is sent as a query parameter (GET) or
/// injected into the JSON body (POST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Test,
    Init,
    Register,
    Login,
    Services,
    Upload,
    Order,
    Orders,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Test => "test",
            Endpoint::Init => "init",
            Endpoint::Register => "register",
            Endpoint::Login => "login",
            Endpoint::Services => "services",
            Endpoint::Upload => "upload",
            Endpoint::Order => "order",
            Endpoint::Orders => "orders",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method for a logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single request to the backend. `data` must be a JSON object when
/// present; for GET its fields become query parameters, for POST it becomes
/// the body with the endpoint tag added.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub method: Method,
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            method: Method::Get,
            data: None,
        }
    }

    pub fn get_with(endpoint: Endpoint, data: Value) -> Self {
        Self {
            endpoint,
            method: Method::Get,
            data: Some(data),
        }
    }

    pub fn post(endpoint: Endpoint, data: Value) -> Self {
        Self {
            endpoint,
            method: Method::Post,
            data: Some(data),
        }
    }
}

/// The seam between the API client and the wire. Implementations return
/// `Err` only for transport-level trouble (network error, non-JSON body);
/// backend-reported failures come back as parsed responses with
/// `success: false`.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}
