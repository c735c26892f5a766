//! API client service - single point of contact with the backend
//!
//! Owns the in-memory mirror of the persisted session and exposes one
//! method per logical backend operation. Every method resolves to the
//! uniform [`ApiResponse`] envelope: transport failures are normalized into
//! `success: false` with a connection-failure message rather than surfaced
//! as errors, so callers handle exactly one result shape.

use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::SessionStore;
use crate::domain::result::Result;
use crate::domain::{
    ApiResponse, DesignFile, OrderForm, OrderPayload, Session, UserRecord, GUEST_USER_ID,
    LOGIN_REQUIRED_MESSAGE,
};
use crate::ports::{ApiRequest, Endpoint, Transport};

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account registration data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Client for the Naozi backend
pub struct NaoziApi {
    transport: Arc<dyn Transport>,
    store: SessionStore,
    session: Mutex<Session>,
}

impl NaoziApi {
    /// Create a client, restoring any persisted session.
    pub fn new(transport: Arc<dyn Transport>, store: SessionStore) -> Self {
        let session = store.load();
        Self {
            transport,
            store,
            session: Mutex::new(session),
        }
    }

    /// Issue one request and normalize any transport failure into the
    /// uniform failure shape.
    fn request(&self, request: &ApiRequest) -> ApiResponse {
        match self.transport.send(request) {
            Ok(response) => response,
            Err(_) => ApiResponse::connection_failed(),
        }
    }

    /// Ping the backend.
    pub fn test_connection(&self) -> ApiResponse {
        self.request(&ApiRequest::get(Endpoint::Test))
    }

    /// Ask the backend to create its spreadsheet tabs.
    pub fn initialize_sheets(&self) -> ApiResponse {
        self.request(&ApiRequest::get(Endpoint::Init))
    }

    /// Fetch the service catalogue.
    pub fn get_services(&self) -> ApiResponse {
        self.request(&ApiRequest::get(Endpoint::Services))
    }

    /// Register a new account. Registration alone does not establish a
    /// session; on backend success this immediately logs in with the same
    /// credentials and returns that login result.
    pub fn register(&self, registration: &Registration) -> ApiResponse {
        let mut data = json!({
            "name": registration.name,
            "email": registration.email,
            "password": registration.password,
        });
        if let Some(phone) = &registration.phone {
            data["phone"] = json!(phone);
        }

        let response = self.request(&ApiRequest::post(Endpoint::Register, data));
        if !response.success {
            return response;
        }

        self.login(&Credentials {
            email: registration.email.clone(),
            password: registration.password.clone(),
        })
    }

    /// Log in. On success the in-memory session is updated and persisted;
    /// on failure the session is left untouched.
    pub fn login(&self, credentials: &Credentials) -> ApiResponse {
        let response = self.request(&ApiRequest::post(
            Endpoint::Login,
            json!({
                "email": credentials.email,
                "password": credentials.password,
            }),
        ));

        if response.success {
            if let (Some(user), Some(token)) = (&response.user, &response.token) {
                let mut session = self.session.lock().unwrap();
                session.user = Some(user.clone());
                session.token = Some(token.clone());
                // Persistence is best effort; a failed write only loses the
                // session across restarts.
                let _ = self.store.save(user, token);
            }
        }

        response
    }

    /// Upload a design file: one read of the content, base64-encoded, then
    /// a single POST. Read failures surface in the envelope, not as errors.
    pub fn upload_file(&self, file: &DesignFile) -> ApiResponse {
        let bytes = match file.read() {
            Ok(bytes) => bytes,
            Err(e) => return ApiResponse::failure(format!("Could not read design file: {}", e)),
        };

        self.request(&ApiRequest::post(
            Endpoint::Upload,
            json!({
                "fileName": file.file_name,
                "mimeType": file.mime_type,
                "content": BASE64.encode(bytes),
            }),
        ))
    }

    /// Submit an order. When a file is attached it is uploaded first and
    /// the returned URL threaded into the payload; a failed upload degrades
    /// to submitting with an empty file reference instead of aborting.
    pub fn create_order(&self, form: &OrderForm) -> ApiResponse {
        let mut file_url = String::new();
        if let Some(file) = &form.file {
            let upload = self.upload_file(file);
            if upload.success {
                file_url = upload.file_url.unwrap_or_default();
            }
        }

        let user_id = {
            let session = self.session.lock().unwrap();
            session
                .user_id()
                .map(str::to_string)
                .unwrap_or_else(|| GUEST_USER_ID.to_string())
        };

        let payload = OrderPayload::from_form(form, user_id, file_url);
        let data = match serde_json::to_value(&payload) {
            Ok(value) => value,
            Err(e) => return ApiResponse::failure(format!("Could not encode order: {}", e)),
        };

        self.request(&ApiRequest::post(Endpoint::Order, data))
    }

    /// Fetch the current user's orders. Fails fast without a network call
    /// when nobody is logged in.
    pub fn get_user_orders(&self) -> ApiResponse {
        let (user_id, token) = {
            let session = self.session.lock().unwrap();
            match &session.user {
                Some(user) => (user.id.clone(), session.token.clone().unwrap_or_default()),
                None => return ApiResponse::failure(LOGIN_REQUIRED_MESSAGE),
            }
        };

        self.request(&ApiRequest::get_with(
            Endpoint::Orders,
            json!({
                "userId": user_id,
                "token": token,
            }),
        ))
    }

    /// Clear the session, in memory and on disk. No network call.
    pub fn logout(&self) -> Result<()> {
        {
            let mut session = self.session.lock().unwrap();
            *session = Session::logged_out();
        }
        self.store.clear()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.lock().unwrap().is_logged_in()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.session.lock().unwrap().user.clone()
    }

    pub fn current_session(&self) -> Session {
        self.session.lock().unwrap().clone()
    }
}
