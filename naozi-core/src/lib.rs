//! Naozi Core - client logic for the Naozi print shop
//!
//! This crate implements the client core following hexagonal architecture:
//!
//! - **domain**: Business entities (orders, users, the response envelope)
//!   and submission validation
//! - **ports**: Trait definitions for external dependencies (Transport)
//! - **services**: The API client and the order workflow
//! - **adapters**: Concrete implementations (reqwest transport, filesystem
//!   session store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{HttpTransport, SessionStore};
use config::Config;
use services::{NaoziApi, OrderService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    ApiResponse, DesignFile, OrderForm, OrderRecord, Session, ServiceEntry, UserRecord,
};
pub use services::{Credentials, Registration};

/// Main context for Naozi operations
///
/// This is the primary entry point. It holds the configuration, the shared
/// API client (which owns the session), and the order workflow.
pub struct NaoziContext {
    pub config: Config,
    pub api: Arc<NaoziApi>,
    pub order_service: OrderService,
}

impl NaoziContext {
    /// Create a new Naozi context rooted at the given directory. The
    /// persisted session, if any, is restored here.
    pub fn new(naozi_dir: &Path) -> Result<Self> {
        let config = Config::load(naozi_dir)?;

        let transport = Arc::new(HttpTransport::new(&config.api_url)?);
        let store = SessionStore::new(naozi_dir);
        let api = Arc::new(NaoziApi::new(transport, store));
        let order_service = OrderService::new(Arc::clone(&api));

        Ok(Self {
            config,
            api,
            order_service,
        })
    }
}
