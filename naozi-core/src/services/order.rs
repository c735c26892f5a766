//! Order workflow service
//!
//! Sequences a single submission: validate the form, validate the attached
//! file, then hand over to the API client which uploads (when a file is
//! present) and creates the order. A rejected submission returns a
//! validation error before any network call; after any outcome the caller
//! is free to submit again.
//!
//! There is deliberately no guard against two overlapping submissions from
//! one client; callers wanting mutual exclusion should disable their
//! trigger while a submission is running.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{ApiResponse, OrderForm};
use crate::services::NaoziApi;

/// Order submission workflow
pub struct OrderService {
    api: Arc<NaoziApi>,
}

impl OrderService {
    pub fn new(api: Arc<NaoziApi>) -> Self {
        Self { api }
    }

    /// Check everything that can be checked locally. A workflow submission
    /// requires a design file even though the API itself tolerates
    /// file-less orders.
    pub fn validate(&self, form: &OrderForm) -> Result<()> {
        form.validate_fields()?;

        match &form.file {
            Some(file) => file.validate(),
            None => Err(Error::validation("Please attach your design file")),
        }
    }

    /// Validate and submit. `Err(Validation)` means nothing was sent; an
    /// `ApiResponse` with `success: false` means the backend (or the
    /// connection) rejected it.
    pub fn submit(&self, form: &OrderForm) -> Result<ApiResponse> {
        self.validate(form)?;
        Ok(self.api.create_order(form))
    }
}
