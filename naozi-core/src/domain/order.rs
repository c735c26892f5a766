//! Order domain model and submission validation
//!
//! Pure data structures with validation logic - no I/O beyond reading the
//! attached design file's size. All checks run before any network call is
//! made; a rejected submission never reaches the transport.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Largest accepted design file: 10 MiB, enforced client-side because the
/// whole file is loaded and base64-encoded in memory before upload.
pub const MAX_DESIGN_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types the print shop accepts directly.
const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/illustrator",
    "application/photoshop",
];

/// Design-tool formats accepted by filename extension, since browsers and
/// filesystems rarely report a useful MIME type for them.
const ALLOWED_EXTENSIONS: &[&str] = &[".ai", ".psd", ".cdr"];

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-\s()]{10,}$").expect("valid phone regex"))
}

/// Check an email address for the two-part local@domain shape with a
/// dot-containing domain. Deliberately shallow; the backend re-validates.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check a phone number: at least 10 characters drawn from digits, `+`,
/// `-`, spaces, and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Where the bytes of an attached design file come from.
#[derive(Debug, Clone, PartialEq)]
enum FileSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

/// A design artifact attached to an order.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignFile {
    pub file_name: String,
    pub mime_type: String,
    source: FileSource,
}

impl DesignFile {
    /// Reference a design file on disk. The MIME type is inferred from the
    /// extension; unknown extensions get `application/octet-stream` and are
    /// rejected later by the allow-list unless the extension itself is
    /// allowed.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::validation(format!("Invalid file path: {}", path.display())))?;
        let mime_type = mime_for_name(&file_name).to_string();
        Ok(Self {
            file_name,
            mime_type,
            source: FileSource::Path(path),
        })
    }

    /// Build a design file from bytes already in memory.
    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            source: FileSource::Memory(bytes),
        }
    }

    /// Size in bytes, without loading path-backed content.
    pub fn size(&self) -> Result<u64> {
        match &self.source {
            FileSource::Path(path) => Ok(std::fs::metadata(path)?.len()),
            FileSource::Memory(bytes) => Ok(bytes.len() as u64),
        }
    }

    /// Read the full content. This is the single suspension point of an
    /// upload: it completes exactly once before any network call is issued.
    pub fn read(&self) -> Result<Vec<u8>> {
        match &self.source {
            FileSource::Path(path) => Ok(std::fs::read(path)?),
            FileSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }

    /// Check the file against the accepted-format allow-lists and the size
    /// cap. Returns a descriptive message on rejection.
    pub fn validate(&self) -> Result<()> {
        let name_lower = self.file_name.to_lowercase();
        let mime_ok = ALLOWED_MIME_TYPES.contains(&self.mime_type.as_str());
        let ext_ok = ALLOWED_EXTENSIONS.iter().any(|ext| name_lower.ends_with(ext));
        if !mime_ok && !ext_ok {
            return Err(Error::validation(
                "Unsupported file format. Use PDF, JPG, PNG, AI, PSD, or CDR",
            ));
        }

        if self.size()? > MAX_DESIGN_FILE_SIZE {
            return Err(Error::validation("File is too large. Maximum size is 10 MB"));
        }

        Ok(())
    }
}

/// Infer a MIME type from a file name, covering the formats the shop cares
/// about.
fn mime_for_name(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    let ext = Path::new(&lower)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match ext {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "ai" => "application/illustrator",
        "psd" => "application/photoshop",
        _ => "application/octet-stream",
    }
}

/// User-entered order submission, as collected by the CLI form.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub service_type: String,
    pub quantity: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: String,
    pub notes: String,
    pub paper_type: String,
    pub size: String,
    pub file: Option<DesignFile>,
}

impl OrderForm {
    /// Validate the form fields. Field checks only; whether a file must be
    /// attached is the workflow's call (the API itself accepts file-less
    /// orders).
    pub fn validate_fields(&self) -> Result<()> {
        if self.service_type.trim().is_empty() {
            return Err(Error::validation("Service type is required"));
        }
        if self.quantity == 0 {
            return Err(Error::validation("Quantity must be at least 1"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::validation("Name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::validation("Email is required"));
        }
        if !is_valid_email(&self.email) {
            return Err(Error::validation("Invalid email format"));
        }
        if self.phone.trim().is_empty() {
            return Err(Error::validation("Phone number is required"));
        }
        if !is_valid_phone(&self.phone) {
            return Err(Error::validation("Invalid phone number format"));
        }
        Ok(())
    }
}

/// Customer contact block inside an order payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: String,
    pub notes: String,
    pub paper_type: String,
    pub size: String,
}

/// Sentinel user id for orders placed without a session.
pub const GUEST_USER_ID: &str = "GUEST";

/// The wire form of an order. Constructed fresh per submission and never
/// persisted locally; ownership transfers to the backend once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub user_id: String,
    pub service_type: String,
    pub quantity: u32,
    pub file_url: String,
    pub customer_info: CustomerInfo,
}

impl OrderPayload {
    /// Compose the payload from a form, the resolved user id, and the file
    /// URL obtained from a successful upload (empty when there is none).
    pub fn from_form(form: &OrderForm, user_id: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            service_type: form.service_type.clone(),
            quantity: form.quantity,
            file_url: file_url.into(),
            customer_info: CustomerInfo {
                name: form.name.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
                company: form.company.clone(),
                address: form.address.clone(),
                notes: form.notes.clone(),
                paper_type: form.paper_type.clone(),
                size: form.size.clone(),
            },
        }
    }
}
