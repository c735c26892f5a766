//! CLI command implementations

pub mod init;
pub mod login;
pub mod logout;
pub mod order;
pub mod orders;
pub mod ping;
pub mod register;
pub mod services;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{Context, Result};
use naozi_core::NaoziContext;

/// Get the naozi directory from environment or default
pub fn get_naozi_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NAOZI_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".naozi")
    }
}

/// Get or create the naozi context
pub fn get_context() -> Result<NaoziContext> {
    let naozi_dir = get_naozi_dir();

    std::fs::create_dir_all(&naozi_dir)
        .with_context(|| format!("Failed to create naozi directory: {:?}", naozi_dir))?;

    NaoziContext::new(&naozi_dir).context("Failed to initialize naozi context")
}
