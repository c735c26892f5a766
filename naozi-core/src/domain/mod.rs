//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no network I/O or external dependencies.

mod order;
mod response;
mod user;
pub mod result;

pub use order::{
    is_valid_email, is_valid_phone, CustomerInfo, DesignFile, OrderForm, OrderPayload,
    GUEST_USER_ID, MAX_DESIGN_FILE_SIZE,
};
pub use response::{
    ApiResponse, OrderRecord, ServiceEntry, CONNECTION_FAILED_MESSAGE, LOGIN_REQUIRED_MESSAGE,
};
pub use user::{Session, UserRecord};
