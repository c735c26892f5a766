//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod api;
mod order;

pub use api::{Credentials, NaoziApi, Registration};
pub use order::OrderService;
