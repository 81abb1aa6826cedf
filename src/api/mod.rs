//! HTTP API module for the health-check and test endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{Payload, SUCCESS_PAYLOAD, TEST_PAYLOAD};
pub use routes::{create_router, setup_router, API_PREFIX};
