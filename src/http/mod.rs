//! HTTP API.
//!
//! | Route | Method | Body |
//! |-------|--------|------|
//! | `/` | GET | service banner |
//! | `/categories` | GET | `{"categories": [...]}` |
//! | `/scenarios` | POST | `{"category"}` → `{"scenarios": [...]}` |
//! | `/query` | POST | `{"category", "query"}` → advice |
//! | `/health` | GET | `{"status", "rules_loaded"}` |
//! | `/test-scenarios` | GET | `{"scenarios_by_category": {...}}` |

mod error;
mod handlers;
mod request_id;
mod server;

pub use error::{ApiError, ApiJson};
pub use server::{AppState, SharedState, router, serve};
