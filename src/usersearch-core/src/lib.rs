//! UserSearch Core Library
//!
//! Types and pure logic shared by the search client:
//! - Service data model (users, requests, responses)
//! - Client configuration
//! - Request validation, query encoding and overfetch pagination

pub mod config;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use config::ClientConfig;
pub use models::*;
pub use search::{encode_query, PageWindow, ValidationError};
