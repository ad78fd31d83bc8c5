//! Web API module for Board API.
//!
//! This module exposes the board store over HTTP: listing and creating
//! entries, plus a health check and generated API documentation.

pub mod doc;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_app, create_router};
pub use server::WebServer;
