//! Centralized HTTP access to the clinic backend.
//!
//! The dashboard is a pure consumer: every page goes through [`ApiClient`]
//! and shows [`ApiError::message`] to the user on failure.

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{normalize_base_url, ApiConfig, API_KEY_HEADER, DEFAULT_API_BASE};
pub use error::{ApiError, ApiErrorKind, ERR_CANNOT_CONNECT, ERR_UNEXPECTED};
