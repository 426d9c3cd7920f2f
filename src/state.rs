//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources across different parts of your application.
//!
//! Everything in here is read-only after startup: the gate (holding the
//! credential), the profile fixture and the allowed CORS origin. Requests
//! never write to it, so there is no locking.

use crate::config::Config;
use crate::gate::Gate;
use crate::models::ProfileRecord;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::sync::Arc; // Atomic Reference Counting - for thread-safe sharing

/// Shared application state
///
/// ## Why Clone?
/// The `#[derive(Clone)]` is essential for Axum. Each request handler gets a clone
/// of the state. This is cheap because the larger pieces sit behind `Arc`
/// (only a pointer is cloned), and `HeaderValue` is reference-counted bytes.
#[derive(Clone)]
pub struct AppState {
    /// Shared-secret gate applied to write requests
    pub gate: Arc<Gate>,

    /// Fixture returned on every read request
    pub profile: Arc<ProfileRecord>,

    /// The only `Origin` allowed to call the API from a browser
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Initialize application state
    ///
    /// The credential is injected into the gate here, once, so handlers and
    /// middleware never reach for a global.
    ///
    /// # Errors
    /// Returns an error if the configured origin is not a valid header value.
    pub fn new(config: &Config) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(&config.allowed_origin)
            .with_context(|| format!("invalid ALLOWED_ORIGIN: {:?}", config.allowed_origin))?;

        Ok(AppState {
            gate: Arc::new(Gate::new(config.credential.clone())),
            profile: Arc::new(ProfileRecord::fixture()),
            allowed_origin,
        })
    }
}
