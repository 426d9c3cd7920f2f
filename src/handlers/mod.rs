//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers (controllers).
//! Each handler processes a specific API endpoint.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `profile`: `GET /`, the fixed profile
//! - `submission`: `POST /`, echoes the submitted form back
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from request (shared state, JSON body)
//! 2. Return a response (JSON, status code)
//!
//! None of them check the password: by the time a write request reaches a
//! handler, `middleware::auth` has already let it through.

pub mod health;
pub mod profile;
pub mod submission;
