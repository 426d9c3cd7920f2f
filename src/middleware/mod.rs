//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//! Used for cross-cutting concerns like authentication, logging, CORS, etc.
//!
//! ## What is Middleware?
//! Middleware functions run before (or after) your route handlers.
//! They can:
//! - Check authorization
//! - Inspect (and restore) the request body
//! - Short-circuit the request (return error before handler runs)
//!
//! ## Our Middleware
//! - `origin`: Turns away browser requests from origins other than the configured one
//! - `auth`: Runs the shared-secret gate on write requests

pub mod auth;
pub mod origin;
