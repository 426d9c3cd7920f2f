//! # Request Gate
//!
//! The gate decides whether a request may reach its handler.
//!
//! ## Rules
//! - `GET` (the read verb) is always allowed, whatever the body
//! - every other method is allowed only if the body has a `password` field
//!   that is *loosely* equal to the credential (see [`loose_eq`])
//!
//! The gate holds nothing but the immutable credential, so a decision depends
//! only on the request in front of it. The HTTP plumbing (reading the body,
//! sending the 401) lives in `middleware::auth`; this module is the pure
//! predicate and can be tested without a server.
//!
//! This is a toy shared-secret check, not an authentication system.

pub mod loose_eq;

use crate::models::SubmissionPayload;
use axum::http::Method;

/// Name of the body field carrying the shared secret
pub const PASSWORD_FIELD: &str = "password";

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through to the handler unchanged
    Allow,
    /// Short-circuit with a 401
    Deny,
}

/// Shared-secret gate for write requests
pub struct Gate {
    credential: String,
}

impl Gate {
    /// Create a gate that checks write requests against `credential`
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
        }
    }

    /// Read requests bypass the gate entirely
    ///
    /// Only `GET`. axum answers `HEAD` through the GET handler, but `HEAD` is
    /// still gated here: the source's check compared against the read verb alone.
    pub fn is_read(method: &Method) -> bool {
        *method == Method::GET
    }

    /// Decide whether a request may proceed.
    ///
    /// `payload` is `None` when no body was read (read requests never need one).
    pub fn check(&self, method: &Method, payload: Option<&SubmissionPayload>) -> Decision {
        if Self::is_read(method) {
            return Decision::Allow;
        }

        let presented = payload.and_then(|payload| payload.get(PASSWORD_FIELD));
        match presented {
            Some(value) if loose_eq::loosely_equals(value, &self.credential) => Decision::Allow,
            _ => Decision::Deny,
        }
    }
}
