//! # API Models
//!
//! This module defines the two JSON shapes the API deals with:
//! - `ProfileRecord`: the fixed profile returned on every read request
//! - `SubmissionPayload`: whatever fields the form posted on a write request
//!
//! ## Key Concepts
//! - **Serialization**: Converting Rust structs to/from JSON with serde
//! - **Transparent newtypes**: `#[serde(transparent)]` makes a wrapper struct
//!   (de)serialize exactly like the value it wraps

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed profile served on `GET /`
///
/// This is a constant fixture, not derived from anything the client submits.
///
/// ## Example JSON
/// ```json
/// { "name": "Ashim", "age": 19, "skills": "MERN" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub age: u32,
    pub skills: String,
}

impl ProfileRecord {
    /// The one profile this server ever returns
    pub fn fixture() -> Self {
        Self {
            name: "Ashim".to_string(),
            age: 19,
            skills: "MERN".to_string(),
        }
    }
}

/// Fields submitted on a write request
///
/// An arbitrary JSON object such as
/// ```json
/// { "userName": "Alice", "email": "a@x.com", "age": "30", "password": "123456" }
/// ```
///
/// No schema is enforced: any field names and any JSON values are accepted.
/// serde_json is built with `preserve_order`, so the map keeps the order the
/// fields were received in and serializing it back reproduces the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload(pub Map<String, Value>);

impl SubmissionPayload {
    /// Build a payload from an already-parsed JSON body.
    ///
    /// Anything that is not a JSON object has no named fields and becomes an
    /// empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Look up a single field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Names of the submitted fields, in submission order
    ///
    /// Used for logging: field names are safe to log, values are not.
    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_fixture_serializes_in_declared_order() {
        let rendered = serde_json::to_string(&ProfileRecord::fixture()).unwrap();
        assert_eq!(rendered, r#"{"name":"Ashim","age":19,"skills":"MERN"}"#);
    }

    #[test]
    fn payload_round_trips_field_order() {
        let raw = r#"{"userName":"Alice","email":"a@x.com","age":"30","password":"123456"}"#;
        let payload: SubmissionPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(
            payload.field_names(),
            vec!["userName", "email", "age", "password"]
        );
        assert_eq!(serde_json::to_string(&payload).unwrap(), raw);
    }

    #[test]
    fn non_object_bodies_become_empty_payloads() {
        assert_eq!(
            SubmissionPayload::from_value(json!(["password", "123456"])),
            SubmissionPayload::default()
        );
        assert_eq!(
            SubmissionPayload::from_value(json!("123456")),
            SubmissionPayload::default()
        );
        assert!(SubmissionPayload::from_value(json!(null)).get("password").is_none());
    }
}
