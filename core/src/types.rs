//! Domain DTOs for the records API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Backends disagree on the shape of the identifier (json-server style
//! services hand out integers, the mock server hands out UUID strings), so
//! `RecordId` accepts either and treats the value as opaque text when it has
//! to go back into a URL.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Server-assigned identifier of a record. The client never mints one.
///
/// Any JSON number is kept as written by the server, so negative and
/// fractional ids survive a list response and print back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(Number::from(n))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// A single record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Request payload for creating a new record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub email: String,
    pub username: String,
}
