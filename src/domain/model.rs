use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque box identity. Assigned once and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(String);

impl BoxId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoxId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BoxId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A numbered moving box: a room assignment plus its contents in packing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingBox {
    pub id: BoxId,
    pub number: u32,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl MovingBox {
    pub fn new(number: u32, room: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id: BoxId::generate(),
            number,
            room: room.into(),
            items,
        }
    }
}
