use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key of a listed item (the card's `data-*-id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Anything a listing can show, hide and reorder.
pub trait ListItem {
    fn id(&self) -> &ItemId;
}

/// A value embedded in markup: attributes arrive as text, but JSON exports
/// of the same data sometimes carry bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl RawField {
    pub fn to_text(&self) -> String {
        match self {
            RawField::Number(n) => n.to_string(),
            RawField::Text(s) => s.clone(),
        }
    }
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Text(String::new())
    }
}
