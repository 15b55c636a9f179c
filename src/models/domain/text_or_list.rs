use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A model-produced field that may arrive either as one string or as a list
/// of strings. Resolved into a fixed shape as soon as it is read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Collapses to a single string, joining list items with one space.
    pub fn into_text(self) -> String {
        match self {
            TextOrList::Text(text) => text,
            TextOrList::List(items) => items.join(" "),
        }
    }

    /// Expands to a list, wrapping a lone string as a single item.
    pub fn into_list(self) -> Vec<String> {
        match self {
            TextOrList::Text(text) => vec![text],
            TextOrList::List(items) => items,
        }
    }
}

impl From<String> for TextOrList {
    fn from(text: String) -> Self {
        TextOrList::Text(text)
    }
}

impl From<Vec<String>> for TextOrList {
    fn from(items: Vec<String>) -> Self {
        TextOrList::List(items)
    }
}
