use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    // fragment identifier, leading '#' included
    pub key: String,
    // template location, relative to the template base
    pub address: String,
    // follow-up letter for the `g` chord
    #[serde(default)]
    pub shortcut: Option<char>,
}

impl RouteEntry {
    pub fn new(key: &str, address: &str, shortcut: Option<char>) -> Self {
        Self {
            key: key.to_string(),
            address: address.to_string(),
            shortcut,
        }
    }
}
