use crate::domain::RouteEntry;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

// the route table is our fixed knowledge of the site: which fragment shows which template
// it's built once at startup and never edited afterwards
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    key_to_address: HashMap<String, String>,
    shortcut_to_key: HashMap<char, String>,
    home_key: String,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>, home_key: &str) -> Result<Self> {
        let mut key_to_address = HashMap::new();
        let mut shortcut_to_key = HashMap::new();

        for entry in &entries {
            if !entry.key.starts_with('#') {
                anyhow::bail!("Route key '{}' must start with '#'", entry.key);
            }
            if key_to_address
                .insert(entry.key.clone(), entry.address.clone())
                .is_some()
            {
                anyhow::bail!("Route key '{}' is registered twice", entry.key);
            }
            if let Some(shortcut) = entry.shortcut {
                let shortcut = shortcut.to_ascii_lowercase();
                // `g` arms the chord, it can't also finish one
                if shortcut == 'g' {
                    anyhow::bail!("Route '{}' can't use 'g' as its shortcut", entry.key);
                }
                if let Some(previous) = shortcut_to_key.insert(shortcut, entry.key.clone()) {
                    anyhow::bail!(
                        "Shortcut '{}' is claimed by both '{}' and '{}'",
                        shortcut,
                        previous,
                        entry.key
                    );
                }
            }
        }

        if !key_to_address.contains_key(home_key) {
            anyhow::bail!("Home route '{}' is missing from the route table", home_key);
        }

        Ok(Self {
            entries,
            key_to_address,
            shortcut_to_key,
            home_key: home_key.to_string(),
        })
    }

    /// The portfolio's built-in five routes.
    pub fn portfolio(home_key: &str) -> Result<Self> {
        Self::new(default_entries(), home_key)
    }

    /// Loads a JSON array of route entries.
    pub fn from_json_file(path: &Path, home_key: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        let entries: Vec<RouteEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse route table {}", path.display()))?;
        Self::new(entries, home_key)
    }

    pub fn home_key(&self) -> &str {
        &self.home_key
    }

    pub fn home_address(&self) -> &str {
        // presence of the home key is checked in `new`
        self.key_to_address
            .get(&self.home_key)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn address_for(&self, key: &str) -> Option<&str> {
        self.key_to_address.get(key).map(String::as_str)
    }

    // unknown keys, the empty key included, fall back to home
    pub fn resolve(&self, key: &str) -> &str {
        self.address_for(key).unwrap_or_else(|| self.home_address())
    }

    pub fn key_for_shortcut(&self, shortcut: char) -> Option<&str> {
        self.shortcut_to_key
            .get(&shortcut.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.key_to_address.contains_key(key)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

pub fn default_entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("#home", "templates/home.html", Some('h')),
        RouteEntry::new("#about", "templates/about.html", Some('a')),
        RouteEntry::new("#projects", "templates/projects.html", Some('p')),
        RouteEntry::new("#experience", "templates/experience.html", Some('e')),
        RouteEntry::new("#contact", "templates/contact.html", Some('c')),
    ]
}
