use crate::domain::Template;
use std::collections::HashMap;

// exists so a template is fetched once per session rather than once per navigation
// entries are never replaced or evicted, the route set is small and fixed
pub struct TemplateCache {
    pub templates_by_address: HashMap<String, Template>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            templates_by_address: HashMap::new(),
        }
    }

    pub fn get(&self, address: &str) -> Option<&Template> {
        self.templates_by_address.get(address)
    }

    // first insert wins, a later racer gets the stored entry back
    pub fn insert_if_absent(&mut self, address: &str, template: Template) -> Template {
        self.templates_by_address
            .entry(address.to_string())
            .or_insert(template)
            .clone()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}
