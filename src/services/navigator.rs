use crate::page::History;
use crate::services::render::{RenderOutcome, Renderer};
use std::sync::Arc;
use tracing::debug;

pub struct Navigator {
    renderer: Arc<Renderer>,
    history: Arc<dyn History>,
    home_key: String,
}

impl Navigator {
    pub fn new(renderer: Arc<Renderer>, history: Arc<dyn History>, home_key: &str) -> Self {
        Self {
            renderer,
            history,
            home_key: home_key.to_string(),
        }
    }

    /// Points the current history entry at `route_key` and renders it.
    ///
    /// The entry is replaced, not pushed, so programmatic navigation never
    /// grows the back/forward stack. The returned outcome resolves once the
    /// render has finished.
    pub async fn navigate(&self, route_key: &str) -> RenderOutcome {
        let key = if route_key.is_empty() {
            self.home_key.as_str()
        } else {
            route_key
        };

        debug!(route_key = key, "navigating");
        self.history.replace(key);
        self.renderer.render(key).await
    }

    pub fn home_key(&self) -> &str {
        &self.home_key
    }
}
