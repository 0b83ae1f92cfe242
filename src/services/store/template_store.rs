use crate::domain::Template;
use crate::io::{FetchError, TemplateFetcher};
use crate::parser::TemplateParser;
use crate::services::store::template_cache::TemplateCache;
use tokio::sync::RwLock;
use tracing::{debug, info};

pub struct TemplateStore {
    fetcher: Box<dyn TemplateFetcher>,
    parser: TemplateParser,
    cache: RwLock<TemplateCache>,
}

impl TemplateStore {
    pub fn new(fetcher: Box<dyn TemplateFetcher>, parser: TemplateParser) -> Self {
        Self {
            fetcher,
            parser,
            cache: RwLock::new(TemplateCache::new()),
        }
    }

    /// Returns the template stored at `address`, fetching it on first use.
    ///
    /// Cached templates come back without touching the fetcher. A failed fetch
    /// leaves nothing behind, so the next load of the same address tries again.
    pub async fn load(&self, address: &str) -> Result<Template, FetchError> {
        if let Some(template) = self.cached(address).await {
            debug!(address, "template cache hit");
            return Ok(template);
        }

        debug!(address, "template cache miss");
        let body = self.fetcher.fetch(address).await?;
        let template = self.parser.parse(&body);

        let mut cache_guard = self.cache.write().await;
        let stored = cache_guard.insert_if_absent(address, template);
        info!(address, title = %stored.title, "template cached");

        Ok(stored)
    }

    pub async fn cached(&self, address: &str) -> Option<Template> {
        let cache_guard = self.cache.read().await;
        cache_guard.get(address).cloned()
    }

    pub async fn contains(&self, address: &str) -> bool {
        self.cache.read().await.get(address).is_some()
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.templates_by_address.len()
    }
}
