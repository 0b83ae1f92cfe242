use crate::config::RouterConfig;
use crate::features::input::InputBridge;
use crate::io::{HttpTemplateFetcher, LocalTemplateFetcher, TemplateFetcher};
use crate::page::{History, PageSurface};
use crate::parser::TemplateParser;
use crate::services::{Navigator, RenderOutcome, Renderer, RouteTable, TemplateStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

// everything the router needs, wired once at startup
pub struct App {
    pub routes: Arc<RouteTable>,
    pub store: Arc<TemplateStore>,
    pub renderer: Arc<Renderer>,
    pub navigator: Arc<Navigator>,
    pub input: InputBridge,
}

impl App {
    pub fn new(
        config: Arc<RouterConfig>,
        routes: Arc<RouteTable>,
        fetcher: Box<dyn TemplateFetcher>,
        page: Arc<dyn PageSurface>,
        history: Arc<dyn History>,
    ) -> Result<Self> {
        let parser = TemplateParser::from_config(&config)?;
        let store = Arc::new(TemplateStore::new(fetcher, parser));
        let renderer = Arc::new(Renderer::new(
            routes.clone(),
            store.clone(),
            page,
            &config,
        ));
        let navigator = Arc::new(Navigator::new(
            renderer.clone(),
            history.clone(),
            routes.home_key(),
        ));
        let input = InputBridge::new(
            navigator.clone(),
            renderer.clone(),
            history,
            routes.clone(),
            config.chord_timeout,
        );

        Ok(Self {
            routes,
            store,
            renderer,
            navigator,
            input,
        })
    }

    /// Builds the fetcher the config asks for around an already loaded route table.
    pub fn from_config(
        config: Arc<RouterConfig>,
        routes: Arc<RouteTable>,
        page: Arc<dyn PageSurface>,
        history: Arc<dyn History>,
    ) -> Result<Self> {
        let fetcher = build_fetcher(&config)?;
        Self::new(config, routes, fetcher, page, history)
    }

    pub async fn boot(&self) -> RenderOutcome {
        self.input.boot().await
    }
}

pub fn load_routes(config: &RouterConfig) -> Result<RouteTable> {
    match &config.routes_file {
        Some(path) => RouteTable::from_json_file(path, &config.home_route),
        None => RouteTable::portfolio(&config.home_route),
    }
}

pub fn build_fetcher(config: &RouterConfig) -> Result<Box<dyn TemplateFetcher>> {
    match &config.template_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving templates from disk");
            Ok(Box::new(LocalTemplateFetcher::new(dir.clone())))
        }
        None => {
            info!(base = %config.template_base_url, "fetching templates over http");
            let fetcher = HttpTemplateFetcher::new(&config.template_base_url, config.fetch_timeout)
                .context("Failed to set up the http template fetcher")?;
            Ok(Box::new(fetcher))
        }
    }
}
