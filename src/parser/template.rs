use crate::config::RouterConfig;
use crate::domain::Template;
use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

// pulls the content region and the display title out of a raw template document
pub struct TemplateParser {
    content: Selector,
    meta: Selector,
    title_attribute: String,
    fallback_title: String,
}

impl TemplateParser {
    pub fn new(
        content_selector: &str,
        meta_selector: &str,
        title_attribute: &str,
        fallback_title: &str,
    ) -> Result<Self> {
        Ok(Self {
            content: parse_selector(content_selector)?,
            meta: parse_selector(meta_selector)?,
            title_attribute: title_attribute.to_string(),
            fallback_title: fallback_title.to_string(),
        })
    }

    pub fn from_config(config: &RouterConfig) -> Result<Self> {
        Self::new(
            &config.content_selector,
            &config.meta_selector,
            &config.title_attribute,
            &config.fallback_title,
        )
    }

    /// Parses `body` as an HTML fragment.
    ///
    /// A template without a content region is shown whole, and a template
    /// without a usable meta title gets the fallback title. Parsing never fails.
    pub fn parse(&self, body: &str) -> Template {
        let fragment = Html::parse_fragment(body);

        let content = fragment
            .select(&self.content)
            .next()
            .map(|region| region.inner_html())
            .unwrap_or_else(|| body.to_string());

        let title = fragment
            .select(&self.meta)
            .next()
            .and_then(|meta| meta.value().attr(&self.title_attribute))
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_title.clone());

        Template { content, title }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid selector '{}': {:?}", selector, e))
}
