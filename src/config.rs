use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RouterConfig {
    pub template_base_url: String,
    pub template_dir: Option<PathBuf>,
    pub routes_file: Option<PathBuf>,
    pub home_route: String,
    pub title_prefix: String,
    pub content_selector: String,
    pub meta_selector: String,
    pub title_attribute: String,
    pub fallback_title: String,
    pub error_title: String,
    pub chord_timeout: Duration,
    pub clock_tick: Duration,
    pub fetch_timeout: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            template_base_url: "http://127.0.0.1:3000/".to_string(),
            template_dir: None,
            routes_file: None,
            home_route: "#home".to_string(),
            title_prefix: "Giuliana Cabrera".to_string(),
            content_selector: ".content".to_string(),
            meta_selector: ".meta".to_string(),
            title_attribute: "data-title".to_string(),
            fallback_title: "window".to_string(),
            error_title: "error — load failed".to_string(),
            chord_timeout: Duration::from_millis(800),
            clock_tick: Duration::from_secs(10),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl RouterConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    // every variable is optional, anything unset keeps its default
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let template_base_url =
            lookup("TEMPLATE_BASE_URL").unwrap_or(defaults.template_base_url);

        let template_dir = lookup("TEMPLATE_DIR").map(PathBuf::from);
        let routes_file = lookup("ROUTES_FILE").map(PathBuf::from);

        let home_route = lookup("HOME_ROUTE").unwrap_or(defaults.home_route);
        let title_prefix = lookup("SITE_TITLE_PREFIX").unwrap_or(defaults.title_prefix);

        let chord_timeout = parse_u64(&lookup, "CHORD_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.chord_timeout);
        let clock_tick = parse_u64(&lookup, "CLOCK_TICK_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.clock_tick);
        let fetch_timeout = parse_u64(&lookup, "FETCH_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);

        if !home_route.starts_with('#') {
            anyhow::bail!("HOME_ROUTE must be a fragment such as '#home', got '{}'", home_route);
        }

        Ok(Self {
            template_base_url,
            template_dir,
            routes_file,
            home_route,
            title_prefix,
            chord_timeout,
            clock_tick,
            fetch_timeout,
            ..defaults
        })
    }
}

fn parse_u64<F>(lookup: &F, name: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(val) => val
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", name, val)),
        None => Ok(None),
    }
}
