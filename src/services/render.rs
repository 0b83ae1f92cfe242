use crate::config::RouterConfig;
use crate::domain::Template;
use crate::io::FetchError;
use crate::page::PageSurface;
use crate::services::routes::RouteTable;
use crate::services::store::TemplateStore;
use derive_more::derive::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RenderOutcome {
    #[display("rendered {route_key} ({title})")]
    Rendered { route_key: String, title: String },
    #[display("failed: {_0}")]
    Failed(FetchError),
    // a newer render was issued while this one was loading, the page was left alone
    #[display("superseded")]
    Superseded,
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

pub struct Renderer {
    routes: Arc<RouteTable>,
    store: Arc<TemplateStore>,
    page: Arc<dyn PageSurface>,
    title_prefix: String,
    error_title: String,
    // last ticket handed out, only its holder may touch the page
    latest: AtomicU64,
    // makes "still latest?" and the page writes one step
    apply_lock: Mutex<()>,
}

impl Renderer {
    pub fn new(
        routes: Arc<RouteTable>,
        store: Arc<TemplateStore>,
        page: Arc<dyn PageSurface>,
        config: &RouterConfig,
    ) -> Self {
        Self {
            routes,
            store,
            page,
            title_prefix: config.title_prefix.clone(),
            error_title: config.error_title.clone(),
            latest: AtomicU64::new(0),
            apply_lock: Mutex::new(()),
        }
    }

    /// Loads the template behind `route_key` and shows it.
    ///
    /// Unknown keys show the home template. When several renders overlap,
    /// only the most recently started one writes to the page, whatever order
    /// their fetches finish in.
    pub async fn render(&self, route_key: &str) -> RenderOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let address = self.routes.resolve(route_key).to_string();
        debug!(route_key, %address, ticket, "render started");

        let result = self.store.load(&address).await;

        let _apply_guard = self.apply_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(route_key, ticket, "render superseded by a newer navigation");
            return RenderOutcome::Superseded;
        }

        match result {
            Ok(template) => {
                self.apply_template(route_key, &template);
                info!(route_key, title = %template.title, "rendered");
                RenderOutcome::Rendered {
                    route_key: route_key.to_string(),
                    title: template.title,
                }
            }
            Err(err) => {
                warn!(route_key, %address, error = %err, "render failed");
                self.apply_error(&address, &err);
                RenderOutcome::Failed(err)
            }
        }
    }

    pub fn document_title(&self, title: &str) -> String {
        format!("{} · {}", self.title_prefix, normalize_title(title))
    }

    fn apply_template(&self, route_key: &str, template: &Template) {
        self.page.set_content(&template.content);
        self.page.set_window_title(&template.title);
        self.page.set_taskbar_label(&template.title);
        self.page.set_document_title(&self.document_title(&template.title));
        self.page.set_active_icon(Some(route_key));
        self.page.scroll_content_to_top();
    }

    // the chrome is reset along with the panel so nothing still points at the previous route
    fn apply_error(&self, address: &str, err: &FetchError) {
        self.page.set_content(&error_panel(address, err));
        self.page.set_window_title(&self.error_title);
        self.page.set_taskbar_label(&self.error_title);
        self.page.set_document_title(&self.document_title(&self.error_title));
        self.page.set_active_icon(None);
    }
}

// em-dash separators read badly in a tab title
pub fn normalize_title(title: &str) -> String {
    title.replace(" — ", " · ")
}

pub fn error_panel(address: &str, err: &FetchError) -> String {
    format!(
        r#"<div class="content"><p>Failed to load: <code>{}</code></p><pre class="terminal">{}</pre></div>"#,
        escape_html(address),
        escape_html(&err.to_string())
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
