pub mod memory;

pub use self::memory::{MemoryHistory, MemoryPage, PageSnapshot};

// the parts of the document the router writes to
// a browser front end maps these onto element ids and classes, tests use `MemoryPage`
pub trait PageSurface: Send + Sync {
    fn set_content(&self, markup: &str);
    fn set_window_title(&self, text: &str);
    // pages without a taskbar ignore this
    fn set_taskbar_label(&self, text: &str);
    fn set_document_title(&self, text: &str);
    // marks the sidebar icon whose href equals `route_key`, clears every other one
    fn set_active_icon(&self, route_key: Option<&str>);
    fn scroll_content_to_top(&self);
    fn set_clock_text(&self, text: &str);
    fn set_year_text(&self, text: &str);
}

pub trait History: Send + Sync {
    // current fragment, leading '#' included, empty when there is none
    fn fragment(&self) -> String;
    // rewrites the current entry in place, never adds one
    fn replace(&self, fragment: &str);
}
