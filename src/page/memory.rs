use crate::page::{History, PageSurface};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub content: String,
    pub window_title: String,
    // None when the page has no taskbar
    pub taskbar_label: Option<String>,
    pub document_title: String,
    pub active_icons: Vec<String>,
    pub scroll_top: u32,
    pub clock: String,
    pub year: String,
}

struct SideIcon {
    href: String,
    active: bool,
}

struct PageState {
    snapshot: PageSnapshot,
    icons: Vec<SideIcon>,
}

/// In-memory stand-in for the portfolio's document.
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new<I, S>(icon_hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let icons = icon_hrefs
            .into_iter()
            .map(|href| SideIcon {
                href: href.into(),
                active: false,
            })
            .collect();

        Self {
            state: Mutex::new(PageState {
                snapshot: PageSnapshot {
                    taskbar_label: Some(String::new()),
                    ..PageSnapshot::default()
                },
                icons,
            }),
        }
    }

    pub fn without_taskbar(self) -> Self {
        self.lock().snapshot.taskbar_label = None;
        self
    }

    // content scroll offset, as if the user had scrolled down
    pub fn scroll_content_to(&self, offset: u32) {
        self.lock().snapshot.scroll_top = offset;
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.lock();
        let mut snapshot = state.snapshot.clone();
        snapshot.active_icons = state
            .icons
            .iter()
            .filter(|icon| icon.active)
            .map(|icon| icon.href.clone())
            .collect();
        snapshot
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PageSurface for MemoryPage {
    fn set_content(&self, markup: &str) {
        self.lock().snapshot.content = markup.to_string();
    }

    fn set_window_title(&self, text: &str) {
        self.lock().snapshot.window_title = text.to_string();
    }

    fn set_taskbar_label(&self, text: &str) {
        if let Some(label) = self.lock().snapshot.taskbar_label.as_mut() {
            *label = text.to_string();
        }
    }

    fn set_document_title(&self, text: &str) {
        self.lock().snapshot.document_title = text.to_string();
    }

    fn set_active_icon(&self, route_key: Option<&str>) {
        let mut state = self.lock();
        for icon in state.icons.iter_mut() {
            icon.active = Some(icon.href.as_str()) == route_key;
        }
    }

    fn scroll_content_to_top(&self) {
        self.lock().snapshot.scroll_top = 0;
    }

    fn set_clock_text(&self, text: &str) {
        self.lock().snapshot.clock = text.to_string();
    }

    fn set_year_text(&self, text: &str) {
        self.lock().snapshot.year = text.to_string();
    }
}

struct HistoryState {
    entries: Vec<String>,
    cursor: usize,
}

/// Entry stack with a cursor, enough to play back/forward against the router.
pub struct MemoryHistory {
    state: Mutex<HistoryState>,
}

impl MemoryHistory {
    pub fn new(initial_fragment: &str) -> Self {
        Self {
            state: Mutex::new(HistoryState {
                entries: vec![initial_fragment.to_string()],
                cursor: 0,
            }),
        }
    }

    // a manual fragment edit: drops any forward entries, then adds one
    pub fn push(&self, fragment: &str) {
        let mut state = self.lock();
        let keep = state.cursor + 1;
        state.entries.truncate(keep);
        state.entries.push(fragment.to_string());
        state.cursor = state.entries.len() - 1;
    }

    pub fn back(&self) -> bool {
        let mut state = self.lock();
        if state.cursor == 0 {
            return false;
        }
        state.cursor -= 1;
        true
    }

    pub fn forward(&self) -> bool {
        let mut state = self.lock();
        if state.cursor + 1 >= state.entries.len() {
            return false;
        }
        state.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> String {
        let state = self.lock();
        state.entries[state.cursor].clone()
    }

    fn replace(&self, fragment: &str) {
        let mut state = self.lock();
        let cursor = state.cursor;
        state.entries[cursor] = fragment.to_string();
    }
}
