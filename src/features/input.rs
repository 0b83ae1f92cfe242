use crate::page::History;
use crate::services::navigator::Navigator;
use crate::services::render::{RenderOutcome, Renderer};
use crate::services::routes::RouteTable;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

const CHORD_LEADER: &str = "g";
const HOME_COMBO_KEY: &str = "k";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn meta(key: &str) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordState {
    Idle,
    Armed { deadline: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    // the key triggered a navigation; Ctrl/Cmd+K also suppresses the browser default
    Navigated {
        outcome: RenderOutcome,
        prevent_default: bool,
    },
    Armed,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Intercepted(RenderOutcome),
    PassThrough,
}

// turns clicks, history movement and keystrokes into navigator calls
pub struct InputBridge {
    navigator: Arc<Navigator>,
    renderer: Arc<Renderer>,
    history: Arc<dyn History>,
    routes: Arc<RouteTable>,
    chord_timeout: Duration,
    chord: Mutex<ChordState>,
}

impl InputBridge {
    pub fn new(
        navigator: Arc<Navigator>,
        renderer: Arc<Renderer>,
        history: Arc<dyn History>,
        routes: Arc<RouteTable>,
        chord_timeout: Duration,
    ) -> Self {
        Self {
            navigator,
            renderer,
            history,
            routes,
            chord_timeout,
            chord: Mutex::new(ChordState::Idle),
        }
    }

    /// Initial load: show whatever the address bar points at, home if nothing.
    pub async fn boot(&self) -> RenderOutcome {
        let fragment = self.history.fragment();
        self.navigator.navigate(&fragment).await
    }

    /// `anchor_href` is the href of the closest enclosing anchor, if any.
    /// Only in-page `#` links are taken over.
    pub async fn handle_click(&self, anchor_href: Option<&str>) -> ClickOutcome {
        match anchor_href {
            Some(href) if href.starts_with('#') => {
                debug!(href, "intercepted in-page link");
                ClickOutcome::Intercepted(self.navigator.navigate(href).await)
            }
            _ => ClickOutcome::PassThrough,
        }
    }

    // history already holds the new fragment, so render it without replacing the entry
    pub async fn handle_hash_change(&self) -> RenderOutcome {
        let fragment = self.history.fragment();
        debug!(fragment = %fragment, "hash changed");
        self.renderer.render(&fragment).await
    }

    pub async fn handle_key(&self, press: &KeyPress) -> KeyOutcome {
        let key = press.key.to_lowercase();

        if (press.ctrl || press.meta) && key == HOME_COMBO_KEY {
            let home = self.navigator.home_key().to_string();
            let outcome = self.navigator.navigate(&home).await;
            return KeyOutcome::Navigated {
                outcome,
                prevent_default: true,
            };
        }

        if key == CHORD_LEADER {
            *self.lock_chord() = ChordState::Armed {
                deadline: Instant::now() + self.chord_timeout,
            };
            return KeyOutcome::Armed;
        }

        let Some(target) = self.complete_chord(&key) else {
            return KeyOutcome::Ignored;
        };

        debug!(route_key = %target, "chord completed");
        let outcome = self.navigator.navigate(&target).await;
        KeyOutcome::Navigated {
            outcome,
            prevent_default: false,
        }
    }

    pub fn chord_state(&self) -> ChordState {
        let mut chord = self.lock_chord();
        expire(&mut chord);
        *chord
    }

    // disarms and hands back the route when `key` finishes an armed chord
    fn complete_chord(&self, key: &str) -> Option<String> {
        let mut chord = self.lock_chord();
        expire(&mut chord);
        if *chord == ChordState::Idle {
            return None;
        }

        let mut chars = key.chars();
        let shortcut = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return None,
        };

        let target = self.routes.key_for_shortcut(shortcut)?.to_string();
        *chord = ChordState::Idle;
        Some(target)
    }

    fn lock_chord(&self) -> MutexGuard<'_, ChordState> {
        self.chord.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn expire(chord: &mut ChordState) {
    if let ChordState::Armed { deadline } = *chord {
        if Instant::now() >= deadline {
            *chord = ChordState::Idle;
        }
    }
}
