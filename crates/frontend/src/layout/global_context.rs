use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs and shell panel state. The active tab is mirrored to
/// `?active=<key>` so a reload reopens it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Per-tab data version; list pages reload when theirs is bumped.
    versions: RwSignal<HashMap<String, u32>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            versions: RwSignal::new(HashMap::new()),
        }
    }

    /// Reopens the tab named in the query string (or `fallback` when there is
    /// none) and keeps the URL in sync from then on.
    pub fn init_router_integration(&self, fallback: (&str, &str)) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        match params.get("active") {
            Some(active_key) if !active_key.is_empty() => {
                let title = super::tabs::tab_label_for_key(active_key);
                self.open_tab(active_key, &title);
            }
            _ => self.open_tab(fallback.0, fallback.1),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    /// Opens a tab, or focuses it when the key is already open.
    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open_tab: key='{}', title='{}'", key, title);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        let _ = self.opened.try_update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Closes a tab. Closing the active one activates the last remaining.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Closes every tab, e.g. on logout.
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
        self.versions.set(HashMap::new());
    }

    /// Tracked data version of a tab.
    pub fn version(&self, key: &str) -> u32 {
        self.versions.with(|v| v.get(key).copied().unwrap_or(0))
    }

    /// Tells an open list tab that its snapshot is outdated, e.g. after a
    /// form in another tab saved a record.
    pub fn mark_stale(&self, key: &str) {
        self.versions.update(|v| *v.entry(key.to_string()).or_insert(0) += 1);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
