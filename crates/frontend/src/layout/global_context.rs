use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::layout::tabs::tab_title;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// `?active=<tab key>` query string
#[derive(Debug, Default, Serialize, Deserialize)]
struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopen the tab named in the URL and keep the URL in sync with the active tab
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: TabQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = query.active {
            self.open_tab(&active_key, &tab_title(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let query = TabQuery {
                active: this.active.get(),
            };
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_search = if query_string.is_empty() {
                String::new()
            } else {
                format!("?{}", query_string)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_search {
                if let Some(w) = window() {
                    let new_url = if new_search.is_empty() {
                        w.location().pathname().unwrap_or_default()
                    } else {
                        new_search
                    };
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("Opening tab '{}'", key);
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

    pub fn close_tab(&self, key: &str) {
        let next_active = self.opened.with_untracked(|tabs| {
            self.active
                .with_untracked(|active| next_active_after_close(tabs, active.as_deref(), key))
        });
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.active.set(next_active);
    }

    /// Forget all tabs, e.g. on logout
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Active tab after closing `closed`: unchanged unless the active tab itself
/// is closed, then the last remaining one.
fn next_active_after_close(tabs: &[Tab], active: Option<&str>, closed: &str) -> Option<String> {
    match active {
        Some(active) if active != closed => Some(active.to_string()),
        _ => tabs
            .iter()
            .rev()
            .find(|t| t.key != closed)
            .map(|t| t.key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_closing_inactive_tab_keeps_active() {
        let t = tabs(&["a", "b", "c"]);
        assert_eq!(next_active_after_close(&t, Some("a"), "c").as_deref(), Some("a"));
    }

    #[test]
    fn test_closing_active_tab_activates_last_remaining() {
        let t = tabs(&["a", "b", "c"]);
        assert_eq!(next_active_after_close(&t, Some("c"), "c").as_deref(), Some("b"));
        assert_eq!(next_active_after_close(&tabs(&["a"]), Some("a"), "a"), None);
    }

    #[test]
    fn test_query_string() {
        let query = TabQuery {
            active: Some("a001_sales_order".into()),
        };
        assert_eq!(serde_qs::to_string(&query).unwrap(), "active=a001_sales_order");
        let parsed: TabQuery = serde_qs::from_str("").unwrap();
        assert!(parsed.active.is_none());
    }
}
