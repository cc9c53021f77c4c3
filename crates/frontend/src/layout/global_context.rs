use crate::layout::sidebar::menu_label;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

pub const DEFAULT_PAGE: &str = "dashboard";

/// Navigation state of the admin shell: the active page key is mirrored to
/// `?active=` so a reload reopens the same page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            self.active.set(active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let new_url = format!("?{}", query_for(&active_key));

            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | Charter Admin", menu_label(&active_key)));
            }

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
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

    pub fn open(&self, key: &str) {
        log::debug!("open page '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

fn query_for(active_key: &str) -> String {
    serde_qs::to_string(&HashMap::from([("active", active_key)])).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_key_round_trip() {
        assert_eq!(active_from_query("?active=a002_boat"), Some("a002_boat".to_string()));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(query_for("a008_article"), "active=a008_article");
    }
}
