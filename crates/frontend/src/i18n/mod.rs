//! Runtime-switchable internationalization.
//!
//! The current language code is persisted separately from the dictionary
//! content; dictionaries are fetched on demand as flat key → string maps.
//! Missing keys fall back to hard-coded English defaults at the call site.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "currentLanguage";
const DEFAULT_LANGUAGE: &str = "en";

/// Languages offered in the header selector: (code, fallback label).
pub const LANGUAGES: [(&str, &str); 2] = [("en", "English"), ("ru", "Русский")];

/// I18n context store.
#[derive(Clone, Copy)]
pub struct I18n {
    pub current_language: RwSignal<String>,
    pub translations: RwSignal<HashMap<String, String>>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            current_language: RwSignal::new(load_language_from_storage()),
            translations: RwSignal::new(HashMap::new()),
        }
    }

    /// Look up a key, falling back to the given default.
    pub fn t(&self, key: &str, fallback: &str) -> String {
        self.translations
            .with(|map| map.get(key).cloned())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Switch the language, persist the choice and reload the dictionary.
    ///
    /// The reload is asynchronous and never blocks navigation; until it
    /// lands, call sites render their fallbacks.
    pub fn set_language(&self, language: &str) {
        self.current_language.set(language.to_string());
        save_language_to_storage(language);
        self.reload_translations();
    }

    /// Fetch the dictionary for the current language in the background.
    /// A failed fetch leaves an empty map; a response arriving after the
    /// language changed again is discarded.
    pub fn reload_translations(&self) {
        let this = *self;
        let language = self.current_language.get_untracked();
        spawn_local(async move {
            let dictionary = match fetch_translations(&language).await {
                Ok(map) => map,
                Err(err) => {
                    log::error!("failed to load translations for {language}: {err}");
                    HashMap::new()
                }
            };
            if this.current_language.get_untracked() == language {
                this.translations.set(dictionary);
            }
        });
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the i18n context.
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found")
}

async fn fetch_translations(language: &str) -> Result<HashMap<String, String>, String> {
    let url = format!("/static/i18n/{}.json", language);
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<HashMap<String, String>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn load_language_from_storage() -> String {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

fn save_language_to_storage(language: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(err) = storage.set_item(LANGUAGE_STORAGE_KEY, language) {
            log::warn!("failed to persist language choice: {err:?}");
        }
    }
}
