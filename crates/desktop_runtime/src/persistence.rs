//! Lightweight localStorage preference adapters.
//!
//! Only two values survive a reload: the preferred language and the
//! seen-the-tutorial flag. Layout, icon placement, and window geometry are
//! session state and reset on every boot. On non-WASM targets these are
//! no-ops so the reducer tests run natively.

use portfolio_content::Language;

/// Storage key for the preferred language code.
pub const LANGUAGE_KEY: &str = "preferredLanguage";
/// Storage key for the tutorial-seen marker.
pub const TUTORIAL_SEEN_KEY: &str = "hasSeenTutorial";

/// Loads the persisted language preference, if one was ever chosen.
///
/// `None` means a first visit: the boot flow shows the loading screen's
/// language prompt instead of going straight to the desktop.
pub fn load_preferred_language() -> Option<Language> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?.get_item(LANGUAGE_KEY).ok().flatten()?;
        Language::parse(&raw)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Persists the preferred language.
pub fn persist_preferred_language(language: Language) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(LANGUAGE_KEY, language.code()) {
                leptos::logging::warn!("language persist failed: {err:?}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
    }
}

/// Whether the first-visit tutorial has already been dismissed.
pub fn load_has_seen_tutorial() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()
            .and_then(|storage| storage.get_item(TUTORIAL_SEEN_KEY).ok().flatten())
            .as_deref()
            == Some("true")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Marks the tutorial as seen so it stays hidden on future visits.
pub fn persist_tutorial_seen() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(TUTORIAL_SEEN_KEY, "true") {
                leptos::logging::warn!("tutorial flag persist failed: {err:?}");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
