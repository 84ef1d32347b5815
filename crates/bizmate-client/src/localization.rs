//! # Localization Service
//!
//! Holds the current UI language, persists it, and notifies listeners when
//! it changes.
//!
//! Constructed once at application start and passed to whatever needs it;
//! there is no global instance.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   start ──► [en] ◄──────── set_language("en") ────────┐                 │
//! │              │                                        │                 │
//! │              └───────── set_language("ar") ────────► [ar]               │
//! │                                                                         │
//! │   load_saved():      stored "en"/"ar" → transition + notify             │
//! │                      anything else    → stay, silently                  │
//! │   set_language(fr):  Err(UnsupportedLanguage), no state change          │
//! │   persist failure:   Ok(false), no state change, no notification        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, RwLock, Weak};

use bizmate_core::i18n::{FlexDirection, TextAlign, TextDirection};
use bizmate_core::Language;
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult};
use crate::storage::{KeyValueStore, StorageKey};

/// Callback invoked with `(language, is_rtl)` after every language change.
pub type Listener = Arc<dyn Fn(Language, bool) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by [`LocalizationService::add_listener`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Removes the listener. A no-op if the service is gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Process-wide language state.
pub struct LocalizationService {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Language>,
    registry: Arc<Mutex<Registry>>,
    /// Held across persist + switch so the stored value and the current
    /// language always end up equal.
    update: tokio::sync::Mutex<()>,
}

impl fmt::Debug for LocalizationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationService")
            .field("current", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl LocalizationService {
    /// Creates the service in the initial `en` state.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_language(store, Language::default())
    }

    /// Creates the service starting in `language`. Nothing is persisted
    /// and no listener is notified.
    pub fn with_language(store: Arc<dyn KeyValueStore>, language: Language) -> Self {
        LocalizationService {
            store,
            current: RwLock::new(language),
            registry: Arc::new(Mutex::new(Registry::default())),
            update: tokio::sync::Mutex::new(()),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Loads the persisted language.
    ///
    /// A stored `en`/`ar` becomes current and listeners are notified. A
    /// missing or unrecognized value, or a storage failure, leaves the
    /// state as it is.
    pub async fn load_saved(&self) -> Language {
        let _guard = self.update.lock().await;
        match self.store.get(StorageKey::Language).await {
            Ok(Some(code)) => match Language::from_code(&code) {
                Some(language) => {
                    debug!(%language, "Loaded saved language");
                    self.transition(language);
                }
                None => debug!(code = %code, "Ignoring unrecognized saved language"),
            },
            Ok(None) => debug!("No saved language"),
            Err(e) => warn!(error = %e, "Failed to read saved language"),
        }
        self.current()
    }

    /// Switches to `code`, persisting it first.
    ///
    /// ## Returns
    /// - `Ok(true)`: persisted, switched, listeners notified
    /// - `Ok(false)`: persisting failed; nothing changed
    /// - `Err(ClientError::Core(UnsupportedLanguage))`: `code` is not `en`/`ar`
    pub async fn set_language(&self, code: &str) -> ClientResult<bool> {
        let language: Language = code.parse().map_err(ClientError::Core)?;
        Ok(self.set(language).await)
    }

    /// Typed variant of [`set_language`](Self::set_language).
    pub async fn set(&self, language: Language) -> bool {
        let _guard = self.update.lock().await;
        if let Err(e) = self.store.set(StorageKey::Language, language.code()).await {
            warn!(%language, error = %e, "Failed to persist language; keeping current");
            return false;
        }

        info!(%language, "Language changed");
        self.transition(language);
        true
    }

    fn transition(&self, language: Language) {
        {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            *current = language;
        }
        self.notify(language);
    }

    fn notify(&self, language: Language) {
        // Snapshot so a listener can unsubscribe without deadlocking.
        let listeners: Vec<Listener> = {
            let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(language, language.is_rtl());
        }
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Registers a listener called after every successful transition.
    pub fn add_listener<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Language, bool) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .listeners
            .len()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn current(&self) -> Language {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_rtl(&self) -> bool {
        self.current().is_rtl()
    }

    pub fn text_direction(&self) -> TextDirection {
        self.current().text_direction()
    }

    pub fn flex_direction(&self) -> FlexDirection {
        self.current().flex_direction()
    }

    pub fn text_align(&self) -> TextAlign {
        self.current().text_align()
    }

    /// Translates `key`, falling back to the key itself.
    pub fn translate(&self, key: &str) -> String {
        self.current().translate(key).to_string()
    }

    /// Translates `key`, falling back to `fallback`.
    pub fn translate_or(&self, key: &str, fallback: &str) -> String {
        self.current().translate_or(key, fallback).to_string()
    }

    /// Alert text for `error` in the current language.
    pub fn alert_message(&self, error: &ClientError) -> String {
        error.alert_message(self.current())
    }
}
