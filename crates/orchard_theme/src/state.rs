//! Live theme state
//!
//! `ThemeState` owns the current [`Theme`] behind an `Arc`, so readers keep a
//! consistent snapshot while a swap is in flight. Components that must follow
//! theme changes register a listener with [`ThemeState::subscribe`]; the
//! returned [`ThemeSubscription`] removes the listener when dropped.
//!
//! A process-wide instance is installed once at startup with
//! [`ThemeState::init`] (or one of its fallible variants) and reached through
//! [`ThemeState::get`]. Standalone instances from [`ThemeState::new`] behave
//! the same and are what tests and explicit injection use.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock, Weak};

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::theme::{Theme, ThemeConfig};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the host layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every effective theme swap, after subscribers ran.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

new_key_type! {
    /// Identifier of a registered theme listener
    pub struct SubscriptionId;
}

/// Listener invoked with the new theme after each swap
pub type ThemeListener = Arc<dyn Fn(&Arc<Theme>) + Send + Sync>;

type Registry = Mutex<SlotMap<SubscriptionId, ThemeListener>>;

/// Current theme plus its subscribers
pub struct ThemeState {
    current: RwLock<Arc<Theme>>,
    listeners: Arc<Registry>,
    /// Bumped on every effective swap
    generation: AtomicU64,
}

impl ThemeState {
    /// Create a standalone theme state
    pub fn new(theme: Theme) -> Self {
        Self {
            current: RwLock::new(Arc::new(theme)),
            listeners: Arc::new(Mutex::new(SlotMap::with_key())),
            generation: AtomicU64::new(0),
        }
    }

    /// Install the process-wide theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(theme: Theme) {
        if THEME_STATE.set(ThemeState::new(theme)).is_err() {
            debug!("ThemeState::init - already initialized, keeping existing theme");
        }
    }

    /// Install the default preset as the process-wide theme
    pub fn init_default() {
        Self::init(ThemePreset::default().theme());
    }

    /// Install the process-wide theme state, reporting a second install
    pub fn try_init(theme: Theme) -> Result<&'static ThemeState> {
        THEME_STATE
            .set(ThemeState::new(theme))
            .map_err(|_| ThemeError::AlreadyInitialized)?;
        Ok(Self::get())
    }

    /// Validate `config` and install it as the process-wide theme.
    ///
    /// Nothing is installed when validation fails.
    pub fn init_from_config(config: ThemeConfig) -> Result<&'static ThemeState> {
        let theme = Theme::from_config(config)?;
        Self::try_init(theme)
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Check if the global theme state has been installed
    pub fn is_initialized() -> bool {
        THEME_STATE.get().is_some()
    }

    // ========== Theme Access ==========

    /// Snapshot of the current theme
    pub fn current(&self) -> Arc<Theme> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of effective swaps so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Replace the current theme and notify subscribers.
    ///
    /// Swapping in a theme equal to the current one is a no-op.
    pub fn set_theme(&self, theme: Theme) {
        let theme = Arc::new(theme);
        {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if **current == *theme {
                return;
            }
            debug!(
                "ThemeState::set_theme - switching from {:?} to {:?}",
                current.name, theme.name
            );
            *current = theme.clone();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);

        // Listeners run outside the registry lock so they may (un)subscribe.
        // One dropped by an earlier listener in this swap is skipped.
        let listeners: Vec<(SubscriptionId, ThemeListener)> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, listener)| (id, listener.clone()))
            .collect();
        for (id, listener) in listeners {
            let live = self
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(id);
            if live {
                listener(&theme);
            }
        }

        trigger_redraw();
    }

    /// Switch to a built-in preset
    pub fn set_preset(&self, preset: ThemePreset) {
        self.set_theme(preset.theme());
    }

    // ========== Subscriptions ==========

    /// Register a listener for theme swaps.
    ///
    /// The listener stays registered until the returned subscription is
    /// dropped or [`ThemeSubscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(&Arc<Theme>) + Send + Sync + 'static,
    {
        let id = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(listener));
        debug!("ThemeState::subscribe - registered {:?}", id);

        ThemeSubscription {
            id,
            registry: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemePreset::default().theme())
    }
}

/// Handle to a registered theme listener; unsubscribes on drop
#[must_use = "dropping a ThemeSubscription unsubscribes immediately"]
pub struct ThemeSubscription {
    id: SubscriptionId,
    registry: Weak<Registry>,
}

impl ThemeSubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(self.id)
        })
    }

    /// Unsubscribe now
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(self.id);
            debug!("ThemeSubscription::drop - released {:?}", self.id);
        }
    }
}

impl std::fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
