//! Theme injection
//!
//! Components render against a `&Theme` they never have to fetch themselves.
//! [`Themed`] owns a component, keeps the theme it was last told about, and
//! follows swaps through a [`ThemeSubscription`]. Dropping the wrapper
//! releases the subscription, so an unmounted component is never notified.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use orchard_theme::{Theme, ThemeState, ThemeSubscription};
use tracing::debug;

/// A component that renders from a theme
pub trait ThemedComponent {
    type Output;

    fn render(&self, theme: &Theme) -> Self::Output;
}

/// A component bound to a theme state
pub struct Themed<C> {
    component: C,
    theme: Arc<RwLock<Arc<Theme>>>,
    stale: Arc<AtomicBool>,
    subscription: ThemeSubscription,
}

impl<C: ThemedComponent> Themed<C> {
    /// Bind `component` to `state`
    pub fn mount(component: C, state: &ThemeState) -> Self {
        Self::mount_with(component, state, || {})
    }

    /// Bind `component` to `state`, calling `on_change` after every swap
    ///
    /// `on_change` is the host's re-render hook; it runs on the thread that
    /// swapped the theme.
    pub fn mount_with<F>(component: C, state: &ThemeState, on_change: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let theme = Arc::new(RwLock::new(state.current()));
        let stale = Arc::new(AtomicBool::new(false));

        let subscription = {
            let theme = theme.clone();
            let stale = stale.clone();
            state.subscribe(move |next| {
                *theme.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
                stale.store(true, Ordering::SeqCst);
                on_change();
            })
        };
        debug!("Themed::mount - bound to {:?}", subscription.id());

        Self {
            component,
            theme,
            stale,
            subscription,
        }
    }

    /// Render against the latest theme
    pub fn render(&self) -> C::Output {
        self.stale.store(false, Ordering::SeqCst);
        let theme = self.theme();
        self.component.render(&theme)
    }

    /// Whether a swap happened since the last [`Themed::render`]
    pub fn needs_render(&self) -> bool {
        self.stale.load(Ordering::SeqCst)
    }

    /// The theme the next render will use
    pub fn theme(&self) -> Arc<Theme> {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Whether the theme subscription is still live
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the subscription and hand the component back
    pub fn unmount(self) -> C {
        let Themed {
            component,
            subscription,
            ..
        } = self;
        subscription.unsubscribe();
        component
    }
}

/// Bind `component` to the process-wide theme state.
///
/// # Panics
///
/// Panics if no theme was installed with [`ThemeState::init`].
pub fn with_theme<C: ThemedComponent>(component: C) -> Themed<C> {
    Themed::mount(component, ThemeState::get())
}
