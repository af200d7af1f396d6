//! The process-wide theme state is installed once per test binary, so every
//! check against it lives in a single test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use orchard_theme::{ThemeConfig, ThemeError, ThemePreset, ThemeState};

static REDRAWS: AtomicUsize = AtomicUsize::new(0);

fn count_redraw() {
    REDRAWS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn global_state_lifecycle() {
    assert!(ThemeState::try_get().is_none());

    // A broken config must not install anything.
    let err = ThemeState::init_from_config(ThemeConfig::default()).unwrap_err();
    assert!(matches!(err, ThemeError::MissingField(_)));
    assert!(!ThemeState::is_initialized());

    let state = ThemeState::try_init(ThemePreset::Orange.theme()).unwrap();
    assert_eq!(state.current().name, "Orange");

    // Later installs are rejected or ignored.
    assert!(matches!(
        ThemeState::try_init(ThemePreset::Midnight.theme()),
        Err(ThemeError::AlreadyInitialized)
    ));
    ThemeState::init(ThemePreset::Midnight.theme());
    assert_eq!(ThemeState::get().current().name, "Orange");

    orchard_theme::set_redraw_callback(count_redraw);
    let swaps = Arc::new(AtomicUsize::new(0));
    let swaps_clone = swaps.clone();
    let sub = ThemeState::get().subscribe(move |_| {
        swaps_clone.fetch_add(1, Ordering::SeqCst);
    });

    ThemeState::get().set_preset(ThemePreset::Midnight);
    assert_eq!(swaps.load(Ordering::SeqCst), 1);
    assert_eq!(REDRAWS.load(Ordering::SeqCst), 1);

    drop(sub);
    ThemeState::get().set_preset(ThemePreset::Orange);
    assert_eq!(swaps.load(Ordering::SeqCst), 1);
    assert_eq!(REDRAWS.load(Ordering::SeqCst), 2);
    assert_eq!(ThemeState::get().subscriber_count(), 0);
}
