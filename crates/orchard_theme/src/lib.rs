//! Orchard Theme System
//!
//! Shared theme values for every Orchard component, and the live state that
//! hands them out.
//!
//! # Overview
//!
//! - **Tokens**: a semantic [`Palette`] and [`Typography`], plus the base
//!   `border_radius` and `spacing` units carried by [`Theme`]
//! - **Configuration**: themes load from TOML (or any serde source) through
//!   [`ThemeConfig`]; missing required keys fail fast with [`ThemeError`]
//! - **State**: [`ThemeState`] holds the current theme, swaps it on demand and
//!   notifies subscribers; [`ThemeSubscription`] unsubscribes on drop
//! - **Presets**: built-in themes in [`ThemePreset`]
//!
//! # Quick Start
//!
//! ```rust
//! use orchard_theme::{ThemePreset, ThemeState};
//!
//! let state = ThemeState::new(ThemePreset::Orange.theme());
//! let _sub = state.subscribe(|theme| println!("theme is now {}", theme.name));
//!
//! state.set_theme(ThemePreset::Midnight.theme());
//! assert_eq!(state.current().name, "Midnight");
//! ```

mod error;
pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::{Result, ThemeError};
pub use presets::ThemePreset;
pub use state::{set_redraw_callback, SubscriptionId, ThemeState, ThemeSubscription};
pub use theme::{PaletteConfig, Theme, ThemeConfig, TypographyConfig};
pub use tokens::*;
