//! Orchard Component Kit
//!
//! Themed mobile components that turn a [`Theme`] plus per-instance variant
//! flags into render-ready node descriptions. Painting is left to the host
//! toolkit through the collaborator traits in [`host`].
//!
//! # Example
//!
//! ```ignore
//! use orchard_kit::prelude::*;
//!
//! ThemeState::init_default();
//!
//! let save = with_theme(
//!     button()
//!         .title("Save")
//!         .primary()
//!         .on_press(|| println!("saved")),
//! );
//! let node = save.render();
//! ```
//!
//! # Pieces
//!
//! - [`variant`]: the shared variant resolver (flags + theme -> style)
//! - [`injection`]: [`Themed`] wrappers that follow theme swaps
//! - [`components`]: buttons, FAB, icon, radio, text field, thumbnail
//! - [`layout`]: page chrome with fixed paint order

pub mod components;
pub mod host;
pub mod injection;
pub mod layout;
pub mod node;
pub mod variant;

pub use injection::{with_theme, Themed, ThemedComponent};
pub use orchard_core::{Color, EdgeInsets};
pub use orchard_theme::{Theme, ThemePreset, ThemeState};

/// Everything needed to build themed screens
pub mod prelude {
    pub use crate::components::*;
    pub use crate::host::{GlyphResolver, NodeHost, SafeAreaProvider};
    pub use crate::injection::{with_theme, Themed, ThemedComponent};
    pub use crate::layout::{main_layout, MainLayout, ScrollOptionValue, ScrollOptions};
    pub use crate::node::{Node, NodeKind, StyleBag, StyleProp, StyleValue};
    pub use crate::variant::{
        resolve, role_color, ResolvedStyle, Role, SizeClass, StyleOverrides, VariantFlags,
    };
    pub use orchard_core::{Color, EdgeInsets};
    pub use orchard_theme::{Theme, ThemePreset, ThemeState};
}
