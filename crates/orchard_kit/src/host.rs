//! Host collaborators
//!
//! The kit never talks to a platform directly. The host toolkit supplies:
//! - [`NodeHost`] to materialize [`Node`](crate::node::Node) trees
//! - [`SafeAreaProvider`] for device insets (FAB placement)
//! - [`GlyphResolver`] for icon font lookups

use orchard_core::EdgeInsets;

use crate::components::icon::IconFamily;
use crate::node::{NodeKind, StyleBag};

/// Receives node descriptions and builds native views from them
pub trait NodeHost {
    /// Host-side identifier of a created node
    type Handle: Copy;

    fn create(&mut self, kind: &NodeKind) -> Self::Handle;

    fn apply_style(&mut self, node: Self::Handle, style: &StyleBag);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);
}

/// Device safe-area insets
pub trait SafeAreaProvider {
    fn insets(&self) -> EdgeInsets;
}

/// Fixed insets, handy for tests and hosts without notches
impl SafeAreaProvider for EdgeInsets {
    fn insets(&self) -> EdgeInsets {
        *self
    }
}

/// Looks glyphs up in an icon font family
pub trait GlyphResolver {
    /// Codepoint for `name` in `family`, or `None` if the family lacks it
    fn resolve_glyph(&self, family: IconFamily, name: &str) -> Option<char>;
}
