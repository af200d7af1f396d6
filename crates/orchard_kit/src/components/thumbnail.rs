//! Thumbnail image
//!
//! A fixed-size image, circular unless `square`. Sizes: 30 by default,
//! `small` 20, `large` 60; `small` wins when both are set.

use crate::node::{Node, NodeKind, StyleBag, StyleProp};

pub const THUMBNAIL_SIZE: f32 = 30.0;
pub const THUMBNAIL_SIZE_SMALL: f32 = 20.0;
pub const THUMBNAIL_SIZE_LARGE: f32 = 60.0;

/// Resolved thumbnail geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailStyle {
    pub size: f32,
    pub border_radius: f32,
}

/// Thumbnail image
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Thumbnail {
    source: Option<String>,
    small: bool,
    large: bool,
    square: bool,
    accessibility_label: Option<String>,
    test_id: Option<String>,
}

impl Thumbnail {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Thumbnail with no image yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }

    pub fn square(mut self) -> Self {
        self.square = true;
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn resolve_style(&self) -> ThumbnailStyle {
        let size = if self.small {
            THUMBNAIL_SIZE_SMALL
        } else if self.large {
            THUMBNAIL_SIZE_LARGE
        } else {
            THUMBNAIL_SIZE
        };
        ThumbnailStyle {
            size,
            border_radius: if self.square { 0.0 } else { size / 2.0 },
        }
    }

    pub fn render(&self) -> Node {
        let style = self.resolve_style();
        let frame = StyleBag::new()
            .with(StyleProp::Width, style.size)
            .with(StyleProp::Height, style.size)
            .with(StyleProp::BorderRadius, style.border_radius)
            .with(StyleProp::Overflow, "hidden");

        let image = Node::new(NodeKind::Image {
            source: self.source.clone(),
            accessibility_label: self.accessibility_label.clone(),
            test_id: self.test_id.clone(),
        })
        .style(
            StyleBag::new()
                .with(StyleProp::Flex, 1.0)
                .with(StyleProp::ResizeMode, "cover"),
        );

        Node::view().style(frame).child(image)
    }
}

/// Create a thumbnail for `source`
pub fn thumbnail(source: impl Into<String>) -> Thumbnail {
    Thumbnail::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(thumbnail("a.png").resolve_style().size, 30.0);
        assert_eq!(thumbnail("a.png").large().resolve_style().size, 60.0);
        assert_eq!(thumbnail("a.png").large().small().resolve_style().size, 20.0);
    }

    #[test]
    fn test_shape() {
        let round = thumbnail("a.png").large().resolve_style();
        assert_eq!(round.border_radius, 30.0);
        assert_eq!(thumbnail("a.png").square().resolve_style().border_radius, 0.0);
    }

    #[test]
    fn test_render_keeps_source() {
        let node = thumbnail("avatar.png").accessibility_label("Avatar").render();
        assert_eq!(
            node.children[0].kind,
            NodeKind::Image {
                source: Some("avatar.png".into()),
                accessibility_label: Some("Avatar".into()),
                test_id: None,
            }
        );
        assert_eq!(Thumbnail::empty().render().walk().len(), 2);
    }
}
