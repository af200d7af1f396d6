//! Design tokens for theming
//!
//! - Palette (semantic color roles)
//! - Typography (text colors, small font size, icon size)

mod palette;
mod typography;

pub use palette::*;
pub use typography::*;
