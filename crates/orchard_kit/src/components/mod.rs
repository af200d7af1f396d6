//! Kit components
//!
//! Each component is built with a constructor function and chained
//! configuration, then rendered against a [`Theme`](orchard_theme::Theme)
//! through [`ThemedComponent`](crate::injection::ThemedComponent).

pub mod button;
pub mod card_button;
pub mod default_button;
pub mod fab;
pub mod icon;
pub mod radio;
pub mod text_field;
pub mod thumbnail;

pub use button::{button, Button, ButtonContent, PressHandler};
pub use card_button::{card_button, CardButton};
pub use default_button::{default_button, DefaultButton};
pub use fab::{fab, fab_space, Fab, FabPlacement, FabPosition, FabStyle};
pub use icon::{icon, Icon, IconFamily, IconStyle, ResolvedGlyph};
pub use radio::{radio, Radio, RadioStyle};
pub use text_field::{
    text_field, FieldEvent, FieldPhase, FieldPresentation, FieldState, FloatingLabelController,
    HelperText, TextField,
};
pub use thumbnail::{thumbnail, Thumbnail, ThumbnailStyle};
