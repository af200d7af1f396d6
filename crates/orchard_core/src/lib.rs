//! Orchard Core
//!
//! Foundational primitives shared by the Orchard crates:
//!
//! - **Colors**: RGBA colors with hex/keyword parsing for theme files
//! - **Geometry**: edge insets reported by the host (safe areas)
//! - **State Machines**: flat statecharts with guards for interactive widgets
//!
//! # Example
//!
//! ```rust
//! use orchard_core::Color;
//!
//! let green = Color::parse("#28a745").unwrap();
//! assert_eq!(green, Color::from_hex(0x28a745));
//! assert_eq!(green.to_string(), "#28a745");
//! ```

pub mod color;
pub mod fsm;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
pub use geometry::EdgeInsets;
