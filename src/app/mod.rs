//! Application lifecycle and platform integration.
//!
//! - `tray`: System tray, native menus and menu events
//! - `events`: Window event handlers

pub mod events;
pub mod tray;
