//! Debug screen core.
//!
//! ## Key Types
//!
//! - `DebugScreen`: Catalog state, selection and FPS readout of one screen
//! - `CommandTable`: UI element → command bindings
//! - `CardListView` / `ScreenRouter`: What the screen needs from the host
//! - `SelectionList` / `PendingTransition`: Headless host implementations
//! - `FpsCounter`: Frame rate over a fixed window
//!
//! Rendering, layout and the actual screen switch belong to the host.

pub mod collaborators;
pub mod commands;
pub mod debug_screen;
pub mod fps;

pub use collaborators::{CardListView, PendingTransition, ScreenRouter, SelectionList};
pub use commands::{Command, CommandTable, UiElement};
pub use debug_screen::{CatalogState, DebugScreen};
pub use fps::FpsCounter;
