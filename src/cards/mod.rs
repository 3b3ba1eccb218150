//! Card model.
//!
//! ## Key Types
//!
//! - `Card`: One catalog entry (id, name, type, tags, cost, effect code)
//! - `CardType`: Closed set of six card types
//!
//! A card's `Display` rendering is its display string, used both for the
//! card list and for resolving a list selection back to the card.

pub mod definition;

pub use definition::{Card, CardType};
