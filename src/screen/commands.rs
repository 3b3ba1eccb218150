//! Command table for the debug screen.
//!
//! UI events are routed through a table keyed by UI element rather than
//! per-widget callbacks. The host reports "element X was clicked"; the
//! table says which screen command that means.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Interactive elements of the debug screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiElement {
    /// "Reload cards" button.
    ReloadButton,
    /// The scrollable card list.
    CardList,
    /// Button that moves on to the next screen.
    NextButton,
}

/// Screen operations a UI element can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reload the card catalog.
    Reload,
    /// Resolve the highlighted list entry to a card.
    Select,
    /// Hand the selection to the next screen and switch to it.
    Proceed,
}

/// Element → command bindings.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::screen::{Command, CommandTable, UiElement};
///
/// let mut table = CommandTable::default();
/// assert_eq!(table.command_for(UiElement::ReloadButton), Some(Command::Reload));
///
/// table.bind(UiElement::CardList, Command::Proceed);
/// assert_eq!(table.command_for(UiElement::CardList), Some(Command::Proceed));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTable {
    bindings: FxHashMap<UiElement, Command>,
}

impl Default for CommandTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind(UiElement::ReloadButton, Command::Reload);
        table.bind(UiElement::CardList, Command::Select);
        table.bind(UiElement::NextButton, Command::Proceed);
        table
    }
}

impl CommandTable {
    /// A table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind an element, returning the command it was bound to before.
    pub fn bind(&mut self, element: UiElement, command: Command) -> Option<Command> {
        self.bindings.insert(element, command)
    }

    /// Remove an element's binding.
    pub fn unbind(&mut self, element: UiElement) -> Option<Command> {
        self.bindings.remove(&element)
    }

    #[must_use]
    pub fn command_for(&self, element: UiElement) -> Option<Command> {
        self.bindings.get(&element).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
