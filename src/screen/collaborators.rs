//! Host collaborators of the debug screen.
//!
//! The screen only needs two things from the host UI:
//! - a selectable list of strings (`CardListView`)
//! - a way to pass a card to the next screen and switch to it (`ScreenRouter`)
//!
//! `SelectionList` and `PendingTransition` are headless implementations,
//! used by tests and by hosts that drive the screen without a window.

use crate::cards::Card;

/// A selectable list of strings.
pub trait CardListView {
    /// Replace all items. Any highlight on the old items is dropped.
    fn set_items(&mut self, items: Vec<String>);

    /// Currently highlighted item, if any.
    fn selected(&self) -> Option<String>;
}

/// Hands state to the next screen and asks the host to switch to it.
pub trait ScreenRouter {
    /// Shared state read by the next screen.
    fn set_selected_card(&mut self, card: Option<Card>);

    /// Ask the host to switch screens.
    fn request_transition(&mut self);
}

/// Headless list: items plus an optional highlighted index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionList {
    items: Vec<String>,
    highlighted: Option<usize>,
}

impl SelectionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Highlight the item at `index`. Out-of-range indices clear the highlight.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = (index < self.items.len()).then_some(index);
    }

    /// Highlight the first item equal to `item`. Returns false if none matched.
    pub fn highlight_item(&mut self, item: &str) -> bool {
        self.highlighted = self.items.iter().position(|i| i == item);
        self.highlighted.is_some()
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }
}

impl CardListView for SelectionList {
    fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.highlighted = None;
    }

    fn selected(&self) -> Option<String> {
        self.highlighted.and_then(|i| self.items.get(i)).cloned()
    }
}

/// Headless router recording what the screen handed over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingTransition {
    /// Card passed to the next screen.
    pub card: Option<Card>,

    /// Number of transition requests.
    pub requests: u32,
}

impl PendingTransition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn was_requested(&self) -> bool {
        self.requests > 0
    }
}

impl ScreenRouter for PendingTransition {
    fn set_selected_card(&mut self, card: Option<Card>) {
        self.card = card;
    }

    fn request_transition(&mut self) {
        self.requests += 1;
    }
}
