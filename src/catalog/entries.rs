//! The loaded card catalog.
//!
//! `Catalog` holds the cards of one load in source order, with the display
//! string of each card alongside. Both sequences always have the same
//! length. Persistent vectors make cloning a catalog O(1), so a screen can
//! hand out snapshots without copying cards.

use im::Vector;
use rustc_hash::FxHashSet;

use super::error::CatalogLoadError;
use crate::cards::{Card, CardType};

/// Ordered cards of one catalog load.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::cards::{Card, CardType};
/// use rust_ccg_catalog::catalog::Catalog;
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new("c1", "Slash", CardType::AttackClose).with_cost(1),
///     Card::new("d1", "Guard", CardType::Defense),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.display_strings()[0], "Slash(c1, ATTACK_CLOSE, cost 1)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    cards: Vector<Card>,
    display: Vector<String>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, keeping the given order.
    ///
    /// Fails if a card has an empty id, two cards share an id, or two
    /// cards render the same display string (the second could never be
    /// selected). Nothing is deduplicated or dropped.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogLoadError> {
        validate_ids(&cards)?;

        let display: Vec<String> = cards.iter().map(Card::display_string).collect();
        validate_display(&display)?;

        Ok(Self {
            cards: cards.into_iter().collect(),
            display: display.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a list position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Display string at a list position.
    #[must_use]
    pub fn display_at(&self, index: usize) -> Option<&str> {
        self.display.get(index).map(String::as_str)
    }

    /// Display strings in catalog order, as shown in the card list.
    #[must_use]
    pub fn display_strings(&self) -> Vec<String> {
        self.display.iter().cloned().collect()
    }

    /// Cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over `(display string, card)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Card)> {
        self.display.iter().map(String::as_str).zip(self.cards.iter())
    }

    /// Index of the first card whose display string equals `display`.
    #[must_use]
    pub fn position_of(&self, display: &str) -> Option<usize> {
        self.display.iter().position(|d| d == display)
    }

    /// Find a card by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }

    /// Find cards carrying a tag.
    pub fn find_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| c.has_tag(tag))
    }
}

fn validate_ids(cards: &[Card]) -> Result<(), CatalogLoadError> {
    let mut seen = FxHashSet::default();
    for (index, card) in cards.iter().enumerate() {
        if card.id.is_empty() {
            return Err(CatalogLoadError::EmptyId { index });
        }
        if !seen.insert(card.id.as_str()) {
            return Err(CatalogLoadError::DuplicateId { id: card.id.clone() });
        }
    }
    Ok(())
}

fn validate_display(display: &[String]) -> Result<(), CatalogLoadError> {
    let mut seen = FxHashSet::default();
    for entry in display {
        if !seen.insert(entry.as_str()) {
            return Err(CatalogLoadError::DuplicateDisplay {
                display: entry.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_cards(vec![
            Card::new("c1", "Slash", CardType::AttackClose).with_cost(1).with_tag("blade"),
            Card::new("r1", "Arrow", CardType::AttackRanged).with_cost(2),
            Card::new("d1", "Guard", CardType::Defense).with_tag("blade"),
        ])
        .unwrap()
    }

    #[test]
    fn test_order_and_parallel_sequences() {
        let catalog = sample();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.display_strings().len(), catalog.cards().len());
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "r1", "d1"]);

        for (display, card) in catalog.entries() {
            assert_eq!(display, card.to_string());
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::from_cards(vec![
            Card::new("c1", "Slash", CardType::AttackClose),
            Card::new("", "Nameless", CardType::Status),
        ]);
        assert!(matches!(result, Err(CatalogLoadError::EmptyId { index: 1 })));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_cards(vec![
            Card::new("c1", "Slash", CardType::AttackClose),
            Card::new("c1", "Slash Again", CardType::AttackClose),
        ]);
        match result {
            Err(CatalogLoadError::DuplicateId { id }) => assert_eq!(id, "c1"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_colliding_display_strings_rejected() {
        let first = Card::new("b, BUFF, cost 1)(c", "A", CardType::Buff).with_cost(1);
        let second = Card::new("c", "A(b, BUFF, cost 1)", CardType::Buff).with_cost(1);
        assert_ne!(first.id, second.id);
        assert_eq!(first.to_string(), second.to_string());

        match Catalog::from_cards(vec![first, second]) {
            Err(CatalogLoadError::DuplicateDisplay { display }) => {
                assert_eq!(display, "A(b, BUFF, cost 1)(c, BUFF, cost 1)");
            }
            other => panic!("expected duplicate display error, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = sample();

        assert_eq!(catalog.position_of("Arrow(r1, ATTACK_RANGED, cost 2)"), Some(1));
        assert_eq!(catalog.position_of("Arrow"), None);
        assert_eq!(catalog.display_at(2), Some("Guard(d1, DEFENSE, cost 0)"));
        assert_eq!(catalog.get(0).map(|c| c.name.as_str()), Some("Slash"));
        assert!(catalog.get(3).is_none());
        assert_eq!(catalog.find_by_id("d1").map(|c| c.cost), Some(0));
        assert!(catalog.find_by_id("zz").is_none());
    }

    #[test]
    fn test_find_by_type_and_tag() {
        let catalog = sample();

        assert_eq!(catalog.find_by_type(CardType::AttackRanged).count(), 1);
        assert_eq!(catalog.find_by_type(CardType::Buff).count(), 0);
        let bladed: Vec<_> = catalog.find_by_tag("blade").map(|c| c.id.as_str()).collect();
        assert_eq!(bladed, ["c1", "d1"]);
    }

    #[test]
    fn test_clone_is_equal() {
        let catalog = sample();
        let snapshot = catalog.clone();
        assert_eq!(catalog, snapshot);
        assert!(Catalog::new().is_empty());
    }
}
