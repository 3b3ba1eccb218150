//! Resolving a list selection back to its card.

use super::entries::Catalog;
use crate::cards::Card;

/// Find the card whose display string equals `display`.
///
/// Scans in catalog order and stops at the first exact match. An absent
/// selection, an unknown string or an empty catalog all give `None`.
///
/// ```
/// use rust_ccg_catalog::cards::{Card, CardType};
/// use rust_ccg_catalog::catalog::{resolve, Catalog};
///
/// let catalog = Catalog::from_cards(vec![Card::new("c1", "Slash", CardType::AttackClose)]).unwrap();
///
/// assert_eq!(resolve(Some("Slash(c1, ATTACK_CLOSE, cost 0)"), &catalog).map(|c| c.id.as_str()), Some("c1"));
/// assert!(resolve(Some("Slash"), &catalog).is_none());
/// assert!(resolve(None, &catalog).is_none());
/// ```
#[must_use]
pub fn resolve<'a>(display: Option<&str>, catalog: &'a Catalog) -> Option<&'a Card> {
    let display = display?;
    catalog
        .entries()
        .find(|(candidate, _)| *candidate == display)
        .map(|(_, card)| card)
}
