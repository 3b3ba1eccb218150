//! Card definitions - static card data.
//!
//! A `Card` is built by deserializing one entry of the card catalog.
//! Once a catalog is loaded its cards are never edited; a reload
//! replaces all of them.
//!
//! The `Display` rendering of a card is its *display string*. The debug
//! screen shows it in the card list and matches list selections back to
//! cards with it, so it must stay stable for a given card. Ids and names
//! are free text, so distinct cards can still render alike; `Catalog`
//! rejects such collisions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Card type. Closed set; unknown names fail deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    /// Melee attack.
    AttackClose,
    /// Ranged attack.
    AttackRanged,
    Defense,
    Buff,
    Debuff,
    Status,
}

impl CardType {
    /// All card types, in declaration order.
    pub const ALL: [CardType; 6] = [
        CardType::AttackClose,
        CardType::AttackRanged,
        CardType::Defense,
        CardType::Buff,
        CardType::Debuff,
        CardType::Status,
    ];

    /// Catalog name of this type (`ATTACK_CLOSE`, `BUFF`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::AttackClose => "ATTACK_CLOSE",
            CardType::AttackRanged => "ATTACK_RANGED",
            CardType::Defense => "DEFENSE",
            CardType::Buff => "BUFF",
            CardType::Debuff => "DEBUFF",
            CardType::Status => "STATUS",
        }
    }

    /// True for both attack variants.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, CardType::AttackClose | CardType::AttackRanged)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playing card as described by the catalog.
///
/// ## Example
///
/// ```
/// use rust_ccg_catalog::cards::{Card, CardType};
///
/// let slash = Card::new("c1", "Slash", CardType::AttackClose)
///     .with_cost(1)
///     .with_tag("blade");
///
/// assert_eq!(slash.to_string(), "Slash(c1, ATTACK_CLOSE, cost 1)");
/// assert!(slash.has_tag("blade"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Identifier, unique within one catalog.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Unordered; kept sorted so rendering is deterministic.
    #[serde(default)]
    pub tags: BTreeSet<String>,

    pub cost: u32,

    /// Effect script identifier. Interpreted by the game rules, not here.
    #[serde(default)]
    pub effect_code: String,

    /// Advisory text shown to the player.
    #[serde(default)]
    pub suggestion: String,
}

impl Card {
    /// Create a card with zero cost and empty text fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            card_type,
            tags: BTreeSet::new(),
            cost: 0,
            effect_code: String::new(),
            suggestion: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn with_effect_code(mut self, code: impl Into<String>) -> Self {
        self.effect_code = code.into();
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The display string (same as `to_string()`).
    #[must_use]
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {}, cost {})",
            self.name, self.id, self.card_type, self.cost
        )
    }
}
