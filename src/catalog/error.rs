//! Catalog load errors.

use thiserror::Error;

/// Failure to load the card catalog.
///
/// Every message starts with `Error loading cards`, since the debug screen
/// shows it verbatim in place of the card list.
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Error loading cards: resource '{name}' unavailable: {source}")]
    MissingResource {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad JSON, missing `cards` key, or a field that failed to deserialize.
    #[error("Error loading cards: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Error loading cards: card #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Error loading cards: duplicate card id '{id}'")]
    DuplicateId { id: String },

    /// Two cards with distinct ids render the same list entry.
    #[error("Error loading cards: two cards are listed as '{display}'")]
    DuplicateDisplay { display: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_prefix() {
        let errors = [
            CatalogLoadError::MissingResource {
                name: "cards.json".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            },
            CatalogLoadError::from(serde_json::from_str::<u32>("x").unwrap_err()),
            CatalogLoadError::EmptyId { index: 3 },
            CatalogLoadError::DuplicateId { id: "c1".to_string() },
            CatalogLoadError::DuplicateDisplay {
                display: "A(c, BUFF, cost 1)".to_string(),
            },
        ];

        for err in errors {
            assert!(err.to_string().starts_with("Error loading cards"), "{err}");
        }
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = CatalogLoadError::DuplicateId { id: "c1".to_string() };
        assert_eq!(err.to_string(), "Error loading cards: duplicate card id 'c1'");
    }
}
