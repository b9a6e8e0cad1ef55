//! Card instances - physical copies in a game.
//!
//! `CardInstance` represents one copy of a template. The deck holds four
//! copies of each template; each gets its own `CardId` at deck creation.
//! All container membership (deck, hands, discard) is tracked by id.

use serde::{Deserialize, Serialize};

use super::spec::SpecId;

/// Unique identifier for one card copy in one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One physical copy of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub id: CardId,

    /// The template this copy was printed from.
    pub spec: SpecId,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(id: CardId, spec: SpecId) -> Self {
        Self { id, spec }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_instance() {
        let instance = CardInstance::new(CardId::new(12), SpecId::new(2));

        assert_eq!(instance.id, CardId::new(12));
        assert_eq!(instance.spec, SpecId::new(2));
    }

    #[test]
    fn test_copies_are_distinct() {
        // Two copies of the same template compare unequal by id.
        let a = CardInstance::new(CardId::new(0), SpecId::new(0));
        let b = CardInstance::new(CardId::new(1), SpecId::new(0));

        assert_eq!(a.spec, b.spec);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let instance = CardInstance::new(CardId::new(3), SpecId::new(1));

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
