//! Catalog of card templates.
//!
//! The `Catalog` stores every template a game can contain and provides
//! lookup by `SpecId`. Registration order is deck-build order, so ids are
//! assigned sequentially.

use serde::{Deserialize, Serialize};

use super::spec::{CardKind, CardSpec, SpecId};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use card_duel::{Catalog, CardKind};
///
/// let catalog = Catalog::standard();
///
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.find_by_kind(CardKind::Attack).count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    specs: Vec<CardSpec>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped card set: five templates, four copies each in the deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.add("剣", CardKind::Attack, 10, 0, "10ダメージ");
        catalog.add("強斬り", CardKind::Attack, 25, 15, "25ダメージ");
        catalog.add("魔法の矢", CardKind::Attack, 15, 5, "15ダメージ");
        catalog.add("薬草", CardKind::Heal, 20, 10, "HPを20回復");
        catalog.add("魔力の源", CardKind::Support, 30, 0, "MPを30回復");
        catalog
    }

    /// Register a template with the next sequential ID.
    ///
    /// Returns the assigned ID.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        kind: CardKind,
        power: i64,
        cost: i64,
        effect: impl Into<String>,
    ) -> SpecId {
        let id = SpecId::new(self.specs.len() as u8);
        self.specs.push(CardSpec::new(id, name, kind, power, cost, effect));
        id
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: SpecId) -> Option<&CardSpec> {
        self.specs.get(id.raw() as usize)
    }

    /// Get a template by ID, panicking if not found.
    ///
    /// Use when the id is known to come from this catalog.
    #[must_use]
    pub fn get_unchecked(&self, id: SpecId) -> &CardSpec {
        self.get(id).expect("spec not found in catalog")
    }

    /// Find a template by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Find templates by kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardSpec> {
        self.specs.iter().filter(move |s| s.kind == kind)
    }

    /// Get the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over all templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardSpec> {
        self.specs.iter()
    }
}
