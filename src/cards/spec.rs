//! Card templates - static card data.
//!
//! `CardSpec` holds the immutable properties of a card. For example, 「剣」
//! is an attack with power 10 and cost 0 - these never change.
//!
//! Copy-specific identity lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Reduce the opponent's HP by `power`.
    Attack,
    /// Restore `power` HP to the user.
    Heal,
    /// Restore `power` MP to the user.
    Support,
}

/// Unique identifier for a card template.
///
/// This identifies the "type" of card (e.g. 「剣」), not a specific copy
/// in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecId(pub u8);

impl SpecId {
    /// Create a new spec ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SpecId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spec({})", self.0)
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use card_duel::{CardKind, CardSpec, SpecId};
///
/// let sword = CardSpec::new(SpecId::new(0), "剣", CardKind::Attack, 10, 0, "10ダメージ");
///
/// assert_eq!(sword.power, 10);
/// assert_eq!(sword.cost, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Unique identifier for this template.
    pub id: SpecId,

    /// Card name.
    pub name: String,

    /// Effect category.
    pub kind: CardKind,

    /// Effect magnitude (damage dealt, HP restored, or MP restored).
    pub power: i64,

    /// MP the user pays to play this card.
    pub cost: i64,

    /// Human-readable effect line for display.
    pub effect: String,
}

impl CardSpec {
    /// Create a new card template.
    #[must_use]
    pub fn new(
        id: SpecId,
        name: impl Into<String>,
        kind: CardKind,
        power: i64,
        cost: i64,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            power,
            cost,
            effect: effect.into(),
        }
    }

    /// Can a combatant with `mp` afford this card?
    #[must_use]
    pub fn affordable_with(&self, mp: i64) -> bool {
        self.cost <= mp
    }
}
