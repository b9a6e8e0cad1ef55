//! Action history records.
//!
//! Every play, end-turn, and CPU pass is appended to the engine's history.
//! The history is not consulted by the rules; it exists for replay,
//! debugging, and tests that assert on what actually happened.

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::cards::CardId;

/// One thing a combatant did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelAction {
    /// Played the given card copy.
    Play(CardId),
    /// The player ended their turn.
    EndTurn,
    /// The CPU had no affordable card.
    CpuPass,
}

/// A recorded action with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub side: Side,

    /// What they did.
    pub action: DuelAction,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: DuelAction, turn: u32) -> Self {
        Self { side, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let record = ActionRecord::new(Side::Player, DuelAction::Play(CardId(3)), 2);

        assert_eq!(record.side, Side::Player);
        assert_eq!(record.action, DuelAction::Play(CardId(3)));
        assert_eq!(record.turn, 2);
    }

    #[test]
    fn test_equality() {
        let a = ActionRecord::new(Side::Cpu, DuelAction::CpuPass, 1);
        let b = ActionRecord::new(Side::Cpu, DuelAction::CpuPass, 1);
        let c = ActionRecord::new(Side::Cpu, DuelAction::EndTurn, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialization() {
        let record = ActionRecord::new(Side::Player, DuelAction::EndTurn, 5);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
