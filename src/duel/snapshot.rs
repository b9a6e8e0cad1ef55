//! Save and restore of a whole game.
//!
//! `DuelSnapshot` captures everything, including the RNG stream position,
//! so a restored game continues with the exact random sequence the saved
//! one would have produced. Instances are stored as a list rather than the
//! engine's hash map so JSON round-trips work too (JSON map keys must be
//! strings).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::DuelConfig;
use super::engine::DuelEngine;
use super::phase::{Outcome, TurnPhase};
use super::state::{Combatant, DuelState};
use crate::cards::{CardId, CardInstance, Catalog};
use crate::core::{ActionRecord, GameRng, GameRngState, Message, SideMap};

/// Complete serializable state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelSnapshot {
    pub config: DuelConfig,
    pub combatants: SideMap<Combatant>,
    pub hands: SideMap<Vec<CardId>>,
    pub deck: Vec<CardId>,
    pub discard: Vec<CardId>,
    pub cards: Vec<CardInstance>,
    pub rng: GameRngState,
    pub next_card_id: u32,
    pub phase: TurnPhase,
    pub outcome: Option<Outcome>,
    pub card_used_this_turn: bool,
    pub turn: u32,
    pub epoch: u64,
    pub message: Message,
    pub history: Vector<ActionRecord>,
}

impl DuelSnapshot {
    /// Encode to bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

impl DuelEngine {
    /// Capture the complete state of this game.
    #[must_use]
    pub fn snapshot(&self) -> DuelSnapshot {
        let mut cards: Vec<_> = self.state.cards.values().copied().collect();
        cards.sort_by_key(|inst| inst.id);

        DuelSnapshot {
            config: self.config.clone(),
            combatants: self.state.combatants.clone(),
            hands: self.state.hands.clone(),
            deck: self.state.deck.clone(),
            discard: self.state.discard.clone(),
            cards,
            rng: self.state.rng.state(),
            next_card_id: self.state.next_card_id,
            phase: self.phase,
            outcome: self.outcome,
            card_used_this_turn: self.card_used_this_turn,
            turn: self.turn,
            epoch: self.epoch,
            message: self.message.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: DuelSnapshot) -> Self {
        let mut cards = FxHashMap::default();
        for inst in snapshot.cards {
            cards.insert(inst.id, inst);
        }

        let state = DuelState {
            combatants: snapshot.combatants,
            hands: snapshot.hands,
            deck: snapshot.deck,
            discard: snapshot.discard,
            cards,
            rng: GameRng::from_state(&snapshot.rng),
            next_card_id: snapshot.next_card_id,
        };

        Self {
            config: snapshot.config,
            catalog: Catalog::standard(),
            state,
            phase: snapshot.phase,
            outcome: snapshot.outcome,
            card_used_this_turn: snapshot.card_used_this_turn,
            turn: snapshot.turn,
            epoch: snapshot.epoch,
            message: snapshot.message,
            history: snapshot.history,
        }
    }
}
