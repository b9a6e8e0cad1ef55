//! The turn machine and terminal outcomes.
//!
//! A turn is "the player acts, then two timed CPU steps". The CPU steps
//! are explicit wait states: the engine moves `PlayerTurn -> CpuThinking`
//! on `end_turn()`, and each `advance()` call (scheduled by the
//! presentation after the think delay) moves
//! `CpuThinking -> CpuActing -> PlayerTurn`.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Where the turn machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The player may play one card and end their turn.
    PlayerTurn,
    /// Waiting for the CPU to pick a card. Next `advance()` resolves it.
    CpuThinking,
    /// The CPU has acted. Next `advance()` draws for the CPU and hands
    /// the turn back.
    CpuActing,
}

/// Result of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side reduced the other to 0 HP.
    Winner(Side),
    /// Deck and player hand ran out with both sides standing.
    Draw,
}

impl Outcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Outcome::Winner(w) if *w == side)
    }
}
