//! # card-duel
//!
//! Turn and resource engine for a player-vs-CPU card battle game.
//!
//! Two combatants start with 100 HP and 50 MP, draw from a shared shuffled
//! 20-card deck (five templates, four copies each), and play cards that cost
//! MP to deal damage, restore HP, or restore MP. Played cards move to a
//! shared discard pile. The player may play at most one card per turn; the
//! CPU picks uniformly at random among the cards it can afford.
//!
//! ## Design Principles
//!
//! 1. **No globals**: all game state lives in one [`DuelEngine`] value.
//!    Multiple independent games can run side by side.
//!
//! 2. **Deterministic**: every random decision (shuffle, CPU choice) flows
//!    through a seeded ChaCha8 RNG. Same seed, same game.
//!
//! 3. **Presentation-agnostic**: the engine renders nothing. It exposes
//!    stats, ordered hands, pile counts, turn flags, and a status message;
//!    a UI layer forwards clicks into the operations and re-renders.
//!
//! 4. **Explicit turn machine**: the CPU's two "thinking" pauses are wait
//!    states ([`TurnPhase::CpuThinking`], [`TurnPhase::CpuActing`]), not
//!    timers inside the engine. The presentation schedules
//!    [`DuelEngine::advance`] after [`DuelEngine::think_delay`].
//!
//! ## Modules
//!
//! - `core`: combatant sides, seeded RNG, status messages, action history
//! - `cards`: card templates, the standard catalog, per-copy instances
//! - `duel`: configuration, game state, the turn machine, the engine, snapshots

pub mod cards;
pub mod core;
pub mod duel;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DuelAction,
    GameRng, GameRngState,
    Message,
    Side, SideMap,
};

pub use crate::cards::{CardId, CardInstance, CardKind, CardSpec, Catalog, SpecId};

pub use crate::duel::{
    Combatant, DuelConfig, DuelEngine, DuelSnapshot, DuelState,
    Outcome, PlayError, TurnPhase,
};
