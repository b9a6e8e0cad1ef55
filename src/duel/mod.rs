//! The duel itself: configuration, game state, turn machine, engine.
//!
//! ## Key Types
//!
//! - `DuelConfig`: starting stats, hand size, copies per template, CPU delay
//! - `DuelState`: combatants, hands, deck, discard, instance table, RNG
//! - `TurnPhase` / `Outcome`: the explicit turn machine and terminal result
//! - `DuelEngine`: the controller every operation goes through
//! - `DuelSnapshot`: serde/bincode save-and-restore of a whole game
//!
//! ## Turn flow
//!
//! ```text
//! PlayerTurn --end_turn()--> CpuThinking --advance()--> CpuActing --advance()--> PlayerTurn
//! ```
//!
//! The presentation schedules each `advance()` call after
//! `DuelEngine::think_delay()`; the engine itself never sleeps.

pub mod config;
pub mod engine;
pub mod phase;
pub mod snapshot;
pub mod state;

pub use config::DuelConfig;
pub use engine::{DuelEngine, PlayError};
pub use phase::{Outcome, TurnPhase};
pub use snapshot::DuelSnapshot;
pub use state::{Combatant, DuelState};
