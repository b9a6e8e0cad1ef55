//! Core engine types: combatant sides, RNG, status messages, action history.
//!
//! This module contains the building blocks that know nothing about the
//! duel's rules. The rules live in `crate::duel`.

pub mod action;
pub mod message;
pub mod rng;
pub mod side;

pub use action::{ActionRecord, DuelAction};
pub use message::Message;
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
