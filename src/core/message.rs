//! Status messages.
//!
//! The engine keeps one current message, replaced after every action. The
//! presentation layer shows `message().to_string()` in its status area;
//! richer UIs can match on the variant instead of parsing text.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// The status line after the most recent action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// It is the player's turn.
    PlayerTurn,
    /// The CPU is taking its turn.
    CpuTurn,
    /// A card play was rejected for insufficient MP.
    NotEnoughMp,
    /// An attack card resolved.
    Attack {
        user: Side,
        card: String,
        power: i64,
        target: Side,
    },
    /// A heal card resolved.
    Heal { user: Side, card: String, power: i64 },
    /// A support card resolved.
    Support { user: Side, card: String, power: i64 },
    /// The CPU had no affordable card and passed.
    CpuPass,
    /// Terminal: the player won.
    Victory,
    /// Terminal: the player lost.
    Defeat,
    /// Terminal: deck and player hand exhausted.
    Drawn,
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::PlayerTurn => write!(f, "Your turn."),
            Message::CpuTurn => write!(f, "CPU's turn."),
            Message::NotEnoughMp => write!(f, "Not enough MP!"),
            Message::Attack {
                user,
                card,
                power,
                target,
            } => write!(f, "{user} used 「{card}」! {power} damage to {target}!"),
            Message::Heal { user, card, power } => {
                write!(f, "{user} used 「{card}」! Restored {power} HP.")
            }
            Message::Support { user, card, power } => {
                write!(f, "{user} used 「{card}」! Restored {power} MP.")
            }
            Message::CpuPass => write!(f, "CPU could not act!"),
            Message::Victory => write!(f, "You win!"),
            Message::Defeat => write!(f, "You lose..."),
            Message::Drawn => write!(f, "The deck ran out. It's a draw."),
        }
    }
}
