//! The duel engine: every operation a game goes through.
//!
//! One `DuelEngine` value owns one game. The presentation forwards the
//! player's clicks into `play_card` / `end_turn` / `restart`, schedules
//! `advance` while the CPU "thinks", and reads the rest of the surface to
//! render.
//!
//! ## Post-terminal behavior
//!
//! Once an outcome is set the engine hard-blocks every mutating operation:
//! `play_card` returns `PlayError::GameOver`, `end_turn` and `advance` do
//! nothing. A UI that forgets to disable its buttons cannot corrupt a
//! finished game.

use std::time::Duration;

use im::Vector;
use log::{debug, info, trace};

use super::config::DuelConfig;
use super::phase::{Outcome, TurnPhase};
use super::state::{Combatant, DuelState};
use crate::cards::{CardId, CardKind, CardSpec, Catalog};
use crate::core::{ActionRecord, DuelAction, GameRng, Message, Side};

/// Why a card play was rejected. Nothing changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayError {
    /// The game already ended.
    GameOver,
    /// It is not the player's turn.
    NotYourTurn,
    /// The player already played a card this turn.
    CardAlreadyPlayed,
    /// The card is not in the player's hand.
    NotInHand,
    /// The card costs more MP than the player has.
    NotEnoughMp,
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "the game is over"),
            PlayError::NotYourTurn => write!(f, "it is not the player's turn"),
            PlayError::CardAlreadyPlayed => write!(f, "a card was already played this turn"),
            PlayError::NotInHand => write!(f, "card is not in the player's hand"),
            PlayError::NotEnoughMp => write!(f, "not enough MP"),
        }
    }
}

impl std::error::Error for PlayError {}

/// One running game of the card duel.
#[derive(Clone, Debug)]
pub struct DuelEngine {
    pub(crate) config: DuelConfig,
    pub(crate) catalog: Catalog,
    pub(crate) state: DuelState,
    pub(crate) phase: TurnPhase,
    pub(crate) outcome: Option<Outcome>,
    /// One-card-per-turn flag. Scoped to the player: the CPU's single play
    /// per turn is enforced by the turn machine itself.
    pub(crate) card_used_this_turn: bool,
    /// Turn counter, starts at 1, increments when the turn returns to
    /// the player.
    pub(crate) turn: u32,
    /// Bumped on every restart so stale scheduler callbacks can be detected.
    pub(crate) epoch: u64,
    pub(crate) message: Message,
    pub(crate) history: Vector<ActionRecord>,
}

impl DuelEngine {
    /// Start a standard game with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        DuelConfig::default().build(seed)
    }

    /// Start a standard game with an OS-entropy seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Start a game with an explicit configuration.
    #[must_use]
    pub fn with_config(config: DuelConfig, seed: u64) -> Self {
        let catalog = Catalog::standard();
        let state = DuelState::new(config.starting_hp, config.starting_mp, GameRng::new(seed));
        let mut engine = Self {
            config,
            catalog,
            state,
            phase: TurnPhase::PlayerTurn,
            outcome: None,
            card_used_this_turn: false,
            turn: 1,
            epoch: 0,
            message: Message::PlayerTurn,
            history: Vector::new(),
        };
        engine.setup(seed);
        engine
    }

    /// Throw the current game away and set up a fresh one.
    ///
    /// Bumps [`DuelEngine::epoch`], so an `advance()` callback queued for
    /// the previous game can notice it is stale. Even an unchecked stale
    /// callback is harmless: a fresh game sits in `PlayerTurn`, where
    /// `advance()` does nothing.
    pub fn restart(&mut self, seed: u64) {
        self.epoch += 1;
        self.setup(seed);
        info!("game restarted (epoch {})", self.epoch);
    }

    /// Full state reset: fresh shuffled deck, empty discard, starting
    /// stats, and the opening deal (one card to the player, one to the
    /// CPU, five times over).
    fn setup(&mut self, seed: u64) {
        self.state = DuelState::new(
            self.config.starting_hp,
            self.config.starting_mp,
            GameRng::new(seed),
        );
        let spec_ids: Vec<_> = self.catalog.iter().map(|s| s.id).collect();
        for spec in spec_ids {
            for _ in 0..self.config.copies_per_spec {
                self.state.spawn_into_deck(spec);
            }
        }
        self.state.shuffle_deck();

        self.phase = TurnPhase::PlayerTurn;
        self.outcome = None;
        self.card_used_this_turn = false;
        self.turn = 1;
        self.message = Message::PlayerTurn;
        self.history = Vector::new();

        for _ in 0..self.config.starting_hand_size {
            self.draw_into(Side::Player);
            self.draw_into(Side::Cpu);
        }
        debug!(
            "game set up: seed {seed}, {} cards in deck after deal",
            self.state.deck_size()
        );
    }

    // === Operations ===

    /// Play a card from the player's hand.
    ///
    /// Gated on: the game not being over, it being the player's turn, no
    /// card having been played this turn, the card being in hand, and the
    /// cost being affordable. Rejections change nothing; the insufficient-MP
    /// rejection also sets the status message, since that is the one
    /// rejection the player is shown on screen.
    pub fn play_card(&mut self, card: CardId) -> Result<(), PlayError> {
        if self.outcome.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.phase != TurnPhase::PlayerTurn {
            return Err(PlayError::NotYourTurn);
        }
        if self.card_used_this_turn {
            return Err(PlayError::CardAlreadyPlayed);
        }
        if !self.state.hand(Side::Player).contains(&card) {
            return Err(PlayError::NotInHand);
        }
        let cost = match self.spec_of(card) {
            Some(spec) => spec.cost,
            None => return Err(PlayError::NotInHand),
        };
        if self.state.combatants[Side::Player].mp < cost {
            self.message = Message::NotEnoughMp;
            return Err(PlayError::NotEnoughMp);
        }

        self.card_used_this_turn = true;
        self.resolve_play(Side::Player, card);
        Ok(())
    }

    /// End the player's turn.
    ///
    /// Silently ignored unless it is actually the player's turn in a live
    /// game, so a double click cannot double-draw or double-flip. On
    /// success: the turn machine moves to `CpuThinking`, the player draws
    /// one card, and the presentation should schedule [`DuelEngine::advance`]
    /// after [`DuelEngine::think_delay`].
    pub fn end_turn(&mut self) {
        if self.outcome.is_some() || self.phase != TurnPhase::PlayerTurn {
            return;
        }

        self.phase = TurnPhase::CpuThinking;
        self.card_used_this_turn = false;
        self.message = Message::CpuTurn;
        self.record(Side::Player, DuelAction::EndTurn);
        self.draw_into(Side::Player);
        debug!("player ended turn {}", self.turn);
    }

    /// Drive the CPU's side of the turn machine one step.
    ///
    /// A no-op during the player's turn and after the game ends, which is
    /// what makes stale scheduler callbacks harmless.
    pub fn advance(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        match self.phase {
            TurnPhase::PlayerTurn => {}
            TurnPhase::CpuThinking => self.cpu_act(),
            TurnPhase::CpuActing => self.cpu_finish(),
        }
    }

    /// The CPU picks uniformly among the cards it can afford, or passes.
    fn cpu_act(&mut self) {
        let playable = self.playable_cards(Side::Cpu);
        match self.state.rng.choose(&playable).copied() {
            Some(card) => self.resolve_play(Side::Cpu, card),
            None => {
                self.message = Message::CpuPass;
                self.record(Side::Cpu, DuelAction::CpuPass);
                debug!("cpu had no affordable card");
            }
        }
        self.phase = TurnPhase::CpuActing;
    }

    /// The CPU draws and hands the turn back to the player.
    fn cpu_finish(&mut self) {
        self.draw_into(Side::Cpu);
        if self.outcome.is_some() {
            return;
        }
        self.phase = TurnPhase::PlayerTurn;
        self.card_used_this_turn = false;
        self.turn += 1;
        self.message = Message::PlayerTurn;
        debug!("turn {} begins", self.turn);
    }

    /// Draw one card for a side; an empty deck draws nothing and runs the
    /// terminal check instead (the deck-exhaustion path).
    fn draw_into(&mut self, side: Side) {
        match self.state.draw(side) {
            Some(card) => trace!("{side} drew {card}"),
            None => {
                self.check_game_over();
            }
        }
    }

    /// Pay the cost, apply the effect, move the copy hand -> discard,
    /// record it, and run the terminal check.
    ///
    /// Callers have already verified the cost is affordable.
    fn resolve_play(&mut self, user: Side, card: CardId) {
        let inst = self.state.instance(card).expect("played card is tracked");
        let spec = self.catalog.get_unchecked(inst.spec).clone();
        let opponent = user.opponent();

        self.state.combatants[user].mp -= spec.cost;
        match spec.kind {
            CardKind::Attack => {
                self.state.combatants[opponent].hp -= spec.power;
                self.message = Message::Attack {
                    user,
                    card: spec.name.clone(),
                    power: spec.power,
                    target: opponent,
                };
            }
            CardKind::Heal => {
                self.state.combatants[user].hp += spec.power;
                self.message = Message::Heal {
                    user,
                    card: spec.name.clone(),
                    power: spec.power,
                };
            }
            CardKind::Support => {
                self.state.combatants[user].mp += spec.power;
                self.message = Message::Support {
                    user,
                    card: spec.name.clone(),
                    power: spec.power,
                };
            }
        }

        let moved = self.state.discard_from_hand(user, card);
        debug_assert!(moved, "played card was not in hand");
        self.record(user, DuelAction::Play(card));
        debug!("{user} played {} ({card})", spec.name);
        self.check_game_over();
    }

    /// Evaluate the terminal conditions, in priority order: player loss,
    /// player win, deck-and-hand exhaustion. The first outcome to be set
    /// sticks; later checks cannot overwrite it.
    fn check_game_over(&mut self) -> bool {
        if self.outcome.is_some() {
            return true;
        }

        let outcome = if self.state.combatants[Side::Player].hp <= 0 {
            Some(Outcome::Winner(Side::Cpu))
        } else if self.state.combatants[Side::Cpu].hp <= 0 {
            Some(Outcome::Winner(Side::Player))
        } else if self.state.deck_size() == 0 && self.state.hand(Side::Player).is_empty() {
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.message = match outcome {
                    Outcome::Winner(Side::Player) => Message::Victory,
                    Outcome::Winner(Side::Cpu) => Message::Defeat,
                    Outcome::Draw => Message::Drawn,
                };
                self.outcome = Some(outcome);
                info!("game over: {outcome:?} on turn {}", self.turn);
                true
            }
            None => false,
        }
    }

    fn record(&mut self, side: Side, action: DuelAction) {
        self.history.push_back(ActionRecord::new(side, action, self.turn));
    }

    // === Read surface ===

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// The card templates in play.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The full card-and-resource state (combatants, hands, piles).
    #[must_use]
    pub fn state(&self) -> &DuelState {
        &self.state
    }

    /// A side's resources.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.state.combatants[side]
    }

    /// A side's hand, in draw order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        self.state.hand(side)
    }

    /// The template behind a copy.
    #[must_use]
    pub fn spec_of(&self, card: CardId) -> Option<&CardSpec> {
        self.state
            .instance(card)
            .map(|inst| self.catalog.get_unchecked(inst.spec))
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.state.deck_size()
    }

    /// Cards played so far.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.state.discard_size()
    }

    /// Where the turn machine currently sits.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True while the player may act in a live game.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.outcome.is_none() && self.phase == TurnPhase::PlayerTurn
    }

    /// Has the player already played a card this turn?
    #[must_use]
    pub fn card_used_this_turn(&self) -> bool {
        self.card_used_this_turn
    }

    /// The terminal result, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The status line after the most recent action.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Restart counter for invalidating queued scheduler callbacks.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// How long the presentation should wait before each `advance()`.
    #[must_use]
    pub fn think_delay(&self) -> Duration {
        self.config.think_delay
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Would `play_card` accept this card right now?
    ///
    /// Mirrors the gating a card button should use.
    #[must_use]
    pub fn can_play(&self, card: CardId) -> bool {
        self.outcome.is_none()
            && self.phase == TurnPhase::PlayerTurn
            && !self.card_used_this_turn
            && self.state.hand(Side::Player).contains(&card)
            && self.affordable(Side::Player, card)
    }

    /// Hand cards a side can currently afford, in hand order.
    #[must_use]
    pub fn playable_cards(&self, side: Side) -> Vec<CardId> {
        self.state
            .hand(side)
            .iter()
            .copied()
            .filter(|&card| self.affordable(side, card))
            .collect()
    }

    fn affordable(&self, side: Side, card: CardId) -> bool {
        let mp = self.state.combatants[side].mp;
        self.spec_of(card).is_some_and(|spec| spec.affordable_with(mp))
    }
}
