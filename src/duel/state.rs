//! Game state: combatants, hands, deck, discard, and the instance table.
//!
//! `DuelState` is the single owner of every card container. Cards move only
//! through its methods, which keeps the conservation invariant checkable:
//! every spawned copy is in exactly one of deck, discard, or a hand.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance, SpecId};
use crate::core::{GameRng, Side, SideMap};

/// One combatant's resources.
///
/// HP and MP are unbounded above and deliberately not clamped below zero;
/// the terminal check reads raw values. Displays use [`Combatant::visible_hp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Hit points. At or below zero the combatant has lost.
    pub hp: i64,

    /// Magic points, spent on card costs.
    pub mp: i64,
}

impl Combatant {
    /// Create a combatant with the given starting stats.
    #[must_use]
    pub fn new(hp: i64, mp: i64) -> Self {
        Self { hp, mp }
    }

    /// HP clamped at zero, for display.
    #[must_use]
    pub fn visible_hp(&self) -> i64 {
        self.hp.max(0)
    }
}

/// Complete card-and-resource state of one duel.
///
/// The deck is a stack: the top is the end of the vec and `draw` pops it.
/// The discard pile is append-only during a game.
#[derive(Clone, Debug)]
pub struct DuelState {
    /// Both combatants' resources.
    pub combatants: SideMap<Combatant>,

    /// Ordered hands per side.
    pub(crate) hands: SideMap<Vec<CardId>>,

    /// The shared draw pile (top = end of vec).
    pub(crate) deck: Vec<CardId>,

    /// The shared discard pile, in play order.
    pub(crate) discard: Vec<CardId>,

    /// Every copy spawned for this game, by id.
    pub(crate) cards: FxHashMap<CardId, CardInstance>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Next card id to allocate.
    pub(crate) next_card_id: u32,
}

impl DuelState {
    /// Create an empty state: no cards, combatants at the given stats.
    #[must_use]
    pub fn new(starting_hp: i64, starting_mp: i64, rng: GameRng) -> Self {
        Self {
            combatants: SideMap::with_value(Combatant::new(starting_hp, starting_mp)),
            hands: SideMap::with_default(),
            deck: Vec::new(),
            discard: Vec::new(),
            cards: FxHashMap::default(),
            rng,
            next_card_id: 0,
        }
    }

    // === Deck building ===

    /// Spawn a fresh copy of a template on top of the deck.
    ///
    /// Returns the new copy's id.
    pub fn spawn_into_deck(&mut self, spec: SpecId) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        self.cards.insert(id, CardInstance::new(id, spec));
        self.deck.push(id);
        id
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self) {
        self.rng.shuffle(&mut self.deck);
    }

    // === Drawing and playing ===

    /// Draw the top card of the deck into a hand.
    ///
    /// Returns the drawn card id, or `None` if the deck is empty.
    pub fn draw(&mut self, side: Side) -> Option<CardId> {
        let card = self.deck.pop()?;
        self.hands[side].push(card);
        Some(card)
    }

    /// Move a specific copy from a hand to the discard pile.
    ///
    /// Removal is by id, so duplicate-named copies cannot cross-remove.
    /// Returns false (and changes nothing) if the copy is not in that hand.
    pub fn discard_from_hand(&mut self, side: Side, card: CardId) -> bool {
        let hand = &mut self.hands[side];
        if let Some(pos) = hand.iter().position(|&c| c == card) {
            hand.remove(pos);
            self.discard.push(card);
            true
        } else {
            false
        }
    }

    // === Views ===

    /// A side's hand, in draw order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        &self.hands[side]
    }

    /// The deck, bottom to top.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    /// The discard pile, in play order.
    #[must_use]
    pub fn discard(&self) -> &[CardId] {
        &self.discard
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Number of cards played so far.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// Look up a copy by id.
    #[must_use]
    pub fn instance(&self, card: CardId) -> Option<&CardInstance> {
        self.cards.get(&card)
    }

    /// Total copies spawned for this game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Cards currently tracked across all containers.
    ///
    /// Always equals [`DuelState::total_cards`]; the pair exists so tests
    /// can assert conservation.
    #[must_use]
    pub fn cards_in_containers(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.hands[Side::Player].len()
            + self.hands[Side::Cpu].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    fn built_state() -> DuelState {
        let catalog = Catalog::standard();
        let mut state = DuelState::new(100, 50, GameRng::new(42));
        for spec in catalog.iter() {
            for _ in 0..4 {
                state.spawn_into_deck(spec.id);
            }
        }
        state
    }

    #[test]
    fn test_combatant_visible_hp() {
        let healthy = Combatant::new(100, 50);
        assert_eq!(healthy.visible_hp(), 100);

        let dead = Combatant::new(-15, 50);
        assert_eq!(dead.hp, -15); // raw value preserved
        assert_eq!(dead.visible_hp(), 0);
    }

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let state = built_state();

        assert_eq!(state.total_cards(), 20);
        assert_eq!(state.deck_size(), 20);

        // Each of the 20 copies has a distinct id.
        let mut ids: Vec<_> = state.deck().to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_deck_has_four_copies_of_each_spec() {
        let state = built_state();

        let mut counts = [0usize; 5];
        for &card in state.deck() {
            let spec = state.instance(card).unwrap().spec;
            counts[spec.raw() as usize] += 1;
        }
        assert_eq!(counts, [4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut state = built_state();
        let before: Vec<_> = {
            let mut v = state.deck().to_vec();
            v.sort();
            v
        };

        state.shuffle_deck();

        let mut after = state.deck().to_vec();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let deck_for = |seed: u64| {
            let catalog = Catalog::standard();
            let mut state = DuelState::new(100, 50, GameRng::new(seed));
            for spec in catalog.iter() {
                for _ in 0..4 {
                    state.spawn_into_deck(spec.id);
                }
            }
            state.shuffle_deck();
            state.deck().to_vec()
        };

        assert_eq!(deck_for(9), deck_for(9));
        assert_ne!(deck_for(9), deck_for(10));
    }

    #[test]
    fn test_draw_from_top() {
        let mut state = built_state();
        let top = *state.deck().last().unwrap();

        let drawn = state.draw(Side::Player);

        assert_eq!(drawn, Some(top));
        assert_eq!(state.hand(Side::Player), &[top]);
        assert_eq!(state.deck_size(), 19);
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut state = DuelState::new(100, 50, GameRng::new(1));

        assert_eq!(state.draw(Side::Cpu), None);
        assert!(state.hand(Side::Cpu).is_empty());
    }

    #[test]
    fn test_discard_from_hand_by_identity() {
        // Two copies of the same template in hand: removal must take the
        // exact copy asked for, not the first with a matching name.
        let mut state = DuelState::new(100, 50, GameRng::new(1));
        let spec = SpecId::new(0);
        state.spawn_into_deck(spec);
        state.spawn_into_deck(spec);
        let first = state.draw(Side::Player).unwrap();
        let second = state.draw(Side::Player).unwrap();
        assert_eq!(state.instance(first).unwrap().spec, state.instance(second).unwrap().spec);

        assert!(state.discard_from_hand(Side::Player, second));

        assert_eq!(state.hand(Side::Player), &[first]);
        assert_eq!(state.discard(), &[second]);
    }

    #[test]
    fn test_discard_missing_card() {
        let mut state = built_state();
        state.draw(Side::Player);

        let not_in_hand = CardId::new(999);
        assert!(!state.discard_from_hand(Side::Player, not_in_hand));
        assert_eq!(state.discard_size(), 0);
    }

    #[test]
    fn test_conservation_through_moves() {
        let mut state = built_state();
        assert_eq!(state.cards_in_containers(), state.total_cards());

        for _ in 0..5 {
            state.draw(Side::Player);
            state.draw(Side::Cpu);
        }
        assert_eq!(state.cards_in_containers(), 20);

        let card = state.hand(Side::Player)[0];
        state.discard_from_hand(Side::Player, card);
        assert_eq!(state.cards_in_containers(), 20);
    }
}
