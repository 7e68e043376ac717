use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::write_cards;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, is_blackjack, HandValue};
use crate::rules::validate_action;

/// A decision a player can make about one hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one more card
    Hit,
    /// Take no more cards
    Stand,
    /// Double the stake and take exactly one more card
    DoubleDown,
    /// Play a pair of equal-valued cards as two hands
    Split,
    /// Give up the hand for half the stake
    Surrender,
}

pub const ALL_ACTIONS: [PlayerAction; 5] = [
    PlayerAction::Hit,
    PlayerAction::Stand,
    PlayerAction::DoubleDown,
    PlayerAction::Split,
    PlayerAction::Surrender,
];

/// Where a hand is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandState {
    /// May still act
    Active,
    /// Stopped voluntarily
    Standing,
    /// Total over 21
    Busted,
    /// First two cards total 21
    Blackjack,
    /// Doubled; takes one more card, then finished
    DoubledDown,
    /// Divided into two sub-hands that play on independently
    Split,
    /// Forfeited
    Surrendered,
}

/// One blackjack hand and its state machine.
///
/// Cards only ever get appended. The value is recomputed from the cards on
/// every query. Every action is checked by [`validate_action`] before the
/// hand is touched, so a rejected action leaves it exactly as it was.
///
/// # Examples
///
/// ```
/// use shoe_engine::cards::{Card, Rank, Suit};
/// use shoe_engine::player::{Hand, HandState};
///
/// let mut hand = Hand::new();
/// hand.hit(Card::new(Rank::Ace, Suit::Spades)).unwrap();
/// hand.hit(Card::new(Rank::King, Suit::Hearts)).unwrap();
/// assert_eq!(hand.value().total, 21);
/// assert_eq!(hand.state(), HandState::Blackjack);
/// assert!(hand.stand().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    state: HandState,
    /// Seeded from one card of a split pair
    from_split: bool,
    doubled: bool,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(4),
            state: HandState::Active,
            from_split: false,
            doubled: false,
        }
    }

    fn seeded_from_split(card: Card) -> Self {
        let mut cards = Vec::with_capacity(4);
        cards.push(card);
        Self {
            cards,
            state: HandState::Active,
            from_split: true,
            doubled: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn value(&self) -> HandValue {
        evaluate_hand(&self.cards)
    }

    /// A natural: two cards totalling 21, not produced by a split.
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    pub fn is_doubled(&self) -> bool {
        self.doubled
    }

    pub fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// True while a doubled hand is still owed its single card.
    pub fn awaiting_double_card(&self) -> bool {
        self.state == HandState::DoubledDown && self.cards.len() == 2
    }

    /// Still needs a decision or a card from the dealer.
    pub fn can_act(&self) -> bool {
        self.state == HandState::Active || self.awaiting_double_card()
    }

    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        ALL_ACTIONS
            .into_iter()
            .filter(|&a| validate_action(self, a).is_ok())
            .collect()
    }

    /// Adds a card. Used for the initial deal as well as player hits, and for
    /// the one card owed to a doubled hand.
    pub fn hit(&mut self, card: Card) -> Result<(), GameError> {
        validate_action(self, PlayerAction::Hit)?;
        self.cards.push(card);
        let value = self.value();
        let next = if value.is_bust() {
            HandState::Busted
        } else if self.state == HandState::DoubledDown {
            HandState::DoubledDown
        } else if self.is_blackjack() {
            HandState::Blackjack
        } else {
            HandState::Active
        };
        self.transition(next);
        Ok(())
    }

    pub fn stand(&mut self) -> Result<(), GameError> {
        validate_action(self, PlayerAction::Stand)?;
        self.transition(HandState::Standing);
        Ok(())
    }

    /// Marks the hand doubled. The caller must then deal exactly one card
    /// through [`Hand::hit`].
    pub fn double_down(&mut self) -> Result<(), GameError> {
        validate_action(self, PlayerAction::DoubleDown)?;
        self.doubled = true;
        self.transition(HandState::DoubledDown);
        Ok(())
    }

    pub fn surrender(&mut self) -> Result<(), GameError> {
        validate_action(self, PlayerAction::Surrender)?;
        self.transition(HandState::Surrendered);
        Ok(())
    }

    /// Splits a pair into two independent one-card hands. This hand moves to
    /// [`HandState::Split`] and keeps its cards for the record.
    pub fn split(&mut self) -> Result<(Hand, Hand), GameError> {
        validate_action(self, PlayerAction::Split)?;
        let first = Hand::seeded_from_split(self.cards[0]);
        let second = Hand::seeded_from_split(self.cards[1]);
        self.transition(HandState::Split);
        Ok((first, second))
    }

    fn transition(&mut self, next: HandState) {
        if next != self.state {
            debug!(from = ?self.state, to = ?next, total = self.value().total, "hand state changed");
        }
        self.state = next;
    }
}

/// Renders the cards as `[A♠, K♥]`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// A named player and the hands they hold this round. A player starts each
/// round with one empty hand; splits add more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hands: Vec<Hand>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hands: vec![Hand::new()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Result<&Hand, GameError> {
        self.hands.get(index).ok_or_else(|| no_such_hand(index))
    }

    pub fn hand_mut(&mut self, index: usize) -> Result<&mut Hand, GameError> {
        self.hands.get_mut(index).ok_or_else(|| no_such_hand(index))
    }

    /// Replaces the hand at `index` with its two sub-hands, in card order.
    pub fn split(&mut self, index: usize) -> Result<(), GameError> {
        let (first, second) = self.hand_mut(index)?.split()?;
        self.hands[index] = first;
        self.hands.insert(index + 1, second);
        Ok(())
    }

    /// Every hand has finished acting.
    pub fn is_done(&self) -> bool {
        self.hands.iter().all(|h| !h.can_act())
    }

    /// Drops all hands and starts the next round with one empty hand.
    pub fn reset(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new());
    }
}

fn no_such_hand(index: usize) -> GameError {
    GameError::InvalidArgument {
        reason: format!("no hand at index {}", index),
    }
}
