use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::cards::{standard_set, Card, SET_SIZE};
use crate::errors::GameError;

/// Largest set count a deck accepts. Real shoes hold at most eight.
pub const MAX_SETS: usize = 64;

/// A shoe of one or more concatenated 52-card sets with its own seeded RNG.
///
/// `top` counts the cards already drawn: the deck is full when nothing has
/// been drawn and empty when every card has been. A deck is ready for a new
/// round only when it is full and has been shuffled since the last reset.
///
/// # Examples
///
/// ```
/// use shoe_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(2, 42).unwrap();
/// assert_eq!(deck.total_count(), 104);
/// assert!(!deck.is_ready());
///
/// deck.prepare();
/// assert!(deck.is_ready());
///
/// let card = deck.draw().unwrap();
/// println!("drew {}", card);
/// assert_eq!(deck.remaining(), 103);
/// assert!(!deck.is_ready());
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Every card in the shoe, top of the deck at index `top`
    cards: Vec<Card>,
    /// Number of cards already drawn, `0..=cards.len()`
    top: usize,
    /// Set by `shuffle`, cleared by `reset`
    shuffled: bool,
    /// Number of concatenated standard sets
    sets: usize,
    /// Seed supplied at construction, if any
    seed: Option<u64>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds an unshuffled deck whose generator is seeded once from the OS.
    pub fn new(sets: usize) -> Result<Self, GameError> {
        Self::with_rng(sets, None, ChaCha20Rng::from_os_rng())
    }

    /// Builds an unshuffled deck with a deterministic generator.
    pub fn new_with_seed(sets: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(sets, Some(seed), ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(sets: usize, seed: Option<u64>, rng: ChaCha20Rng) -> Result<Self, GameError> {
        if sets == 0 {
            return Err(GameError::InvalidArgument {
                reason: "set count must be at least 1".to_string(),
            });
        }
        let total = SET_SIZE
            .checked_mul(sets)
            .filter(|_| sets <= MAX_SETS)
            .ok_or_else(|| GameError::InvalidArgument {
                reason: format!("set count must be at most {}", MAX_SETS),
            })?;
        let set = standard_set();
        let mut cards = Vec::with_capacity(total);
        for _ in 0..sets {
            cards.extend_from_slice(&set);
        }
        debug!(sets, total = cards.len(), ?seed, "deck created");
        Ok(Self {
            cards,
            top: 0,
            shuffled: false,
            sets,
            seed,
            rng,
        })
    }

    pub fn sets(&self) -> usize {
        self.sets
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.top
    }

    pub fn is_full(&self) -> bool {
        self.top == 0
    }

    pub fn is_empty(&self) -> bool {
        self.top == self.cards.len()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Full and shuffled: the state a deck must be in before a round starts.
    /// Drawing does not check this.
    pub fn is_ready(&self) -> bool {
        self.is_full() && self.is_shuffled()
    }

    /// Returns every drawn card to the deck and clears the shuffled flag.
    /// Card order is left as it is.
    pub fn reset(&mut self) {
        self.top = 0;
        self.shuffled = false;
    }

    /// Resets then shuffles. Always leaves the deck ready, in a fresh order.
    pub fn prepare(&mut self) {
        self.reset();
        self.shuffle();
        debug!(total = self.cards.len(), "deck prepared");
    }

    /// Fisher–Yates over the whole shoe, drawn cards included.
    ///
    /// `top` is untouched, so shuffling a partly drawn deck can move drawn
    /// cards back above `top`; call [`Deck::prepare`] for a fair reshuffle.
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.shuffled = true;
        debug!(top = self.top, "deck shuffled");
    }

    /// Draws the card at `top` and advances past it.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = *self.cards.get(self.top).ok_or(GameError::EmptyDeck)?;
        self.top += 1;
        trace!(%card, remaining = self.remaining(), "card drawn");
        Ok(card)
    }

    /// Cards not yet drawn, from the top of the deck to the bottom.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.top..]
    }
}

/// Renders the undealt cards as `[A♠, K♥, ...]`, top first.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, self.undealt())
    }
}

pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("]")
}
