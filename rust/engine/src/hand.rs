use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Total at which a hand stops being playable.
pub const BLACKJACK: u8 = 21;

/// Blackjack points for a rank, counting an ace high (11).
pub fn base_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::King | Rank::Queen | Rank::Jack | Rank::Ten => 10,
        Rank::Nine => 9,
        Rank::Eight => 8,
        Rank::Seven => 7,
        Rank::Six => 6,
        Rank::Five => 5,
        Rank::Four => 4,
        Rank::Three => 3,
        Rank::Two => 2,
    }
}

/// Scored value of a set of cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u32,
    /// At least one ace is still counted as 11
    pub soft: bool,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK as u32
    }
}

/// Scores cards with every ace counted as 11, then demotes aces to 1 one at
/// a time while the total is over 21.
pub fn evaluate_hand(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut high_aces = 0u32;
    for c in cards {
        total += base_value(c.rank) as u32;
        if c.is_ace() {
            high_aces += 1;
        }
    }
    while total > BLACKJACK as u32 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    HandValue {
        total,
        soft: high_aces > 0,
    }
}

/// Exactly two cards totalling 21.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate_hand(cards).total == BLACKJACK as u32
}

pub fn is_bust(cards: &[Card]) -> bool {
    evaluate_hand(cards).is_bust()
}
