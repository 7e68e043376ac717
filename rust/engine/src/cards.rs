use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card set.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank of a playing card from Two through Ace.
/// The discriminants give a stable ordering only; point values are assigned
/// by [`crate::hand::base_value`], not by the card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playing card. Cards are plain values: two cards with the same
/// rank and suit are interchangeable, even when drawn from different sets.
///
/// Ordering compares rank first, then suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// King, Queen or Jack.
    pub fn is_face_card(&self) -> bool {
        matches!(self.rank, Rank::King | Rank::Queen | Rank::Jack)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses short card notation such as `AS`, `10h`, `Kd` or `7♣`.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GameError::InvalidArgument {
            reason: format!("unrecognised card `{}`", s),
        };
        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            _ => return Err(invalid()),
        };
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "K" => Rank::King,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "10" | "T" => Rank::Ten,
            "9" => Rank::Nine,
            "8" => Rank::Eight,
            "7" => Rank::Seven,
            "6" => Rank::Six,
            "5" => Rank::Five,
            "4" => Rank::Four,
            "3" => Rank::Three,
            "2" => Rank::Two,
            _ => return Err(invalid()),
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

/// Ranks in composition order, Ace first.
pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ]
}

/// Number of cards in one standard set.
pub const SET_SIZE: usize = 52;

/// One unshuffled 52-card set, rank-major and suit-minor.
pub fn standard_set() -> Vec<Card> {
    let mut v = Vec::with_capacity(SET_SIZE);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_starts_with_aces_and_ends_with_twos() {
        let set = standard_set();
        assert_eq!(set.len(), SET_SIZE);
        assert_eq!(set[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(set[3], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(set[4], Card::new(Rank::King, Suit::Spades));
        assert_eq!(set[51], Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn classification() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Hearts);
        let ten = Card::new(Rank::Ten, Suit::Hearts);
        assert!(ace.is_ace());
        assert!(!ace.is_face_card());
        assert!(king.is_face_card());
        assert!(!ten.is_face_card());
        assert!(!ten.is_ace());
    }

    #[test]
    fn display_uses_symbols() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
    }

    #[test]
    fn parses_short_notation() {
        assert_eq!("AS".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("Td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("7♣".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Clubs));
        assert!("1S".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        let three_spades = Card::new(Rank::Three, Suit::Spades);
        assert!(two_clubs < three_spades);
        assert!(Card::new(Rank::Two, Suit::Spades) < two_clubs);
    }
}
