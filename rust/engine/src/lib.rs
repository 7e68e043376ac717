//! # shoe-engine: Blackjack Shoe and Hand Core
//!
//! A multi-set deck of standard playing cards and the player-hand state
//! machine needed to play blackjack: shuffling, drawing, hand scoring with
//! soft/hard aces, and the hit/stand/double-down/split/surrender actions.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and set composition
//! - [`deck`] - Multi-set deck with a seeded ChaCha20 Fisher–Yates shuffle
//! - [`hand`] - Blackjack scoring (ace demotion, blackjack and bust checks)
//! - [`player`] - Hand state machine, player actions, and players' hands
//! - [`rules`] - Action legality checks
//! - [`errors`] - Error types for deck and hand operations
//!
//! ## Quick Start
//!
//! ```rust
//! use shoe_engine::deck::Deck;
//! use shoe_engine::player::Hand;
//!
//! let mut deck = Deck::new_with_seed(1, 42).unwrap();
//! deck.prepare();
//! assert!(deck.is_ready());
//!
//! let mut hand = Hand::new();
//! hand.hit(deck.draw().unwrap()).unwrap();
//! hand.hit(deck.draw().unwrap()).unwrap();
//! println!("{} = {}", hand, hand.value().total);
//! assert_eq!(deck.remaining(), 50);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use shoe_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(6, 7).unwrap();
//! let mut b = Deck::new_with_seed(6, 7).unwrap();
//! a.prepare();
//! b.prepare();
//! assert_eq!(a.undealt(), b.undealt());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;
