use crate::errors::GameError;
use crate::hand::base_value;
use crate::player::{Hand, HandState, PlayerAction as A};

/// Checks whether `action` is legal for `hand` without changing it.
///
/// Every [`Hand`] action runs this first, so a rejected action never leaves
/// a hand half-updated.
///
/// # Rules
///
/// - `Hit` is legal on an `Active` hand, and once on a `DoubledDown` hand
///   that has not yet received its card.
/// - `Stand` is legal on any `Active` hand.
/// - `DoubleDown` and `Surrender` are legal only as the first decision on a
///   two-card `Active` hand.
/// - `Split` additionally needs both cards to have the same blackjack value.
/// - Nothing is legal on a terminal or `Split` hand.
///
/// # Errors
///
/// Returns [`GameError::IllegalAction`] naming the action, the hand's state
/// and the reason.
///
/// # Examples
///
/// ```
/// use shoe_engine::cards::{Card, Rank, Suit};
/// use shoe_engine::player::{Hand, PlayerAction};
/// use shoe_engine::rules::validate_action;
/// use shoe_engine::errors::GameError;
///
/// let mut hand = Hand::new();
/// hand.hit(Card::new(Rank::Seven, Suit::Clubs)).unwrap();
/// hand.hit(Card::new(Rank::Eight, Suit::Clubs)).unwrap();
///
/// assert!(validate_action(&hand, PlayerAction::DoubleDown).is_ok());
/// assert!(matches!(
///     validate_action(&hand, PlayerAction::Split),
///     Err(GameError::IllegalAction { .. })
/// ));
/// ```
pub fn validate_action(hand: &Hand, action: A) -> Result<(), GameError> {
    let state = hand.state();
    let illegal = |reason: &'static str| GameError::IllegalAction {
        action,
        state,
        reason,
    };

    match state {
        HandState::Active => {}
        HandState::DoubledDown if action == A::Hit && hand.awaiting_double_card() => {
            return Ok(());
        }
        HandState::DoubledDown => return Err(illegal("doubled hand takes exactly one card")),
        HandState::Split => return Err(illegal("hand has been split")),
        _ => return Err(illegal("hand is finished")),
    }

    let first_decision = hand.cards().len() == 2;
    match action {
        A::Hit | A::Stand => Ok(()),
        A::DoubleDown | A::Surrender if !first_decision => {
            Err(illegal("only allowed as the first decision on two cards"))
        }
        A::DoubleDown | A::Surrender => Ok(()),
        A::Split => {
            if !first_decision {
                return Err(illegal("only allowed as the first decision on two cards"));
            }
            let cards = hand.cards();
            if base_value(cards[0].rank) != base_value(cards[1].rank) {
                return Err(illegal("cards differ in value"));
            }
            Ok(())
        }
    }
}
