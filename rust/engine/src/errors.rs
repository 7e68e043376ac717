use thiserror::Error;

use crate::player::{HandState, PlayerAction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Illegal action {action:?} for a hand in state {state:?}: {reason}")]
    IllegalAction {
        action: PlayerAction,
        state: HandState,
        reason: &'static str,
    },
}
