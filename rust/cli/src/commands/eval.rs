//! Hand evaluation command.
//!
//! Parses short card notation (`AS`, `10h`, `Kd`, `7♣`) and prints the
//! blackjack value of the cards together with the soft, blackjack and bust
//! flags.

use crate::error::CliError;
use crate::ui::yes_no;
use shoe_engine::cards::Card;
use shoe_engine::hand::{evaluate_hand, is_blackjack};
use std::io::Write;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".into()));
    }
    let parsed = cards
        .iter()
        .map(|s| {
            s.parse::<Card>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let value = evaluate_hand(&parsed);
    let shown: Vec<String> = parsed.iter().map(ToString::to_string).collect();
    writeln!(out, "Cards: [{}]", shown.join(", "))?;
    writeln!(
        out,
        "Value: {} ({})",
        value.total,
        if value.soft { "soft" } else { "hard" }
    )?;
    writeln!(out, "Blackjack: {}", yes_no(is_blackjack(&parsed)))?;
    writeln!(out, "Bust: {}", yes_no(value.is_bust()))?;
    Ok(())
}
