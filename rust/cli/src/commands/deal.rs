//! Deal command handler.
//!
//! Prepares a deck, deals two cards to each hand in turn, and prints every
//! hand with its value and state followed by the cards left in the shoe.
//! A seed is always reported so any deal can be reproduced.

use crate::config::Config;
use crate::error::CliError;
use serde::Serialize;
use shoe_engine::cards::Card;
use shoe_engine::deck::Deck;
use shoe_engine::hand::HandValue;
use shoe_engine::player::{Hand, HandState};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Serialize)]
struct DealReport<'a> {
    seed: u64,
    sets: usize,
    hands: Vec<HandReport<'a>>,
    remaining: usize,
}

#[derive(Debug, Serialize)]
struct HandReport<'a> {
    cards: &'a [Card],
    value: HandValue,
    state: HandState,
}

/// Handle the deal command.
///
/// Uses `config.seed` when present, otherwise a random seed that is echoed
/// in the output.
///
/// # Errors
///
/// Returns `CliError::Engine` if the deck cannot be built or runs out, and
/// `CliError::Io` on write failures.
pub fn handle_deal_command(
    config: &Config,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(config.sets, seed)?;
    deck.prepare();
    debug!(seed, sets = config.sets, hands = config.hands, "dealing");

    let mut hands: Vec<Hand> = (0..config.hands).map(|_| Hand::new()).collect();
    for _ in 0..2 {
        for hand in hands.iter_mut() {
            hand.hit(deck.draw()?)?;
        }
    }

    if json {
        let report = DealReport {
            seed,
            sets: config.sets,
            hands: hands
                .iter()
                .map(|h| HandReport {
                    cards: h.cards(),
                    value: h.value(),
                    state: h.state(),
                })
                .collect(),
            remaining: deck.remaining(),
        };
        let s = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
        return Ok(());
    }

    writeln!(out, "Seed: {} | Sets: {}", seed, config.sets)?;
    for (i, h) in hands.iter().enumerate() {
        let v = h.value();
        let soft = if v.soft { " soft" } else { "" };
        writeln!(
            out,
            "Hand {}: {} = {}{} ({:?})",
            i + 1,
            h,
            v.total,
            soft,
            h.state()
        )?;
    }
    writeln!(out, "Remaining: {}", deck.remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(seed: Option<u64>, sets: usize, hands: usize) -> Config {
        Config { sets, seed, hands }
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(&cfg(Some(999), 1, 2), false, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4, "seed line, two hands, remaining");
        assert_eq!(lines[0], "Seed: 999 | Sets: 1");
        assert!(lines[1].starts_with("Hand 1: ["));
        assert!(lines[2].starts_with("Hand 2: ["));
        assert_eq!(lines[3], "Remaining: 48");
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(&cfg(Some(12345), 6, 3), false, &mut out1).unwrap();
        handle_deal_command(&cfg(Some(12345), 6, 3), false, &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_without_seed_reports_one() {
        let mut out = Vec::new();
        handle_deal_command(&cfg(None, 1, 1), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Seed: "));
        assert!(output.contains("Remaining: 50"));
    }

    #[test]
    fn test_deal_command_json() {
        let mut out = Vec::new();
        handle_deal_command(&cfg(Some(7), 2, 4), true, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["seed"], 7);
        assert_eq!(v["remaining"], 104 - 8);
        let hands = v["hands"].as_array().unwrap();
        assert_eq!(hands.len(), 4);
        for h in hands {
            assert_eq!(h["cards"].as_array().unwrap().len(), 2);
            assert!(h["value"]["total"].as_u64().unwrap() <= 21);
        }
    }

    #[test]
    fn test_deal_command_runs_out_of_cards() {
        let mut out = Vec::new();
        let err = handle_deal_command(&cfg(Some(1), 1, 27), false, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
