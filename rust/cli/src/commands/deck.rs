//! Deck inspection command.
//!
//! Builds a deck, optionally prepares it and draws cards, then reports the
//! state predicates and the undealt cards from top to bottom.

use crate::error::CliError;
use crate::ui::yes_no;
use shoe_engine::deck::Deck;
use std::io::Write;

pub fn handle_deck_command(
    seed: Option<u64>,
    sets: usize,
    shuffle: bool,
    draw: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = match seed {
        Some(s) => Deck::new_with_seed(sets, s)?,
        None => Deck::new(sets)?,
    };
    if shuffle {
        deck.prepare();
    }
    let drawn = (0..draw)
        .map(|_| deck.draw())
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(
        out,
        "Cards: {}/{} remaining ({} set{})",
        deck.remaining(),
        deck.total_count(),
        deck.sets(),
        if deck.sets() == 1 { "" } else { "s" }
    )?;
    writeln!(
        out,
        "Full: {} | Empty: {} | Shuffled: {} | Ready: {}",
        yes_no(deck.is_full()),
        yes_no(deck.is_empty()),
        yes_no(deck.is_shuffled()),
        yes_no(deck.is_ready())
    )?;
    if !drawn.is_empty() {
        let shown: Vec<String> = drawn.iter().map(ToString::to_string).collect();
        writeln!(out, "Drawn: [{}]", shown.join(", "))?;
    }
    writeln!(out, "Deck: {}", deck)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(seed: Option<u64>, sets: usize, shuffle: bool, draw: usize) -> String {
        let mut out = Vec::new();
        handle_deck_command(seed, sets, shuffle, draw, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unshuffled_deck_is_not_ready() {
        let output = run(Some(1), 1, false, 0);
        assert!(output.contains("Cards: 52/52 remaining (1 set)"));
        assert!(output.contains("Full: yes | Empty: no | Shuffled: no | Ready: no"));
        assert!(output.contains("Deck: [A♠, A♥, A♦, A♣, K♠"));
        assert!(!output.contains("Drawn:"));
    }

    #[test]
    fn shuffled_and_drawn() {
        let output = run(Some(42), 2, true, 3);
        assert!(output.contains("Cards: 101/104 remaining (2 sets)"));
        assert!(output.contains("Full: no | Empty: no | Shuffled: yes | Ready: no"));
        assert!(output.contains("Drawn: ["));
    }

    #[test]
    fn drawing_everything_empties_the_deck() {
        let output = run(Some(5), 1, true, 52);
        assert!(output.contains("Empty: yes"));
        assert!(output.contains("Deck: []"));
    }

    #[test]
    fn overdrawing_fails() {
        let mut out = Vec::new();
        let err = handle_deck_command(Some(5), 1, false, 53, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn zero_sets_fails() {
        let mut out = Vec::new();
        assert!(handle_deck_command(None, 0, false, 0, &mut out).is_err());
    }
}
