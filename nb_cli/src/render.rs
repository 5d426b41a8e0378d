//! Plain-text bracket rendering.

use nexus_bracket::{BracketModel, Match, SlotPosition};
use std::fmt::Write;

/// Render every round, match and slot. The marked winner of each match is
/// prefixed with `*`.
pub fn render_bracket(bracket: &BracketModel) -> String {
    let mut out = String::new();

    for round in bracket.rounds() {
        match &round.name {
            Some(name) => {
                let done = if round.complete { " [done]" } else { "" };
                let _ = writeln!(out, "== {name}{done} ==");
                for m in &round.matches {
                    render_match(&mut out, m);
                }
            }
            None => {
                let _ = writeln!(out, "== Champion ==");
                let champion = bracket.champion().unwrap_or("(undecided)");
                let _ = writeln!(out, "  {champion}");
            }
        }
        out.push('\n');
    }

    out
}

fn render_match(out: &mut String, m: &Match) {
    let label = m.label().unwrap_or_default();
    let _ = writeln!(out, "{label} ({})", m.id);
    for (index, slot) in m.slots.iter().enumerate() {
        let marker = match SlotPosition::try_from(index) {
            Ok(position) if m.is_winner(position) => '*',
            _ => ' ',
        };
        let _ = writeln!(out, "  {marker} {}", slot.display);
    }
}

/// One line per round with its completion state, then the champion.
pub fn render_status(bracket: &BracketModel) -> String {
    let mut out = String::new();

    for round in bracket.rounds() {
        let Some(name) = &round.name else {
            continue;
        };
        let decided = round.matches.iter().filter(|m| m.is_decided()).count();
        let _ = writeln!(
            out,
            "{name}: {decided}/{} decided{}",
            round.matches.len(),
            if round.complete { " (complete)" } else { "" }
        );
    }

    match bracket.champion() {
        Some(name) => {
            let _ = writeln!(out, "Champion: {name}");
        }
        None => {
            let _ = writeln!(out, "Champion: undecided");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_bracket::{BracketConfig, MatchId};

    #[test]
    fn test_render_fresh_bracket() {
        let bracket = BracketModel::build(BracketConfig::with_names(["Ada", "Brook", "Cyd"]));
        let text = render_bracket(&bracket);

        assert!(text.contains("== Semi-Finals =="));
        assert!(text.contains("Match 1 (r0m0)"));
        assert!(text.contains("    Ada"));
        assert!(text.contains("Winner of Semi-Finals Match 1"));
        assert!(text.contains("== Champion ==\n  (undecided)"));
    }

    #[test]
    fn test_render_marks_winner() {
        let mut bracket = BracketModel::build(BracketConfig::with_names(["Ada", "Brook"]));
        bracket
            .mark_winner(MatchId::new(0, 0), SlotPosition::Lower)
            .unwrap();
        let text = render_bracket(&bracket);

        assert!(text.contains("== Finals [done] =="));
        assert!(text.contains("  * Brook"));
        assert!(text.contains("    Ada"));
        assert!(text.contains("== Champion ==\n  Brook"));
    }

    #[test]
    fn test_render_status() {
        let mut bracket = BracketModel::build(BracketConfig::new(4));
        bracket
            .mark_winner(MatchId::new(0, 0), SlotPosition::Upper)
            .unwrap();
        let text = render_status(&bracket);

        assert!(text.contains("Semi-Finals: 1/2 decided\n"));
        assert!(text.contains("Finals: 0/1 decided\n"));
        assert!(text.contains("Champion: undecided"));
    }
}
