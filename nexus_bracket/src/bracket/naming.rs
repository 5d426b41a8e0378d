//! Round display names.

use crate::config::RoundNames;

/// Display name of a played round.
///
/// The last three played rounds get their dedicated names; earlier rounds are
/// labelled `"<default> <n>"` with a 1-based `n`. Returns `None` for the
/// champion round (`num_rounds - 1`) and for indices past it.
pub fn round_name(round: usize, num_rounds: usize, names: &RoundNames) -> Option<String> {
    if round + 1 >= num_rounds {
        return None;
    }

    let from_end = num_rounds - round;
    let name = match from_end {
        2 => names.finals.clone(),
        3 => names.semi_finals.clone(),
        4 => names.quarter_finals.clone(),
        _ => format!("{} {}", names.default, round + 1),
    };
    Some(name)
}

/// Placeholder shown in a slot that waits on another match's winner
pub fn winner_placeholder(round_name: &str, match_number: usize) -> String {
    format!("Winner of {round_name} Match {match_number}")
}
