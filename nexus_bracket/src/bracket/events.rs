//! Change notifications for renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::{MatchId, SlotPosition};

/// Events produced by mark/clear so a renderer can repaint only what changed
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum BracketEvent {
    WinnerMarked {
        match_id: MatchId,
        slot: SlotPosition,
        name: String,
    },
    WinnerCleared(MatchId),
    SlotUpdated {
        match_id: MatchId,
        slot: SlotPosition,
        display: String,
    },
    RoundCompleted(usize),
    RoundReopened(usize),
}

impl fmt::Display for BracketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::WinnerMarked {
                match_id,
                slot,
                name,
            } => format!("{name} ({slot}) wins {match_id}"),
            Self::WinnerCleared(match_id) => format!("winner of {match_id} cleared"),
            Self::SlotUpdated {
                match_id,
                slot,
                display,
            } => format!("{match_id} {slot} slot now shows {display}"),
            Self::RoundCompleted(round) => format!("round {} complete", round + 1),
            Self::RoundReopened(round) => format!("round {} reopened", round + 1),
        };
        write!(f, "{repr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = BracketEvent::WinnerMarked {
            match_id: MatchId::new(0, 1),
            slot: SlotPosition::Lower,
            name: "Ada".to_string(),
        };
        assert_eq!(event.to_string(), "Ada (lower) wins r0m1");
        assert_eq!(
            BracketEvent::RoundCompleted(0).to_string(),
            "round 1 complete"
        );
        assert_eq!(
            BracketEvent::WinnerCleared(MatchId::new(1, 0)).to_string(),
            "winner of r1m0 cleared"
        );
    }
}
