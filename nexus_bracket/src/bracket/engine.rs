//! Winner propagation.
//!
//! Marking a winner carries the winner's display name into the successor
//! slot, and keeps carrying it while the receiving slot is itself the marked
//! winner of its match. Clearing a winner restores the successor slot's
//! placeholder and unwinds every marking that depended on it. Both walk the
//! precomputed successor links and stop at the champion match, so the depth
//! is bounded by the number of rounds.

use log::{debug, warn};

use super::{
    errors::{BracketError, BracketResult},
    events::BracketEvent,
    models::{BracketModel, CHAMPION_PLACEHOLDER, MatchId, SlotPosition, SuccessorRef},
    naming::winner_placeholder,
};

impl BracketModel {
    /// Mark `slot` as the winner of match `id`.
    ///
    /// Replaces any previous winner of the match. Rejected for unknown
    /// matches and for the champion match; a rejected call changes nothing.
    pub fn mark_winner(&mut self, id: MatchId, slot: SlotPosition) -> BracketResult<()> {
        let successor = self.successor_of(id)?;
        let Some(m) = self.get_match_mut(id) else {
            return Err(BracketError::MatchNotFound(id));
        };
        let name = m
            .slot(slot)
            .map(|s| s.display.clone())
            .ok_or(BracketError::InvalidSlot(slot.index()))?;

        m.winner = Some(slot);
        debug!("Marked {name} ({slot}) as winner of {id}");
        self.events.push_back(BracketEvent::WinnerMarked {
            match_id: id,
            slot,
            name: name.clone(),
        });

        self.propagate_winner(successor, name);
        self.check_round_completion(id.round);
        Ok(())
    }

    /// Clear the winner of match `id`.
    ///
    /// Returns `Ok(false)` when the match had no winner. Rejected for unknown
    /// matches and for the champion match.
    pub fn clear_winner(&mut self, id: MatchId) -> BracketResult<bool> {
        self.successor_of(id)?;
        let Some(m) = self.get_match_mut(id) else {
            return Err(BracketError::MatchNotFound(id));
        };
        if m.winner.take().is_none() {
            return Ok(false);
        }

        debug!("Cleared winner of {id}");
        self.events.push_back(BracketEvent::WinnerCleared(id));
        self.check_round_completion(id.round);
        self.reset_successor_slot(id);
        Ok(true)
    }

    /// Clear the winner if `slot` is the current winner, mark it otherwise.
    ///
    /// Returns whether `slot` is marked afterwards.
    pub fn toggle_winner(&mut self, id: MatchId, slot: SlotPosition) -> BracketResult<bool> {
        let Some(m) = self.get_match(id) else {
            warn!("Rejected toggle on missing match {id}");
            return Err(BracketError::MatchNotFound(id));
        };
        if m.is_winner(slot) {
            self.clear_winner(id)?;
            Ok(false)
        } else {
            self.mark_winner(id, slot)?;
            Ok(true)
        }
    }

    /// Recompute the completion indicator of `round` and return it.
    ///
    /// A round is complete when every match in it has a marked winner.
    pub fn check_round_completion(&mut self, round: usize) -> bool {
        let Some(r) = self.rounds.get_mut(round) else {
            return false;
        };
        let complete = r.matches.iter().all(|m| m.is_decided());
        if complete != r.complete {
            r.complete = complete;
            self.events.push_back(if complete {
                BracketEvent::RoundCompleted(round)
            } else {
                BracketEvent::RoundReopened(round)
            });
        }
        complete
    }

    /// Current completion indicator of `round`; `false` for unknown rounds
    pub fn is_round_complete(&self, round: usize) -> bool {
        self.rounds.get(round).is_some_and(|r| r.complete)
    }

    /// Successor link of a user-mutable match
    fn successor_of(&self, id: MatchId) -> BracketResult<SuccessorRef> {
        let Some(m) = self.get_match(id) else {
            warn!("Rejected change to missing match {id}");
            return Err(BracketError::MatchNotFound(id));
        };
        m.successor.ok_or_else(|| {
            warn!("Rejected change to champion match {id}");
            BracketError::ChampionRoundImmutable
        })
    }

    /// Write `name` into the target slot, and keep going while that slot is
    /// the marked winner of its own match.
    fn propagate_winner(&mut self, target: SuccessorRef, name: String) {
        let Some(next) = self.get_match_mut(target.match_id) else {
            return;
        };
        let Some(slot) = next.slots.get_mut(target.slot.index()) else {
            return;
        };

        slot.display.clone_from(&name);
        slot.propagated = true;
        let carry_on = next.winner == Some(target.slot);
        let further = next.successor;

        self.events.push_back(BracketEvent::SlotUpdated {
            match_id: target.match_id,
            slot: target.slot,
            display: name.clone(),
        });

        if !carry_on {
            return;
        }
        if let Some(further) = further {
            debug!("Carrying {name} on from {}", target.match_id);
            self.propagate_winner(further, name);
        }
    }

    /// Restore the placeholder in the slot fed by `id`, unwinding the
    /// successor's winner when that slot was marked.
    fn reset_successor_slot(&mut self, id: MatchId) {
        let Some(source) = self.get_match(id) else {
            return;
        };
        let Some(target) = source.successor else {
            return;
        };
        let to_champion = self.is_champion_round(target.match_id.round);
        let placeholder = if to_champion {
            CHAMPION_PLACEHOLDER.to_string()
        } else {
            let round_name = self
                .rounds
                .get(id.round)
                .and_then(|r| r.name.as_deref())
                .unwrap_or_default();
            winner_placeholder(round_name, source.number.unwrap_or_default())
        };

        let Some(next) = self.get_match_mut(target.match_id) else {
            return;
        };
        let Some(slot) = next.slots.get_mut(target.slot.index()) else {
            return;
        };
        slot.display.clone_from(&placeholder);
        slot.propagated = false;

        // The champion slot keeps its permanent marking
        let was_winner = !to_champion && next.winner == Some(target.slot);
        if was_winner {
            next.winner = None;
        }

        self.events.push_back(BracketEvent::SlotUpdated {
            match_id: target.match_id,
            slot: target.slot,
            display: placeholder,
        });

        if was_winner {
            debug!("Unwinding winner of {}", target.match_id);
            self.events
                .push_back(BracketEvent::WinnerCleared(target.match_id));
            self.check_round_completion(target.match_id.round);
            self.reset_successor_slot(target.match_id);
        }
    }
}
