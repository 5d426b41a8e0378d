//! Bracket data models.

use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, str::FromStr};

use super::{builder::BracketLayout, errors::BracketError, events::BracketEvent};
use crate::config::BracketConfig;

/// Address of a match: round index and match index within that round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId {
    pub round: usize,
    pub index: usize,
}

impl MatchId {
    pub const fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}m{}", self.round, self.index)
    }
}

impl FromStr for MatchId {
    type Err = BracketError;

    /// Parses the `r<round>m<match>` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BracketError::InvalidMatchId(s.to_string());
        let rest = s.trim().strip_prefix('r').ok_or_else(invalid)?;
        let (round, index) = rest.split_once('m').ok_or_else(invalid)?;
        Ok(Self {
            round: round.parse().map_err(|_| invalid())?,
            index: index.parse().map_err(|_| invalid())?,
        })
    }
}

/// One of the two input positions of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    /// Slot 0
    Upper,
    /// Slot 1
    Lower,
}

impl SlotPosition {
    /// Slot of the next match fed by the match at `match_index`
    pub const fn fed_by(match_index: usize) -> Self {
        if match_index % 2 == 0 {
            SlotPosition::Upper
        } else {
            SlotPosition::Lower
        }
    }

    pub const fn index(self) -> usize {
        match self {
            SlotPosition::Upper => 0,
            SlotPosition::Lower => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            SlotPosition::Upper => SlotPosition::Lower,
            SlotPosition::Lower => SlotPosition::Upper,
        }
    }
}

impl TryFrom<usize> for SlotPosition {
    type Error = BracketError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SlotPosition::Upper),
            1 => Ok(SlotPosition::Lower),
            other => Err(BracketError::InvalidSlot(other)),
        }
    }
}

impl FromStr for SlotPosition {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "u" | "upper" => Ok(SlotPosition::Upper),
            "1" | "l" | "lower" => Ok(SlotPosition::Lower),
            _ => Err(BracketError::InvalidSlotLabel(s.to_string())),
        }
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotPosition::Upper => write!(f, "upper"),
            SlotPosition::Lower => write!(f, "lower"),
        }
    }
}

/// A previous-round match whose winner fills one slot of this match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Feeding match
    pub match_id: MatchId,
    /// Slot of this match it feeds
    pub feeds: SlotPosition,
}

/// The next-round slot that receives this match's winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessorRef {
    pub match_id: MatchId,
    pub slot: SlotPosition,
}

/// What a slot was seeded with when the bracket was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SlotContent {
    /// Player placed in a first-round match
    Seed(String),
    /// Player advanced straight into round 1
    Bye(String),
    /// Filled by the winner of the referenced match
    AwaitingWinner(MatchId),
    /// Terminal champion display
    ChampionPlaceholder,
}

/// Text shown in the champion slot until the finals are decided
pub const CHAMPION_PLACEHOLDER: &str = "Champion";

/// A match input position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub content: SlotContent,
    /// Text currently shown for this slot
    pub display: String,
    /// Whether `display` holds a name carried up from a decided match
    pub propagated: bool,
}

impl Slot {
    pub fn seed(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display: name.clone(),
            content: SlotContent::Seed(name),
            propagated: false,
        }
    }

    pub fn bye(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display: name.clone(),
            content: SlotContent::Bye(name),
            propagated: false,
        }
    }

    pub fn awaiting(source: MatchId, placeholder: String) -> Self {
        Self {
            content: SlotContent::AwaitingWinner(source),
            display: placeholder,
            propagated: false,
        }
    }

    pub fn champion() -> Self {
        Self {
            content: SlotContent::ChampionPlaceholder,
            display: CHAMPION_PLACEHOLDER.to_string(),
            propagated: false,
        }
    }

    /// Player name for seeded and bye slots
    pub fn player(&self) -> Option<&str> {
        match &self.content {
            SlotContent::Seed(name) | SlotContent::Bye(name) => Some(name),
            SlotContent::AwaitingWinner(_) | SlotContent::ChampionPlaceholder => None,
        }
    }
}

/// A single match of the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 1-based number across the bracket; `None` for the champion match
    pub number: Option<usize>,
    /// Two slots for played matches, one for the champion match
    pub slots: Vec<Slot>,
    pub winner: Option<SlotPosition>,
    /// Previous-round matches feeding this one
    pub sources: Vec<SourceRef>,
    /// `None` only for the champion match
    pub successor: Option<SuccessorRef>,
}

impl Match {
    /// `Match N` label shown in the bracket
    pub fn label(&self) -> Option<String> {
        self.number.map(|number| format!("Match {number}"))
    }

    pub fn slot(&self, position: SlotPosition) -> Option<&Slot> {
        self.slots.get(position.index())
    }

    pub fn is_winner(&self, position: SlotPosition) -> bool {
        self.winner == Some(position)
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_champion(&self) -> bool {
        self.successor.is_none()
    }

    /// Display text of the marked slot
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|position| self.slot(position))
            .map(|slot| slot.display.as_str())
    }

    /// Source feeding the given slot, if it is not a seed or bye
    pub fn source_for(&self, position: SlotPosition) -> Option<&SourceRef> {
        self.sources.iter().find(|source| source.feeds == position)
    }
}

/// A column of the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub index: usize,
    /// `None` for the champion round
    pub name: Option<String>,
    pub matches: Vec<Match>,
    /// Round-completion indicator, kept current by mark/clear
    pub complete: bool,
}

/// A fully built single-elimination bracket.
///
/// Built once per configuration by [`BracketModel::build`] and afterwards
/// mutated only through the mark/clear operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketModel {
    pub(super) config: BracketConfig,
    pub(super) layout: BracketLayout,
    pub(super) rounds: Vec<Round>,
    /// Changes not yet drained by the renderer
    #[serde(skip)]
    pub(super) events: VecDeque<BracketEvent>,
}

impl BracketModel {
    /// Normalized configuration the bracket was built from
    pub fn config(&self) -> &BracketConfig {
        &self.config
    }

    pub fn layout(&self) -> &BracketLayout {
        &self.layout
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// Number of rounds including the champion round
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_champion_round(&self, round: usize) -> bool {
        round + 1 == self.rounds.len()
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.rounds.get(id.round)?.matches.get(id.index)
    }

    pub(super) fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.rounds.get_mut(id.round)?.matches.get_mut(id.index)
    }

    /// Look up a played match by its global `Match N` number
    pub fn find_by_number(&self, number: usize) -> Option<MatchId> {
        self.matches()
            .find(|m| m.number == Some(number))
            .map(|m| m.id)
    }

    /// All matches, round-major
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    /// Number of matches that are actually played (champion round excluded)
    pub fn played_matches(&self) -> usize {
        self.matches().filter(|m| !m.is_champion()).count()
    }

    /// Name shown in the champion slot once the finals have been decided
    pub fn champion(&self) -> Option<&str> {
        let slot = self.rounds.last()?.matches.first()?.slots.first()?;
        slot.propagated.then_some(slot.display.as_str())
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> VecDeque<BracketEvent> {
        std::mem::take(&mut self.events)
    }
}
