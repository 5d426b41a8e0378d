//! Bracket structure computation.
//!
//! Lays out rounds, byes and match counts for any player count and builds the
//! initial match tree with seeds, byes, placeholders and source links.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{
    models::{BracketModel, Match, MatchId, Round, Slot, SlotPosition, SourceRef, SuccessorRef},
    naming::{round_name, winner_placeholder},
};
use crate::config::{BracketConfig, MIN_PLAYERS, default_player_name};

/// Round sizing for a given player count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketLayout {
    /// Player count after clamping
    pub player_count: usize,
    /// Rounds including the champion round
    pub num_rounds: usize,
    /// Bracket width: `2^(num_rounds - 1)`
    pub next_pow2: usize,
    /// Players that skip round 0
    pub bye_count: usize,
    pub first_round_matches: usize,
    /// Match count of every round, champion round included
    pub matches_per_round: Vec<usize>,
}

impl BracketLayout {
    /// Compute the layout for `player_count` players (clamped to at least 2)
    pub fn new(player_count: usize) -> Self {
        let player_count = player_count.max(MIN_PLAYERS);
        let next_pow2 = player_count.next_power_of_two();
        let num_rounds = next_pow2.trailing_zeros() as usize + 1;
        let bye_count = next_pow2 - player_count;
        let first_round_matches = player_count - next_pow2 / 2;

        let mut matches_per_round: Vec<usize> = Vec::with_capacity(num_rounds);
        for round in 0..num_rounds {
            let count = if round == 0 {
                first_round_matches
            } else if round + 2 >= num_rounds {
                // Finals and champion round
                1
            } else if round == 1 {
                first_round_matches.div_ceil(2) + bye_count / 2
            } else {
                matches_per_round[round - 1].div_ceil(2)
            };
            matches_per_round.push(count);
        }

        debug_assert!(
            matches_per_round.iter().skip(1).all(|&count| count > 0),
            "empty round in layout for {player_count} players"
        );

        Self {
            player_count,
            num_rounds,
            next_pow2,
            bye_count,
            first_round_matches,
            matches_per_round,
        }
    }

    pub fn champion_round(&self) -> usize {
        self.num_rounds - 1
    }

    /// Matches actually played: every round except the champion round
    pub fn played_matches(&self) -> usize {
        self.matches_per_round[..self.champion_round()].iter().sum()
    }
}

impl BracketModel {
    /// Build a bracket from a configuration.
    ///
    /// The configuration is normalized first, so this never fails.
    pub fn build(config: BracketConfig) -> Self {
        let config = config.normalized();
        let layout = BracketLayout::new(config.player_count);
        let num_rounds = layout.num_rounds;
        let champion_round = layout.champion_round();

        debug!(
            "Building {} bracket: {} players, {} rounds, {} byes, {} first round matches",
            config.tournament_type,
            layout.player_count,
            num_rounds,
            layout.bye_count,
            layout.first_round_matches
        );

        // Skeleton: ids, numbers and successor links
        let mut next_number = 1;
        let mut rounds: Vec<Round> = layout
            .matches_per_round
            .iter()
            .enumerate()
            .map(|(round, &count)| {
                let matches = (0..count)
                    .map(|index| {
                        let number = (round != champion_round).then(|| {
                            let number = next_number;
                            next_number += 1;
                            number
                        });
                        let successor = (round != champion_round).then(|| SuccessorRef {
                            match_id: MatchId::new(round + 1, index / 2),
                            slot: SlotPosition::fed_by(index),
                        });
                        Match {
                            id: MatchId::new(round, index),
                            number,
                            slots: Vec::with_capacity(2),
                            winner: None,
                            sources: Vec::new(),
                            successor,
                        }
                    })
                    .collect();
                Round {
                    index: round,
                    name: round_name(round, num_rounds, &config.round_names),
                    matches,
                    complete: false,
                }
            })
            .collect();

        // Source links are the inverse of the successor links
        let links: Vec<(MatchId, SuccessorRef)> = rounds
            .iter()
            .flat_map(|round| round.matches.iter())
            .filter_map(|m| m.successor.map(|successor| (m.id, successor)))
            .collect();
        for (source, successor) in links {
            let target = &mut rounds[successor.match_id.round].matches[successor.match_id.index];
            target.sources.push(SourceRef {
                match_id: source,
                feeds: successor.slot,
            });
        }

        // Slots
        let mut bye_seed = layout.first_round_matches * 2;
        for round in 0..num_rounds {
            for index in 0..rounds[round].matches.len() {
                let slots = if round == champion_round {
                    vec![Slot::champion()]
                } else if round == 0 {
                    vec![
                        Slot::seed(player_name(&config, index * 2)),
                        Slot::seed(player_name(&config, index * 2 + 1)),
                    ]
                } else {
                    [SlotPosition::Upper, SlotPosition::Lower]
                        .into_iter()
                        .map(|position| {
                            match rounds[round].matches[index].source_for(position) {
                                Some(source) => {
                                    let feeder = &rounds[source.match_id.round].matches
                                        [source.match_id.index];
                                    let source_round =
                                        rounds[source.match_id.round].name.as_deref();
                                    Slot::awaiting(
                                        source.match_id,
                                        winner_placeholder(
                                            source_round.unwrap_or_default(),
                                            feeder.number.unwrap_or_default(),
                                        ),
                                    )
                                }
                                None => {
                                    debug_assert_eq!(round, 1, "bye slot outside round 1");
                                    let slot = Slot::bye(player_name(&config, bye_seed));
                                    bye_seed += 1;
                                    slot
                                }
                            }
                        })
                        .collect()
                };
                rounds[round].matches[index].slots = slots;
            }
        }

        debug_assert_eq!(bye_seed, layout.player_count, "bye seeds not fully placed");

        // The champion slot is winner-marked from the start
        if let Some(champion) = rounds[champion_round].matches.first_mut() {
            champion.winner = Some(SlotPosition::Upper);
        }
        for round in &mut rounds {
            round.complete = round.matches.iter().all(Match::is_decided);
        }

        Self {
            config,
            layout,
            rounds,
            events: VecDeque::new(),
        }
    }
}

fn player_name(config: &BracketConfig, index: usize) -> String {
    config
        .player_names
        .get(index)
        .cloned()
        .unwrap_or_else(|| default_player_name(index))
}
