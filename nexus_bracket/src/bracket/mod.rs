//! Single-elimination bracket core.
//!
//! This module provides:
//! - Round sizing and bye placement for any player count
//! - The initial match tree with seeds, byes and "Winner of ..." placeholders
//! - Winner marking and clearing with upward propagation
//! - Round-completion tracking and change events for renderers
//!
//! ## Example
//!
//! ```
//! use nexus_bracket::{BracketConfig, BracketModel, MatchId, SlotPosition};
//!
//! let mut bracket = BracketModel::build(BracketConfig::new(5));
//!
//! // Round 0 holds the single play-in match, round 1 the byes
//! bracket.mark_winner(MatchId::new(0, 0), SlotPosition::Upper)?;
//! assert!(bracket.is_round_complete(0));
//! assert_eq!(
//!     bracket.get_match(MatchId::new(1, 0)).unwrap().slots[0].display,
//!     "Player 1"
//! );
//! # Ok::<(), nexus_bracket::BracketError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod errors;
pub mod events;
pub mod models;
pub mod naming;

pub use builder::BracketLayout;
pub use errors::{BracketError, BracketResult};
pub use events::BracketEvent;
pub use models::{
    BracketModel, CHAMPION_PLACEHOLDER, Match, MatchId, Round, Slot, SlotContent, SlotPosition,
    SourceRef, SuccessorRef,
};
pub use naming::{round_name, winner_placeholder};
