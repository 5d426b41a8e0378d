//! # Nexus Bracket
//!
//! A single-elimination tournament bracket model.
//!
//! The bracket is computed once from a [`BracketConfig`] and then driven by
//! two operations, marking and clearing match winners. Every change is
//! carried through the already-decided rounds so each slot always shows the
//! most recent decision made below it.
//!
//! ## Structure
//!
//! For `n` players the bracket has `ceil(log2(n)) + 1` rounds, the last of
//! which is the champion round. Player counts that are not a power of two
//! get a short first round; everybody else receives a bye into round 1.
//! Exactly `n - 1` matches are played.
//!
//! ## Core Modules
//!
//! - [`config`]: Bracket configuration and round names
//! - [`bracket`]: Builder, propagation engine, events and errors
//!
//! ## Example
//!
//! ```
//! use nexus_bracket::{BracketConfig, BracketModel};
//!
//! let bracket = BracketModel::build(BracketConfig::new(8));
//! assert_eq!(bracket.num_rounds(), 4);
//! assert_eq!(bracket.played_matches(), 7);
//! ```

/// Bracket structure, winner propagation and change events.
pub mod bracket;
pub use bracket::{
    BracketError, BracketEvent, BracketLayout, BracketModel, BracketResult, CHAMPION_PLACEHOLDER,
    Match, MatchId, Round, Slot, SlotContent, SlotPosition, SourceRef, SuccessorRef,
};

/// Bracket configuration.
pub mod config;
pub use config::{BracketConfig, ConfigError, RoundNames, TournamentType};
