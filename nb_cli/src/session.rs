//! A single bracket-editing session: applies parsed commands to the bracket
//! and produces the text to print.

use anyhow::{Context, Result, anyhow};
use log::info;
use nexus_bracket::{BracketConfig, BracketModel, MatchId};

use crate::{
    commands::{Command, MatchRef},
    render::{render_bracket, render_status},
};

pub const HELP: &str = "\
COMMANDS:
  mark MATCH SLOT       Mark the upper/lower slot of MATCH as its winner
  toggle MATCH SLOT     Mark the slot, or clear it if it is already the winner
  clear MATCH           Clear the winner of MATCH
  show                  Print the bracket
  status                Print round completion and the champion
  json                  Print the bracket as JSON
  help                  Print this help
  quit                  Leave

MATCH is a match number (3) or an id (r0m2); SLOT is upper, lower, 0 or 1.
";

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

pub struct Session {
    bracket: BracketModel,
}

impl Session {
    pub fn new(config: BracketConfig) -> Self {
        let bracket = BracketModel::build(config);
        info!(
            "Bracket ready: {} players, {} rounds",
            bracket.layout().player_count,
            bracket.num_rounds()
        );
        Self { bracket }
    }

    pub fn bracket(&self) -> &BracketModel {
        &self.bracket
    }

    /// Apply one command.
    ///
    /// Mark, toggle and clear reply with the changes they caused, one per line.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Mark(match_ref, slot) => {
                let id = self.resolve(match_ref)?;
                self.bracket
                    .mark_winner(id, slot)
                    .with_context(|| format!("Cannot mark {match_ref}"))?;
                Reply::Print(self.drain_changes())
            }
            Command::Toggle(match_ref, slot) => {
                let id = self.resolve(match_ref)?;
                self.bracket
                    .toggle_winner(id, slot)
                    .with_context(|| format!("Cannot toggle {match_ref}"))?;
                Reply::Print(self.drain_changes())
            }
            Command::Clear(match_ref) => {
                let id = self.resolve(match_ref)?;
                let cleared = self
                    .bracket
                    .clear_winner(id)
                    .with_context(|| format!("Cannot clear {match_ref}"))?;
                if cleared {
                    Reply::Print(self.drain_changes())
                } else {
                    Reply::Print(format!("{match_ref} has no winner yet\n"))
                }
            }
            Command::Show => Reply::Print(render_bracket(&self.bracket)),
            Command::Status => Reply::Print(render_status(&self.bracket)),
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.bracket)
                    .context("Failed to serialize bracket")?;
                Reply::Print(json + "\n")
            }
            Command::Help => Reply::Print(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn resolve(&self, match_ref: MatchRef) -> Result<MatchId> {
        match match_ref {
            MatchRef::Id(id) => Ok(id),
            MatchRef::Number(number) => self
                .bracket
                .find_by_number(number)
                .ok_or_else(|| anyhow!("There is no Match {number}")),
        }
    }

    fn drain_changes(&mut self) -> String {
        self.bracket
            .drain_events()
            .into_iter()
            .map(|event| format!("{event}\n"))
            .collect()
    }
}
