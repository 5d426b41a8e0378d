use nexus_bracket::{MatchId, SlotPosition};
use std::fmt;

/// How a command names a match: by its `Match N` number or by `r<round>m<match>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRef {
    Number(usize),
    Id(MatchId),
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "Match {number}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// A line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Mark(MatchRef, SlotPosition),
    Clear(MatchRef),
    Toggle(MatchRef, SlotPosition),
    Show,
    Status,
    Json,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Command needs a match but none was given.
    MissingMatch(&'static str),
    /// Match reference is neither a number nor `r<round>m<match>`.
    InvalidMatch(String),
    /// Command needs a slot but none was given.
    MissingSlot(&'static str),
    /// Slot is not upper/lower/0/1.
    InvalidSlot(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMatch(command) => write!(
                f,
                "'{}' needs a match, either its number or r<round>m<match> (e.g., '{} 3')",
                command, command
            ),
            Self::InvalidMatch(value) => write!(
                f,
                "Invalid match '{}'. Use a match number (e.g., '3') or an id (e.g., 'r0m2')",
                value
            ),
            Self::MissingSlot(command) => write!(
                f,
                "'{}' needs a slot: upper or lower (e.g., '{} 3 upper')",
                command, command
            ),
            Self::InvalidSlot(value) => write!(
                f,
                "Invalid slot '{}'. Use upper, lower, 0 or 1",
                value
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a Command.
///
/// # Examples
///
/// ```
/// use nb_cli::commands::{Command, MatchRef, parse_command};
/// use nexus_bracket::{MatchId, SlotPosition};
///
/// assert_eq!(parse_command("show"), Ok(Command::Show));
/// assert_eq!(
///     parse_command("mark 3 lower"),
///     Ok(Command::Mark(MatchRef::Number(3), SlotPosition::Lower))
/// );
/// assert_eq!(
///     parse_command("clear r1m0"),
///     Ok(Command::Clear(MatchRef::Id(MatchId::new(1, 0))))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "show" | "s" => return Ok(Command::Show),
        "status" => return Ok(Command::Status),
        "json" => return Ok(Command::Json),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"mark") | Some(&"m") => {
            let (match_ref, slot) = parse_match_and_slot("mark", &parts)?;
            Ok(Command::Mark(match_ref, slot))
        }
        Some(&"toggle") | Some(&"t") => {
            let (match_ref, slot) = parse_match_and_slot("toggle", &parts)?;
            Ok(Command::Toggle(match_ref, slot))
        }
        Some(&"clear") | Some(&"c") => {
            let match_ref = parse_match_ref("clear", parts.get(1))?;
            Ok(Command::Clear(match_ref))
        }
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse "<command> MATCH SLOT"
fn parse_match_and_slot(
    command: &'static str,
    parts: &[&str],
) -> Result<(MatchRef, SlotPosition), ParseError> {
    let match_ref = parse_match_ref(command, parts.get(1))?;
    let slot = match parts.get(2) {
        Some(value) => value
            .parse::<SlotPosition>()
            .map_err(|_| ParseError::InvalidSlot(value.to_string()))?,
        None => return Err(ParseError::MissingSlot(command)),
    };
    Ok((match_ref, slot))
}

fn parse_match_ref(command: &'static str, value: Option<&&str>) -> Result<MatchRef, ParseError> {
    let Some(value) = value else {
        return Err(ParseError::MissingMatch(command));
    };
    if let Ok(number) = value.parse::<usize>() {
        return Ok(MatchRef::Number(number));
    }
    value
        .parse::<MatchId>()
        .map(MatchRef::Id)
        .map_err(|_| ParseError::InvalidMatch(value.to_string()))
}
