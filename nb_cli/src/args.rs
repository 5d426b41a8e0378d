//! Command-line flags to bracket configuration.

use anyhow::{Context, Result};
use nexus_bracket::BracketConfig;
use pico_args::Arguments;
use std::path::PathBuf;

pub const USAGE: &str = "\
Edit a single-elimination tournament bracket from the terminal

USAGE:
  nb_cli [OPTIONS]

OPTIONS:
  --players N             Number of players  [default: 8]
  --names A,B,C           Comma-separated player names (sets the player count)
  --config FILE           JSON bracket config; flags override its values
  --finals NAME           Name of the finals round
  --semi-finals NAME      Name of the semi-finals round
  --quarter-finals NAME   Name of the quarter-finals round
  --round-label NAME      Label prefix for earlier rounds  [default: Round]
  --json                  Print the bracket as JSON and exit

FLAGS:
  -h, --help              Print help information
";

/// Parsed command line
#[derive(Debug)]
pub struct Args {
    pub config: BracketConfig,
    pub json: bool,
}

/// Read the bracket flags out of `pargs`.
///
/// A `--config` file is loaded first; `--players`, `--names` and the round
/// name flags then override it.
pub fn parse_args(pargs: &mut Arguments) -> Result<Args> {
    let config_path: Option<PathBuf> = pargs.opt_value_from_str("--config")?;
    let mut config = match config_path {
        Some(path) => BracketConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BracketConfig::default(),
    };

    if let Some(players) = pargs.opt_value_from_str::<_, usize>("--players")? {
        config.player_count = players;
    }
    if let Some(names) = pargs.opt_value_from_str::<_, String>("--names")? {
        config.player_names = names
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();
        config.player_count = config.player_names.len();
    }

    if let Some(finals) = pargs.opt_value_from_str("--finals")? {
        config.round_names.finals = finals;
    }
    if let Some(semi_finals) = pargs.opt_value_from_str("--semi-finals")? {
        config.round_names.semi_finals = semi_finals;
    }
    if let Some(quarter_finals) = pargs.opt_value_from_str("--quarter-finals")? {
        config.round_names.quarter_finals = quarter_finals;
    }
    if let Some(label) = pargs.opt_value_from_str("--round-label")? {
        config.round_names.default = label;
    }

    Ok(Args {
        config,
        json: pargs.contains("--json"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(flags: &[&str]) -> Arguments {
        Arguments::from_vec(flags.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(&mut args(&[])).unwrap();
        assert_eq!(parsed.config, BracketConfig::default());
        assert!(!parsed.json);
    }

    #[test]
    fn test_player_count() {
        let parsed = parse_args(&mut args(&["--players", "13", "--json"])).unwrap();
        assert_eq!(parsed.config.player_count, 13);
        assert!(parsed.json);
    }

    #[test]
    fn test_names_set_player_count() {
        let parsed = parse_args(&mut args(&["--names", "Ada, Brook,Cyd"])).unwrap();
        assert_eq!(parsed.config.player_count, 3);
        assert_eq!(parsed.config.player_names, vec!["Ada", "Brook", "Cyd"]);
    }

    #[test]
    fn test_round_names() {
        let parsed = parse_args(&mut args(&[
            "--finals",
            "Grand Final",
            "--round-label",
            "Stage",
        ]))
        .unwrap();
        assert_eq!(parsed.config.round_names.finals, "Grand Final");
        assert_eq!(parsed.config.round_names.default, "Stage");
        assert_eq!(parsed.config.round_names.semi_finals, "Semi-Finals");
    }

    #[test]
    fn test_invalid_player_count() {
        assert!(parse_args(&mut args(&["--players", "many"])).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = parse_args(&mut args(&["--config", "/nonexistent/bracket.json"])).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
