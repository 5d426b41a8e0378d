//! Terminal front end for a single-elimination bracket.
//!
//! Builds the bracket from command-line flags, then reads one command per
//! line from stdin and prints the resulting changes.

use anyhow::Result;
use env_logger::Env;
use log::warn;
use pico_args::Arguments;
use std::io::{self, BufRead, Write};

use nb_cli::{
    args::{USAGE, parse_args},
    commands::parse_command,
    session::{HELP, Reply, Session},
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let args = parse_args(&mut pargs)?;
    let leftover = pargs.finish();
    if !leftover.is_empty() {
        warn!("Ignoring unused arguments: {leftover:?}");
    }

    let mut session = Session::new(args.config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(session.bracket())?);
        return Ok(());
    }

    run(&mut session)
}

fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.bracket().config().tournament_type.name());
    print!("{HELP}");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Print(text)) => print!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => println!("{e:#}"),
        }
    }

    Ok(())
}
