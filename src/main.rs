//! Terminal host for the swipe deck.
//!
//! Reads one command per line from a script file or stdin, translates it into
//! library events, and prints the deck after every command that changes it.
//! Animations complete immediately, so a throw commits as soon as it starts.
//!
//! # Commands
//!
//! - `down X Y`, `move X Y`, `up`, `cancel`: pointer input on the top card
//! - `apply`, `pass`: button decisions
//! - `details`: toggle the description panel
//! - `super`: premium apply
//! - `refresh`: fetch a new batch
//! - `show`: print the deck
//! - `apps [query]`: list applications, optionally fuzzy filtered
//! - `stats`: print profile statistics
//! - `quit`: exit
//!
//! Blank lines and lines starting with `#` are skipped.

use clap::Parser;
use directapply::app::Event;
use directapply::runtime::Session;
use directapply::{initialize, ui, Config, Decision, DeckError};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "directapply",
    about = "Swipe through job postings from the terminal",
    version
)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file of postings, overriding the configured catalog
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Dispatch(Event),
    Show,
    Applications(Option<String>),
    Stats,
    Quit,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DeckError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog_file = Some(catalog);
    }
    config.validate()?;

    directapply::observability::init_tracing(&config);
    let span = tracing::debug_span!("host_run");
    let _guard = span.entered();

    let mut session =
        Session::new(initialize(&config), config.job_source()).with_auto_finish(true);
    session.start();
    print!("{}", ui::render_deck(&session.state().compute_viewmodel()));

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        tracing::debug!(command = ?command, "command parsed");

        match command {
            Command::Dispatch(event) => {
                let should_render = session.dispatch(event);
                for notice in session.take_notices() {
                    println!("** {} **\n{}", notice.title, notice.message);
                }
                if should_render {
                    print!("{}", ui::render_deck(&session.state().compute_viewmodel()));
                }
            }
            Command::Show => print!("{}", ui::render_deck(&session.state().compute_viewmodel())),
            Command::Applications(query) => print!(
                "{}",
                ui::render_applications(&session.state().compute_applications(query.as_deref()))
            ),
            Command::Stats => print!("{}", ui::render_profile(&session.state().profile_stats())),
            Command::Quit => break,
        }
    }

    Ok(())
}

/// Parses one input line. Returns `Ok(None)` for blank and comment lines.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let command = match name {
        "down" => {
            let (x, y) = parse_point(&rest)?;
            Command::Dispatch(Event::PointerDown { x, y })
        }
        "move" => {
            let (x, y) = parse_point(&rest)?;
            Command::Dispatch(Event::PointerMove { x, y })
        }
        "up" => Command::Dispatch(Event::PointerUp),
        "cancel" => Command::Dispatch(Event::PointerCancel),
        "apply" => Command::Dispatch(Event::ForceSwipe(Decision::Apply)),
        "pass" => Command::Dispatch(Event::ForceSwipe(Decision::Pass)),
        "details" => Command::Dispatch(Event::ToggleDetails),
        "super" => Command::Dispatch(Event::SuperApply),
        "refresh" => Command::Dispatch(Event::Refresh),
        "show" => Command::Show,
        "apps" => Command::Applications((!rest.is_empty()).then(|| rest.join(" "))),
        "stats" => Command::Stats,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(Some(command))
}

fn parse_point(args: &[&str]) -> Result<(f64, f64), String> {
    let [x, y] = args else {
        return Err("expected two coordinates: X Y".to_string());
    };
    let x = x.parse::<f64>().map_err(|e| format!("bad x coordinate {x}: {e}"))?;
    let y = y.parse::<f64>().map_err(|e| format!("bad y coordinate {y}: {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_commands_need_two_numbers() {
        assert_eq!(
            parse_command("move 130 -4").unwrap(),
            Some(Command::Dispatch(Event::PointerMove { x: 130.0, y: -4.0 }))
        );
        assert!(parse_command("down 1").is_err());
        assert!(parse_command("down a b").is_err());
    }

    #[test]
    fn apps_query_keeps_spaces() {
        assert_eq!(
            parse_command("apps data sci").unwrap(),
            Some(Command::Applications(Some("data sci".to_string())))
        );
        assert_eq!(parse_command("apps").unwrap(), Some(Command::Applications(None)));
    }

    #[test]
    fn comments_and_unknowns() {
        assert_eq!(parse_command("  # note").unwrap(), None);
        assert!(parse_command("jump").is_err());
    }
}
