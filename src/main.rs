//! Tablut console host
//!
//! A thin text front end over [`tablut::game::GameSession`]: moves are typed in algebraic
//! form (`e2 e4`), the board is printed after every change.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tablut::core::{load_record, load_rules, rules_to_json, save_record};
use tablut::game::{BranchPolicy, GameSession};
use tablut_engine::{Coord, Preset, Transition};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Tablut - play and review games of Tablut and Brandubh
#[derive(Parser, Debug)]
#[command(name = "tablut")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game, reading moves from stdin
    Play {
        /// Named preset: tablut or brandubh
        #[arg(short, long, default_value = "tablut")]
        preset: String,

        /// Rules JSON file (overrides the preset's rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Starting position in notation, instead of the preset's
        #[arg(long)]
        position: Option<String>,

        /// Board edge for --position (defaults to the preset's)
        #[arg(long, requires = "position")]
        size: Option<usize>,
    },

    /// Load a saved game, verify it and print the final position
    Replay {
        /// Saved game JSON file
        file: PathBuf,
    },

    /// Print a rules file template
    Rules {
        /// Named preset whose rules to print
        #[arg(short, long, default_value = "tablut")]
        preset: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Play {
            preset,
            rules,
            position,
            size,
        } => play(&preset, rules.as_deref(), position.as_deref(), size),
        Commands::Replay { file } => replay(&file),
        Commands::Rules { preset } => {
            let preset = find_preset(&preset)?;
            println!("{}", rules_to_json(&preset.rules)?);
            Ok(())
        }
    }
}

fn find_preset(name: &str) -> Result<Preset> {
    Preset::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = Preset::all().iter().map(|p| p.name).collect();
        anyhow!("unknown preset '{}', expected one of: {}", name, known.join(", "))
    })
}

fn play(
    preset_name: &str,
    rules_path: Option<&Path>,
    position: Option<&str>,
    size: Option<usize>,
) -> Result<()> {
    let preset = find_preset(preset_name)?;
    let rules = load_rules(rules_path, preset.rules).context("loading rules")?;

    let mut session = match position {
        Some(notation) => {
            let size = size.unwrap_or(preset.size);
            GameSession::new(notation, size, rules)?
        }
        None => GameSession::new(preset.position, preset.size, rules)?,
    };

    print!("{}", session.board());
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} to move> ", session.active_side());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match Command::parse(&line, session.board().size()) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(e) = run_command(&mut session, command) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("error: {}", e),
        }
    }

    info!("[GAME] Session closed at ply {}", session.history().current());
    Ok(())
}

fn run_command(session: &mut GameSession, command: Command) -> Result<()> {
    let size = session.board().size();
    match command {
        Command::Move { origin, target, truncate } => {
            let policy = if truncate {
                BranchPolicy::Truncate
            } else {
                BranchPolicy::Reject
            };
            let transition = session.request_move_with(origin, target, policy)?;
            print_transition(&transition, size);
            print!("{}", session.board());
            if session.is_terminal() {
                println!("{}", session.outcome());
            }
        }
        Command::Undo => {
            let transition = session.undo()?;
            println!(
                "undid {} {}",
                transition.origin.to_algebraic(size),
                transition.target.to_algebraic(size)
            );
            print!("{}", session.board());
        }
        Command::Redo => {
            let transition = session.redo()?;
            print_transition(&transition, size);
            print!("{}", session.board());
        }
        Command::Board => {
            print!("{}", session.board());
            println!("{}", session.position_notation());
        }
        Command::Moves(origin) => {
            let targets: Vec<String> = session
                .legal_targets(origin)
                .into_iter()
                .map(|c| c.to_algebraic(size))
                .collect();
            if targets.is_empty() {
                println!("no moves from {}", origin.to_algebraic(size));
            } else {
                println!("{}", targets.join(" "));
            }
        }
        Command::Save(path) => {
            save_record(&path, &session.to_record())?;
            println!("saved to {}", path.display());
        }
        Command::Help => print_help(),
        Command::Quit => {}
    }
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let record = load_record(path).with_context(|| format!("reading {}", path.display()))?;
    let session = GameSession::from_record(&record).map_err(|e| {
        error!("[RECORD] {} does not replay: {}", path.display(), e);
        e
    })?;

    print!("{}", session.board());
    println!("{}", session.position_notation());
    println!(
        "ply {} of {}, {} to move",
        session.history().current(),
        session.history().len(),
        session.active_side()
    );
    println!("{}", session.outcome());
    Ok(())
}

fn print_transition(transition: &Transition, size: usize) {
    let mut line = format!(
        "{} {} -> {}",
        transition.side(),
        transition.origin.to_algebraic(size),
        transition.target.to_algebraic(size)
    );
    for captured in &transition.captured_pieces {
        line.push_str(&format!(" x{}", captured.coord.to_algebraic(size)));
    }
    println!("{}", line);
}

fn print_help() {
    println!("commands: <from> <to> [!]  undo  redo  board  moves <sq>  save <file>  help  quit");
    println!("          append ! to a move to discard undone moves");
}

/// One line of console input
#[derive(Debug, PartialEq)]
enum Command {
    Move {
        origin: Coord,
        target: Coord,
        truncate: bool,
    },
    Undo,
    Redo,
    Board,
    Moves(Coord),
    Save(PathBuf),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str, size: usize) -> Result<Command> {
        let square = |s: &str| {
            Coord::from_algebraic(s, size).ok_or_else(|| anyhow!("'{}' is not a square", s))
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["undo"] => Command::Undo,
            ["redo"] => Command::Redo,
            ["board"] => Command::Board,
            ["help"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            ["moves", sq] => Command::Moves(square(*sq)?),
            ["save", file] => Command::Save(PathBuf::from(*file)),
            [from, to] => Command::Move {
                origin: square(*from)?,
                target: square(*to)?,
                truncate: false,
            },
            [from, to, "!"] => Command::Move {
                origin: square(*from)?,
                target: square(*to)?,
                truncate: true,
            },
            [] => Command::Help,
            _ => bail!("unrecognised command '{}'", line.trim()),
        };
        Ok(command)
    }
}
