//! War transcript runner
//!
//! Simulates one game and prints every war as it is resolved.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rust_war::{spawn_game, BattleReport, GameRng, Outcome, PlayerId, WarReport};

/// War card game simulator
#[derive(Parser, Debug)]
#[command(name = "war")]
#[command(about = "Simulate a game of War and print the transcript")]
struct Args {
    /// Game seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Stop after this many wars
    #[arg(long)]
    max_wars: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_war=info".into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting game");

    match run(&args, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "game aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let limit = args.max_wars.unwrap_or(usize::MAX);

    for (index, report) in spawn_game(GameRng::new(seed)).take(limit).enumerate() {
        let report = report?;
        match args.format {
            Format::Text => write_war(&mut out, index + 1, &report)?,
            Format::Json => {
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_war(out: &mut impl Write, number: usize, war: &WarReport) -> io::Result<()> {
    write!(out, "\n\nWar {number}\n==========\n")?;

    for (index, battle) in war.battles.iter().enumerate() {
        write!(out, "\nBattle {}\n----------\n", index + 1)?;
        write_battle(out, battle)?;
    }

    if war.ends_game {
        return match war.winner {
            Outcome::Tie => {
                writeln!(out, "Neither player has enough cards to continue playing")?;
                writeln!(out, "Game Tie!")
            }
            Outcome::Player1Win => {
                writeln!(out, "Player 2 does not have enough cards to continue playing")?;
                writeln!(out, "Game Win! Player 1")
            }
            Outcome::Player2Win => {
                writeln!(out, "Player 1 does not have enough cards to continue playing")?;
                writeln!(out, "Game Win! Player 2")
            }
        };
    }

    if let Some(winner) = war.winner.winner() {
        writeln!(out, "{winner} wins the war!")?;
    }

    writeln!(out, "Total winnings:")?;
    for card in &war.pot {
        writeln!(out, "- {card}")?;
    }

    for player in PlayerId::ALL {
        writeln!(out, "{player} now has {} card(s)", war.remaining[player])?;
    }
    Ok(())
}

fn write_battle(out: &mut impl Write, battle: &BattleReport) -> io::Result<()> {
    for player in PlayerId::ALL {
        writeln!(out, "{player} plays {}", battle.cards_played[player])?;
    }

    match battle.outcome.winner() {
        Some(winner) => writeln!(out, "{winner} wins the battle!"),
        None => writeln!(out, "Battle inconclusive. The war continues..."),
    }
}
