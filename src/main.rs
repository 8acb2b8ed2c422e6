//! # Cluedo Main Entry Point
//!
//! Sets up a seeded session from the command line and prints the resulting
//! table, optionally walking a few automatic turns.

use clap::Parser;
use cluedo::config::DEFAULT_SEED;
use cluedo::{
    CluedoError, CluedoResult, Direction, GameWorld, Occupant, SetupConfig, Step, TurnPhase,
};
use log::{info, LevelFilter};

/// Command line arguments for the Cluedo setup engine.
#[derive(Parser, Debug)]
#[command(name = "cluedo")]
#[command(about = "Deterministic setup and movement engine for a deduction board game")]
#[command(version)]
struct Args {
    /// Random seed for setup and dice
    #[arg(short, long)]
    seed: Option<u64>,

    /// Participant name, in seat order (repeat for each player)
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Number of automatic turns to play after setup
    #[arg(long, default_value_t = 0)]
    turns: u32,

    /// Print the public state as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> CluedoResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Cluedo v{}", cluedo::VERSION);

    let config = if args.players.is_empty() {
        SetupConfig {
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            ..SetupConfig::default()
        }
    } else {
        SetupConfig::new(args.seed.unwrap_or(DEFAULT_SEED), args.players.iter())
    };

    let mut world = GameWorld::setup(&config)?;

    for _ in 0..args.turns {
        if world.is_game_ended() {
            break;
        }
        play_turn(&mut world)?;
    }

    if args.json {
        println!("{}", world.snapshot_json()?);
    } else {
        print_summary(&world);
    }

    Ok(())
}

/// Initializes logging based on the specified level.
fn initialize_logging(log_level: &str) -> CluedoResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => {
            return Err(CluedoError::Configuration(format!(
                "unknown log level: {}",
                other
            )))
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();

    Ok(())
}

/// Rolls for the next seat and walks the first legal direction until the
/// budget is spent or the token is stuck.
fn play_turn(world: &mut GameWorld) -> CluedoResult<()> {
    let seat = world.advance_turn()?;
    let moves = world.roll_moves();
    let mut steps = world.begin_turn(seat, moves)?;

    while world.participant(seat).map(|p| p.phase()) == Some(TurnPhase::Moving) {
        let step = match Direction::cardinal()
            .into_iter()
            .find(|&direction| steps.get(direction).is_some())
        {
            Some(direction) => Step::Walk(direction),
            None if steps.shortcut.is_some() => Step::Shortcut,
            None => break,
        };
        steps = world.move_player(seat, step)?.legal_next_steps;
    }

    world.end_turn(seat)
}

fn print_summary(world: &GameWorld) {
    println!("Seed {} (turn {})", world.seed(), world.turn_number());
    println!();

    println!("Seats:");
    for (seat, occupant) in world.occupants().iter().enumerate() {
        match occupant {
            Occupant::Human(participant) => {
                let hand: Vec<&str> = participant.hand().iter().map(|card| card.name()).collect();
                let position = participant
                    .position()
                    .map(|pos| pos.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("  {}. {} at {}", seat, participant, position);
                println!("     hand: {}", hand.join(", "));
            }
            Occupant::Unassigned(placeholder) => {
                let room = world
                    .room_of_identity(placeholder.identity)
                    .map(|room| room.name())
                    .unwrap_or("-");
                println!("  {}. {} (unplayed) in the {}", seat, placeholder.identity, room);
            }
        }
    }
    println!();

    println!("Rooms:");
    for room in world.rooms() {
        let weapon = world
            .weapon_in(room.id)
            .map(|weapon| weapon.name())
            .unwrap_or("-");
        let identities: Vec<&str> = world
            .identities_in(room.id)
            .into_iter()
            .map(|identity| identity.name())
            .collect();
        println!("  {}: weapon {}, present [{}]", room, weapon, identities.join(", "));
    }
}
