//! Terminal shell for the memory matching game.
//!
//! Renders the board as text, reads human picks as `row col` lines and
//! plays the computer seat automatically.

use std::io::{BufRead, Write};

use clap::Parser;
use memory_chess::{
    Agent, BoardConfig, Color, ComputerAgent, GameConfig, GameResult, GameSnapshot, HumanAgent,
    Phase, PickOutcome, Player, Position, TileView, TurnEngine,
};

#[derive(Parser, Debug)]
#[command(name = "memorychess", about = "Dice-driven memory matching against the computer")]
struct Args {
    /// RNG seed; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles per side of the board
    #[arg(long, default_value_t = 6)]
    grid_size: usize,

    /// Number of palette colors in play (1-6)
    #[arg(long, default_value_t = 6)]
    colors: usize,

    /// Copies of each color on the board
    #[arg(long, default_value_t = 6)]
    tiles_per_color: usize,

    /// Let the computer roll first
    #[arg(long)]
    computer_first: bool,

    /// Keep memory entries for removed tiles
    #[arg(long)]
    keep_stale_memory: bool,

    /// Play the human seat with a memoryless computer agent
    #[arg(long)]
    auto: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let colors = &Color::PALETTE[..args.colors.clamp(1, Color::PALETTE.len())];
    let board = BoardConfig::new(args.grid_size, colors, args.tiles_per_color);
    let starting_player = if args.computer_first {
        Player::Computer
    } else {
        Player::Human
    };
    let config = GameConfig::new(board)
        .with_starting_player(starting_player)
        .with_forget_on_removal(!args.keep_stale_memory);
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut engine = TurnEngine::new(config, seed)?;
    log::info!("seed {seed}");

    let mut human = HumanAgent::new();
    let mut autopilot = ComputerAgent::new();
    let mut computer = ComputerAgent::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&engine.snapshot());

        match engine.phase() {
            Phase::GameOver => break,
            Phase::AwaitingRoll(Player::Human) if !args.auto => {
                let Some(line) = prompt(&mut lines, "press enter to roll (q to quit)")? else {
                    return Ok(());
                };
                if line == "q" {
                    return Ok(());
                }
                println!("you rolled {}", engine.roll()?);
            }
            Phase::AwaitingRoll(player) => {
                println!("{player} rolled {}", engine.roll()?);
            }
            Phase::AwaitingPick {
                player: Player::Human,
                rolled,
            } if !args.auto => {
                let Some(line) = prompt(&mut lines, &format!("find {rolled}: row col"))? else {
                    return Ok(());
                };
                match parse_position(&line) {
                    Some(position) => human.submit(position),
                    None => {
                        println!("expected two numbers, e.g. `2 3`");
                        continue;
                    }
                }
                match engine.request_pick(&mut human) {
                    Ok(Some(outcome)) => report(&outcome),
                    Ok(None) => {
                        if let Some(err) = human.last_rejection() {
                            println!("{err}, pick again");
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Phase::AwaitingPick { player, .. } => {
                let agent: &mut dyn Agent = match player {
                    Player::Human => &mut autopilot,
                    Player::Computer => &mut computer,
                };
                if let Some(outcome) = engine.request_pick(agent)? {
                    report(&outcome);
                }
            }
        }
    }

    let scores = engine.scores();
    println!(
        "game over: {} {} - {} {}",
        Player::Human,
        scores[Player::Human],
        Player::Computer,
        scores[Player::Computer]
    );
    match engine.result() {
        Some(GameResult::Winner(player)) => println!("{player} wins"),
        Some(GameResult::Draw) => println!("draw"),
        None => {}
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    message: &str,
) -> std::io::Result<Option<String>> {
    print!("{message}> ");
    std::io::stdout().flush()?;
    lines.next().transpose().map(|line| line.map(|l| l.trim().to_string()))
}

fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some(Position::new(row, col)),
        _ => None,
    }
}

fn report(outcome: &PickOutcome) {
    let verdict = if outcome.matched { "match!" } else { "miss" };
    println!(
        "{} turned over {} at {}: {} ({verdict})",
        outcome.player, outcome.tile, outcome.position, outcome.revealed
    );
}

fn render(snapshot: &GameSnapshot) {
    println!();
    print!("   ");
    for col in 0..snapshot.grid_size {
        print!("{col:>3}");
    }
    println!();
    for (row, tiles) in snapshot.tiles.chunks(snapshot.grid_size).enumerate() {
        print!("{row:>3}");
        for view in tiles {
            let cell = match view {
                TileView::Hidden => "#".to_string(),
                TileView::Removed => ".".to_string(),
                TileView::Revealed(color) => color.to_string().chars().take(1).collect(),
            };
            print!("{cell:>3}");
        }
        println!();
    }
    println!(
        "{} {} | {} {} | turn {}",
        Player::Human,
        snapshot.scores[Player::Human],
        Player::Computer,
        snapshot.scores[Player::Computer],
        snapshot.turn_number
    );
}
