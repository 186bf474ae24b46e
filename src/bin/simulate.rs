use std::process;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pacsearch::agents::{Agent, RandomAgent};
use pacsearch::env::Direction;
use pacsearch::game::{layouts, Game, Outcome};
use pacsearch::logging;
use pacsearch::search::State;

#[derive(Parser)]
#[command(
    name = "pacsearch simulator",
    about = "Simulate games of an agent against random ghosts."
)]
struct Opts {
    /// Name of a built-in layout or path to a layout file.
    #[arg(short, long, default_value = "smallClassic")]
    layout: String,
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    /// Games are stopped after this many rounds.
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
    /// Seed for the ghosts and random tie breaking.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
    /// Pacman configuration.
    #[arg(default_value_t)]
    agent: Agent,
}

fn main() {
    logging();

    let Opts {
        layout,
        game_count,
        max_turns,
        seed,
        verbose,
        agent,
    } = Opts::parse();

    let txt = match layouts::load(&layout) {
        Ok(txt) => txt,
        Err(e) => {
            error!("Could not read layout {}: {}", layout, e);
            process::exit(1);
        }
    };
    let Some(game) = Game::parse(&txt) else {
        error!("Invalid layout {}", layout);
        process::exit(1);
    };

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let start = Instant::now();

    let mut wins = 0;
    let mut total_score = 0.0;

    for i in 0..game_count {
        let (outcome, score) = play_game(&agent, game.clone(), max_turns, verbose, &mut rng);
        wins += (outcome == Outcome::Win) as usize;
        total_score += score;
        println!(
            "{}: {} {:?} score={} {}ms",
            "Finish Game".bright_green(),
            i,
            outcome,
            score,
            start.elapsed().as_millis()
        );
    }

    println!(
        "Result: {}/{} average score {:.1}",
        wins,
        game_count,
        total_score / game_count.max(1) as f64
    );
}

fn play_game(
    agent: &Agent,
    mut game: Game,
    max_turns: usize,
    verbose: bool,
    rng: &mut SmallRng,
) -> (Outcome, f64) {
    if verbose {
        println!("init: {:?}", game);
    }

    for turn in 0..max_turns {
        let dir = agent.step_with(&game, rng).unwrap_or(Direction::Stop);
        game.step(0, dir);

        for ghost in 1..game.num_agents() {
            if game.outcome != Outcome::None {
                break;
            }
            if let Some(dir) = RandomAgent.decide_with(&game, ghost, rng) {
                game.step(ghost, dir);
            }
        }

        if verbose {
            println!("{}: {:?}", turn, game);
        }

        if game.outcome != Outcome::None {
            info!("game: {:?} after {} turns", game.outcome, turn);
            break;
        }
    }

    (game.outcome, game.score)
}
