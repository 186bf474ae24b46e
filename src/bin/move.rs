use std::process;

use clap::Parser;
use log::{error, info};

use pacsearch::agents::Agent;
use pacsearch::game::{layouts, Game};
use pacsearch::logging;

#[derive(Parser)]
#[command(name = "pacsearch move", about = "Decide the next move of pacman.")]
struct Opts {
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
    /// Name of a built-in layout or path to a layout file.
    layout: String,
}

fn main() {
    logging();

    let Opts { config, layout } = Opts::parse();

    let game = match layouts::load(&layout).map(|txt| Game::parse(&txt)) {
        Ok(Some(game)) => game,
        Ok(None) => {
            error!("Invalid layout {}", layout);
            process::exit(1);
        }
        Err(e) => {
            error!("Could not read layout {}: {}", layout, e);
            process::exit(1);
        }
    };
    info!("{:?}", game);

    let step = config.step(&game);

    info!("Step: {:?}", step);
}
