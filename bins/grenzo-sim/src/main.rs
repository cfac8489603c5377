#[macro_use]
extern crate log;
extern crate grenzo;

use clap::Parser;
use grenzo::collection::Collection;
use grenzo::data::ALL_CARDS;
use grenzo::deck::Deck;
use grenzo::mulligan::MinLands;
use grenzo::pull::PullPolicy;
use grenzo::simulation::{PullSweep, Simulation, SimulationConfig, Strategy};
use std::fs;
use std::path::PathBuf;

/// Simulates games of a Grenzo, Dungeon Warden deck and reports the average number of pull hits
#[derive(Debug, Parser)]
#[command(name = "grenzo-sim", version)]
struct Args {
  /// Deck list file, one "<count> <card name>" per line
  deck: PathBuf,

  /// Card catalog, Scryfall JSON (.json) or a scryfall2grenzo output file.
  /// Defaults to the built in catalog
  #[arg(long)]
  cards: Option<PathBuf>,

  /// JSON pull resolution table replacing the built in one
  #[arg(long)]
  policy: Option<PathBuf>,

  /// Number of games to simulate
  #[arg(long, default_value_t = 5000)]
  runs: usize,

  /// Number of turns per game
  #[arg(long, default_value_t = 8)]
  turns: usize,

  /// Cast the commander once this much mana is available
  #[arg(long, default_value_t = 3)]
  cast_on: u32,

  /// Mulligan opening hands with fewer lands
  #[arg(long, default_value_t = 3)]
  min_lands: usize,

  /// Opening hands to try before giving up on a game
  #[arg(long, default_value_t = 1000)]
  max_mulligans: usize,

  /// Seed for reproducible runs
  #[arg(long)]
  seed: Option<u64>,

  /// Smallest fixed pull count in the sweep
  #[arg(long, default_value_t = 5)]
  sweep_from: usize,

  /// Largest fixed pull count in the sweep
  #[arg(long, default_value_t = 10)]
  sweep_to: usize,

  /// Games per fixed pull count, 0 skips the sweep
  #[arg(long, default_value_t = 10000)]
  sweep_runs: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let args = Args::parse();

  let collection = match &args.cards {
    Some(path) => Collection::open(path)?,
    None => ALL_CARDS.clone(),
  };
  info!("Catalog holds {} cards", collection.len());
  let code = fs::read_to_string(&args.deck)?;
  let deck = Deck::from_list(&collection, &code)?;
  info!("Deck holds {} cards", deck.len());
  let policy = match &args.policy {
    Some(path) => PullPolicy::from_json(&fs::read_to_string(path)?)?,
    None => PullPolicy::grenzo(),
  };
  let mut mulligan = MinLands::new(args.min_lands);
  mulligan.max_attempts = args.max_mulligans;

  println!(
    "Simulate {} games, cast Grenzo on {}, play to turn {}.",
    args.runs, args.cast_on, args.turns
  );
  let sim = Simulation::from_config(&SimulationConfig {
    run_count: args.runs,
    deck: &deck,
    mulligan: &mulligan,
    policy: &policy,
    strategy: Strategy::new(args.cast_on, args.turns),
    seed: args.seed,
  })?;
  let o = sim.observations();
  println!("Average hits per game: {}", o.avg_hits());
  println!("Average pulls per game: {}", o.avg_pulls());
  if o.pulls > 0 {
    println!("Hit percentage: {}", o.hit_rate() * 100.0);
  }
  if o.deck_outs > 0 {
    println!("Games lost to an empty library: {}", o.deck_outs);
  }

  if args.sweep_runs > 0 && args.sweep_from <= args.sweep_to {
    let sweep = PullSweep {
      pulls: args.sweep_from..=args.sweep_to,
      run_count: args.sweep_runs,
      seed: args.seed,
      ..PullSweep::default()
    };
    for point in sweep.run(&deck, &policy) {
      println!("Average hits with {} pulls: {}", point.pulls, point.avg_hits());
    }
  }
  Ok(())
}
