//! # Turn loop driver and simulation statistics
use crate::deck::Deck;
use crate::error::Result;
use crate::game::{Game, Pull};
use crate::mulligan::Mulligan;
use crate::pull::PullPolicy;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Spreads per game seeds apart so neighbouring games do not share streams
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A card that, once cast from hand, lowers the mana cost of every pull
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReducer {
  pub name: String,
  pub pull_cost: u32,
}

/// How the turn loop plays the deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
  /// The number of turns to play
  pub turns: usize,
  /// The commander is cast as soon as the mana pool reaches this amount
  pub cast_commander_on: u32,
  /// The mana cost of a single pull
  pub pull_cost: u32,
  /// Cards cast from hand whenever affordable, each lowering the pull cost
  #[serde(default)]
  pub cost_reducers: Vec<CostReducer>,
}

impl Strategy {
  pub fn new(cast_commander_on: u32, turns: usize) -> Self {
    Self {
      cast_commander_on,
      turns,
      ..Self::default()
    }
  }
}

impl Default for Strategy {
  fn default() -> Self {
    Self {
      turns: 8,
      cast_commander_on: 3,
      pull_cost: 2,
      cost_reducers: vec![CostReducer {
        name: "Heartstone".to_string(),
        pull_cost: 1,
      }],
    }
  }
}

/// The counters of one finished game
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
  pub pulls: usize,
  pub hits: usize,
  pub turns: usize,
  /// Opening hands thrown away before one was kept
  pub mulligans: usize,
  pub decked_out: bool,
}

/// Plays one game: finds an opening hand, then runs `strategy.turns` turns
///
/// # Errors
///
/// `Error::NoAcceptableHand` if the mulligan strategy never keeps a hand
pub fn simulate_game<M: Mulligan>(
  game: &mut Game,
  mulligan: &M,
  strategy: &Strategy,
) -> Result<GameResult> {
  let attempts = mulligan.opening_hand(game)?;
  let mut pull_cost = strategy.pull_cost;
  for _ in 0..strategy.turns {
    game.turn += 1;
    game.untap();
    let _ = game.draw();
    game.play_land();
    game.tap_for_mana();

    for reducer in &strategy.cost_reducers {
      while game.cast(&reducer.name) {
        pull_cost = std::cmp::min(pull_cost, reducer.pull_cost);
      }
    }

    if game.commander_in_play {
      while game.library_len() > 0 && game.spend(pull_cost) {
        if let Pull::DeckOut = game.pull() {
          break;
        }
      }
    } else {
      let _ = game.cast_commander(strategy.cast_commander_on);
    }
  }
  let result = GameResult {
    pulls: game.pulls(),
    hits: game.hits(),
    turns: game.turn,
    mulligans: attempts - 1,
    decked_out: game.decked_out(),
  };
  debug!("{:?}", result);
  Ok(result)
}

/// Returns the seed of game number `index` in a run seeded with `base`
pub fn game_seed(base: u64, index: usize) -> u64 {
  base.wrapping_add((index as u64).wrapping_mul(SEED_STRIDE))
}

fn base_seed(seed: Option<u64>) -> u64 {
  seed.unwrap_or_else(|| SmallRng::from_entropy().gen())
}

pub struct SimulationConfig<'a, 'b, M: Mulligan> {
  pub run_count: usize,
  pub deck: &'a Deck,
  pub mulligan: &'b M,
  pub policy: &'a PullPolicy,
  pub strategy: Strategy,
  /// Fixes the sequence of games, drawn from entropy when `None`
  pub seed: Option<u64>,
}

#[derive(Debug, Default)]
pub struct Simulation {
  pub games: Vec<GameResult>,
  pub seed: u64,
}

#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Observations {
  pub pulls: usize,
  pub hits: usize,
  pub deck_outs: usize,
  pub mulligans: usize,
  pub total_runs: usize,
}

impl Observations {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn avg_hits(&self) -> f64 {
    ratio(self.hits, self.total_runs)
  }

  pub fn avg_pulls(&self) -> f64 {
    ratio(self.pulls, self.total_runs)
  }

  /// The fraction of pulls that hit
  pub fn hit_rate(&self) -> f64 {
    ratio(self.hits, self.pulls)
  }
}

/// `count / total`, or 0 when nothing was counted
fn ratio(count: usize, total: usize) -> f64 {
  if total == 0 {
    0.0
  } else {
    count as f64 / total as f64
  }
}

impl Simulation {
  /// Plays `config.run_count` independent games in parallel
  pub fn from_config<M: Mulligan + Sync>(config: &SimulationConfig<M>) -> Result<Self> {
    let seed = base_seed(config.seed);
    debug!(
      "Simulating {} games with base seed {}",
      config.run_count, seed
    );
    let games = (0..config.run_count)
      .into_par_iter()
      .map(|i| {
        let mut game = Game::from_seed(config.deck.flatten(), config.policy, game_seed(seed, i));
        simulate_game(&mut game, config.mulligan, &config.strategy)
      })
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { games, seed })
  }

  pub fn observations(&self) -> Observations {
    let mut observations = Observations::new();
    observations.total_runs = self.games.len();
    for game in &self.games {
      observations.pulls += game.pulls;
      observations.hits += game.hits;
      observations.mulligans += game.mulligans;
      if game.decked_out {
        observations.deck_outs += 1;
      }
    }
    observations
  }
}

/// Measures hits for a fixed number of pulls: every run shuffles a fresh deck, pulls
/// `k` times, then pulls once more for every `bonus_pull_cost` mana the pulls produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullSweep {
  pub pulls: RangeInclusive<usize>,
  pub run_count: usize,
  pub bonus_pull_cost: u32,
  pub seed: Option<u64>,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
  pub pulls: usize,
  pub hits: usize,
  pub total_runs: usize,
}

impl SweepPoint {
  pub fn avg_hits(&self) -> f64 {
    ratio(self.hits, self.total_runs)
  }
}

impl Default for PullSweep {
  fn default() -> Self {
    Self {
      pulls: 5..=10,
      run_count: 10000,
      bonus_pull_cost: 2,
      seed: None,
    }
  }
}

impl PullSweep {
  pub fn run(&self, deck: &Deck, policy: &PullPolicy) -> Vec<SweepPoint> {
    let seed = base_seed(self.seed);
    self
      .pulls
      .clone()
      .map(|k| {
        let hits: usize = (0..self.run_count)
          .into_par_iter()
          .map(|i| {
            let mut game = Game::from_seed(deck.flatten(), policy, game_seed(seed, i));
            self.hits_for(&mut game, k)
          })
          .sum();
        SweepPoint {
          pulls: k,
          hits,
          total_runs: self.run_count,
        }
      })
      .collect()
  }

  fn hits_for(&self, game: &mut Game, pulls: usize) -> usize {
    for _ in 0..pulls {
      if let Pull::DeckOut = game.pull() {
        return game.hits();
      }
    }
    let bonus = match self.bonus_pull_cost {
      0 => 0,
      cost => game.mana_pool / cost,
    };
    for _ in 0..bonus {
      if let Pull::DeckOut = game.pull() {
        break;
      }
    }
    game.hits()
  }
}

#[cfg(test)]
mod tests {
  use crate::card::*;
  use crate::game::Game;
  use crate::mulligan::{MinLands, Never};
  use crate::pull::PullPolicy;
  use crate::simulation::*;

  fn grenzo_deck() -> Deck {
    decklist!(include_str!("decks/grenzo"))
  }

  #[test]
  fn zero_turns_means_zero_pulls() {
    let deck = grenzo_deck();
    let policy = PullPolicy::grenzo();
    let strategy = Strategy::new(3, 0);
    for seed in 0..20 {
      let mut game = Game::from_seed(deck.flatten(), &policy, seed);
      let result = simulate_game(&mut game, &MinLands::default(), &strategy).unwrap();
      assert_eq!(result.pulls, 0);
      assert_eq!(result.hits, 0);
      assert_eq!(result.turns, 0);
    }
  }

  #[test]
  fn commander_is_cast_before_pulling() {
    // One new land per turn: 1 mana on turn 1, 1 + 2 on turn 2
    let deck = decklist!("60 Swamp");
    let policy = PullPolicy::grenzo();
    let mut game = Game::from_seed(deck.flatten(), &policy, 0);
    let result = simulate_game(&mut game, &Never::never(), &Strategy::new(3, 2)).unwrap();
    assert!(game.commander_in_play);
    assert_eq!(result.pulls, 0);
    assert_eq!(game.mana_pool, 0);
  }

  #[test]
  fn land_only_deck_pull_count() {
    // Turn 2 casts the commander. Turn 3: 3 mana, 1 pull, 1 floating.
    // Turn 4: 5 mana, 2 pulls, 1 floating. Turn 5: 6 mana, 3 pulls
    let deck = decklist!("60 Swamp");
    let policy = PullPolicy::grenzo();
    let mut game = Game::from_seed(deck.flatten(), &policy, 0);
    let result = simulate_game(&mut game, &Never::never(), &Strategy::new(3, 5)).unwrap();
    assert_eq!(result.pulls, 6);
    assert_eq!(result.hits, 0);
    assert_eq!(game.zone_count(Zone::Graveyard), 6);
    assert_eq!(game.mana_pool, 0);
  }

  #[test]
  fn hits_never_exceed_pulls() {
    let deck = decklist!(
      "
      30 Swamp
      30 Blood Artist
      "
    );
    let policy = PullPolicy::grenzo();
    let result = Simulation::from_config(&SimulationConfig {
      run_count: 50,
      deck: &deck,
      mulligan: &MinLands::default(),
      policy: &policy,
      strategy: Strategy::default(),
      seed: Some(1),
    })
    .unwrap();
    for game in &result.games {
      assert!(game.hits <= game.pulls);
      assert_eq!(game.turns, 8);
    }
    let observations = result.observations();
    assert_eq!(observations.total_runs, 50);
    assert!(observations.pulls > 0);
  }

  #[test]
  fn heartstone_lowers_pull_cost() {
    let deck = decklist!(
      "
      59 Swamp
      1 Heartstone
      "
    );
    let policy = PullPolicy::grenzo();
    let seed = (0..1000)
      .find(|seed| {
        let game = Game::from_seed(deck.flatten(), &policy, *seed);
        let in_opening_hand = game
          .zone(Zone::Library)
          .take(7)
          .any(|c| c.name == "Heartstone");
        in_opening_hand
      })
      .unwrap();

    // Turn 2 casts Heartstone, turn 3 the commander, then every mana is a pull
    let mut game = Game::from_seed(deck.flatten(), &policy, seed);
    let result = simulate_game(&mut game, &Never::never(), &Strategy::default()).unwrap();
    assert_eq!(result.pulls, 4 + 5 + 6 + 7 + 8);
    assert_eq!(game.zone(Zone::Battlefield).filter(|c| !c.is_land()).count(), 1);

    let no_reducers = Strategy {
      cost_reducers: vec![],
      ..Strategy::default()
    };
    let mut game = Game::from_seed(deck.flatten(), &policy, seed);
    let result = simulate_game(&mut game, &Never::never(), &no_reducers).unwrap();
    assert_eq!(result.pulls, 1 + 2 + 3 + 3 + 3 + 4);
  }

  #[test]
  fn same_seed_same_simulation() {
    let deck = grenzo_deck();
    let policy = PullPolicy::grenzo();
    let config = SimulationConfig {
      run_count: 64,
      deck: &deck,
      mulligan: &MinLands::default(),
      policy: &policy,
      strategy: Strategy::default(),
      seed: Some(1234),
    };
    let a = Simulation::from_config(&config).unwrap();
    let b = Simulation::from_config(&config).unwrap();
    assert_eq!(a.games, b.games);
    assert_eq!(a.seed, 1234);
  }

  #[test]
  fn grenzo_deck_observations() {
    let deck = grenzo_deck();
    let policy = PullPolicy::grenzo();
    let sim = Simulation::from_config(&SimulationConfig {
      run_count: 500,
      deck: &deck,
      mulligan: &MinLands::default(),
      policy: &policy,
      strategy: Strategy::default(),
      seed: Some(99),
    })
    .unwrap();
    let o = sim.observations();
    assert_eq!(o.total_runs, 500);
    assert_eq!(o.deck_outs, 0);
    assert!(o.hits <= o.pulls);
    // 36 lands and 8 turns always leave mana for some pulls
    assert!(o.avg_pulls() > 1.0);
    assert!(o.hit_rate() > 0.0 && o.hit_rate() < 1.0);
  }

  #[test]
  fn unkeepable_deck_propagates_the_error() {
    let deck = decklist!("60 Wily Goblin");
    let policy = PullPolicy::grenzo();
    let mut mulligan = MinLands::default();
    mulligan.max_attempts = 3;
    let result = Simulation::from_config(&SimulationConfig {
      run_count: 4,
      deck: &deck,
      mulligan: &mulligan,
      policy: &policy,
      strategy: Strategy::default(),
      seed: Some(0),
    });
    assert!(result.is_err());
  }

  #[test]
  fn short_deck_decks_out_without_panicking() {
    let deck = decklist!("10 Swamp");
    let policy = PullPolicy::grenzo();
    let mut game = Game::from_seed(deck.flatten(), &policy, 0);
    let result = simulate_game(&mut game, &MinLands::default(), &Strategy::default()).unwrap();
    assert!(result.decked_out);
    assert_eq!(result.turns, 8);
    assert_eq!(game.library_len(), 0);
  }

  #[test]
  fn sweep_all_misses() {
    let deck = decklist!("60 Swamp");
    let policy = PullPolicy::grenzo();
    let sweep = PullSweep {
      pulls: 5..=7,
      run_count: 10,
      bonus_pull_cost: 2,
      seed: Some(0),
    };
    let points = sweep.run(&deck, &policy);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].pulls, 5);
    assert!(points.iter().all(|p| p.hits == 0 && p.total_runs == 10));
  }

  #[test]
  fn sweep_bonus_pulls_use_produced_mana() {
    // Every pull is a Workhorse: 5 pulls make 20 mana, for 10 more pulls
    let deck = decklist!("60 Workhorse");
    let policy = PullPolicy::grenzo();
    let sweep = PullSweep {
      pulls: 5..=5,
      run_count: 4,
      bonus_pull_cost: 2,
      seed: Some(0),
    };
    let points = sweep.run(&deck, &policy);
    assert_eq!(points[0].hits, 4 * 15);
    assert_eq!(points[0].avg_hits(), 15.0);
  }

  #[test]
  fn sweep_stops_at_empty_library() {
    let deck = decklist!("3 Workhorse");
    let policy = PullPolicy::grenzo();
    let sweep = PullSweep {
      pulls: 5..=5,
      run_count: 1,
      bonus_pull_cost: 2,
      seed: Some(0),
    };
    assert_eq!(sweep.run(&deck, &policy)[0].hits, 3);
  }

  #[test]
  fn zero_runs_average_to_zero() {
    let deck = grenzo_deck();
    let policy = PullPolicy::grenzo();
    let sim = Simulation::from_config(&SimulationConfig {
      run_count: 0,
      deck: &deck,
      mulligan: &Never::default(),
      policy: &policy,
      strategy: Strategy::default(),
      seed: Some(0),
    })
    .unwrap();
    let o = sim.observations();
    assert_eq!(o.total_runs, 0);
    assert_eq!(o.avg_hits(), 0.0);
    assert_eq!(o.avg_pulls(), 0.0);
    assert_eq!(o.hit_rate(), 0.0);
    let point = SweepPoint::default();
    assert_eq!(point.avg_hits(), 0.0);
  }

  #[test]
  fn game_seeds_differ() {
    assert_ne!(game_seed(0, 0), game_seed(0, 1));
    assert_eq!(game_seed(7, 0), 7);
  }
}
