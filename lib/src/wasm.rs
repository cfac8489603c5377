//! # Browser interface
//!
//! Defines a wasm-bindgen entry point that runs a full simulation report
//! for a deck list resolved against the embedded card catalog.
use crate::data::ALL_CARDS;
use crate::deck::Deck;
use crate::error::Error;
use crate::mulligan::MinLands;
use crate::pull::PullPolicy;
use crate::simulation::{
  Observations, PullSweep, Simulation, SimulationConfig, Strategy, SweepPoint,
};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

/// Input format expected from the browser
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
  /// The decklist code
  pub code: String,
  /// The number of games to simulate
  pub runs: usize,
  /// The number of turns per game
  pub turns: usize,
  /// Cast the commander once this much mana is available
  pub cast_commander_on: u32,
  /// Mulligan any opening hand with fewer lands
  pub min_lands: usize,
  /// A replacement pull resolution table
  pub policy: Option<PullPolicy>,
  pub seed: Option<u64>,
  /// Fixed pull counts to sweep, inclusive
  pub sweep_from: usize,
  pub sweep_to: usize,
  pub sweep_runs: usize,
}

/// Output format returned to the browser
#[derive(Debug, Serialize, Deserialize)]
pub struct Output {
  pub deck_size: usize,
  pub land_count: usize,
  pub observations: Observations,
  pub average_hits: f64,
  pub average_pulls: f64,
  pub sweep: Vec<SweepPoint>,
}

impl Default for Input {
  fn default() -> Self {
    let strategy = Strategy::default();
    let mulligan = MinLands::default();
    let sweep = PullSweep::default();
    Self {
      code: String::new(),
      runs: 5000,
      turns: strategy.turns,
      cast_commander_on: strategy.cast_commander_on,
      min_lands: mulligan.min_lands,
      policy: None,
      seed: None,
      sweep_from: *sweep.pulls.start(),
      sweep_to: *sweep.pulls.end(),
      sweep_runs: sweep.run_count,
    }
  }
}

/// Runs a simulation given input
/// Assumes that input deserializes into a valid `Input`, and returns a serialized `Output`
/// # Example
///
///  ```js
///  const input = {code: "36 Swamp\n63 Wily Goblin", runs: 1000};
///  const output = require('grenzo').run(input);
///  console.log(output.average_hits);
///  ```
#[wasm_bindgen]
pub fn run(input: &JsValue) -> JsValue {
  let input: Input = match input.into_serde() {
    Err(e) => {
      return JsValue::from_str(&format!("Error deserializing simulation inputs: {:#?}", e));
    }
    Ok(v) => v,
  };
  let result = match run_impl(&input) {
    Err(e) => {
      return JsValue::from_str(&format!("Error running simulation for input: {}", e));
    }
    Ok(v) => v,
  };
  JsValue::from_serde(&result).expect("this can't fail")
}

pub fn run_impl(input: &Input) -> Result<Output, Error> {
  let deck = Deck::from_list(&ALL_CARDS, &input.code)?;
  let policy = input.policy.clone().unwrap_or_default();
  let mulligan = MinLands::new(input.min_lands);
  let sim = Simulation::from_config(&SimulationConfig {
    run_count: input.runs,
    deck: &deck,
    mulligan: &mulligan,
    policy: &policy,
    strategy: Strategy::new(input.cast_commander_on, input.turns),
    seed: input.seed,
  })?;
  let observations = sim.observations();
  let sweep = if input.sweep_runs == 0 || input.sweep_from > input.sweep_to {
    Vec::new()
  } else {
    PullSweep {
      pulls: input.sweep_from..=input.sweep_to,
      run_count: input.sweep_runs,
      seed: input.seed,
      ..PullSweep::default()
    }
    .run(&deck, &policy)
  };
  Ok(Output {
    deck_size: deck.len(),
    land_count: deck.count(|c| c.is_land()),
    observations,
    average_hits: observations.avg_hits(),
    average_pulls: observations.avg_pulls(),
    sweep,
  })
}

#[cfg(test)]
mod tests {
  use crate::wasm::*;

  #[test]
  fn run_impl_sample_deck() {
    let input = Input {
      code: include_str!("decks/grenzo").to_string(),
      runs: 200,
      seed: Some(3),
      sweep_runs: 100,
      ..Input::default()
    };
    let output = run_impl(&input).unwrap();
    assert_eq!(output.deck_size, 99);
    assert_eq!(output.land_count, 36);
    assert_eq!(output.observations.total_runs, 200);
    assert_eq!(output.sweep.len(), 6);
    assert_eq!(output.sweep[0].pulls, 5);
    assert!(output.average_hits <= output.average_pulls);
  }

  #[test]
  fn run_impl_bad_card_name() {
    let input = Input {
      code: "40 Swamp\n1 Not A Card".to_string(),
      ..Input::default()
    };
    match run_impl(&input) {
      Err(Error::UnknownCard(name)) => assert_eq!(name, "Not A Card"),
      other => panic!("unexpected result {:?}", other.map(|o| o.deck_size)),
    }
  }

  #[test]
  fn run_impl_without_sweep() {
    let input = Input {
      code: "40 Swamp\n20 Blood Artist".to_string(),
      runs: 10,
      sweep_runs: 0,
      seed: Some(0),
      ..Input::default()
    };
    let output = run_impl(&input).unwrap();
    assert!(output.sweep.is_empty());
  }

  #[test]
  fn run_impl_zero_runs() {
    let input = Input {
      code: "40 Swamp\n20 Blood Artist".to_string(),
      runs: 0,
      sweep_runs: 0,
      ..Input::default()
    };
    let output = run_impl(&input).unwrap();
    assert_eq!(output.average_hits, 0.0);
    assert_eq!(output.average_pulls, 0.0);
  }

  #[test]
  fn input_defaults_from_partial_json() {
    let input: Input = serde_json::from_str(r#"{"code": "60 Swamp"}"#).unwrap();
    assert_eq!(input.runs, 5000);
    assert_eq!(input.turns, 8);
    assert_eq!(input.cast_commander_on, 3);
    assert_eq!(input.min_lands, 3);
    assert_eq!(input.sweep_from, 5);
    assert_eq!(input.sweep_to, 10);
  }
}
