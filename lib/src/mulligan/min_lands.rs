use crate::card::Zone;
use crate::game::Game;
use crate::mulligan::Mulligan;

const STARTING_HAND_SIZE: usize = 7;
const MIN_LANDS: usize = 3;
const MAX_ATTEMPTS: usize = 1000;

/// MinLands keeps any opening hand with at least `min_lands` lands,
/// and otherwise reshuffles and draws a brand new hand of the same size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinLands {
  pub starting_hand_size: usize,
  pub min_lands: usize,
  /// Opening hands to look at before giving up on the game
  pub max_attempts: usize,
}

impl MinLands {
  pub fn new(min_lands: usize) -> Self {
    Self {
      starting_hand_size: STARTING_HAND_SIZE,
      min_lands,
      max_attempts: MAX_ATTEMPTS,
    }
  }
}

impl Default for MinLands {
  fn default() -> Self {
    Self::new(MIN_LANDS)
  }
}

impl Mulligan for MinLands {
  fn hand_size(&self) -> usize {
    self.starting_hand_size
  }

  fn max_attempts(&self) -> usize {
    self.max_attempts
  }

  fn keep(&self, game: &Game) -> bool {
    game.land_count(Zone::Hand) >= self.min_lands
  }
}
