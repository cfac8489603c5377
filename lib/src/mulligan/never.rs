use crate::game::Game;
use crate::mulligan::Mulligan;

// Hardcoded starting handsize, consider allowing users to specify
const STARTING_HAND_SIZE: usize = 7;

/// Never represents the mulligan strategy wherein the
/// player always keeps their initially drawn starting hand
#[derive(Debug, Serialize, Deserialize)]
pub struct Never {
  pub starting_hand_size: usize,
}

impl Never {
  pub fn new() -> Self {
    Self {
      starting_hand_size: STARTING_HAND_SIZE,
    }
  }

  pub fn never() -> Self {
    Self::new()
  }
}

impl Default for Never {
  fn default() -> Self {
    Self::new()
  }
}

impl Mulligan for Never {
  fn hand_size(&self) -> usize {
    self.starting_hand_size
  }

  fn max_attempts(&self) -> usize {
    1
  }

  fn keep(&self, _game: &Game) -> bool {
    true
  }
}
