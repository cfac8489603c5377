use crate::error::{Error, Result};
use crate::game::Game;

/// The base trait for any mulligan type
pub trait Mulligan {
  /// The number of cards in an opening hand
  fn hand_size(&self) -> usize;

  /// The maximum number of opening hands to look at before giving up
  fn max_attempts(&self) -> usize;

  /// Returns true if the hand currently in `game` should be kept
  fn keep(&self, game: &Game) -> bool;

  /// Draws opening hands, reshuffling the whole deck between attempts, until one is kept.
  /// Returns the number of attempts it took
  ///
  /// # Errors
  ///
  /// `Error::NoAcceptableHand` if no hand was kept after `max_attempts()`
  fn opening_hand(&self, game: &mut Game) -> Result<usize> {
    for attempt in 1..=self.max_attempts() {
      if attempt > 1 {
        game.reset();
      }
      for _ in 0..self.hand_size() {
        let _ = game.draw();
      }
      if self.keep(game) {
        return Ok(attempt);
      }
      debug!("Mulligan after attempt {}", attempt);
    }
    Err(Error::NoAcceptableHand(self.max_attempts()))
  }
}
