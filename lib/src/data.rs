use crate::collection::Collection;
use crate::error::Result;

/// Returns a new collection of all cards from data/cards.json
pub fn all_cards() -> Result<Collection> {
  let s = include_str!("../../data/cards.json");
  Collection::from_json_str(s)
}

lazy_static! {
  pub static ref ALL_CARDS: Collection = all_cards().expect("all_cards() failed");
}
