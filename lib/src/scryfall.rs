use crate::card::{Card, Zone};
use std::collections::HashMap;

/// A Scryfall card object, see [https://scryfall.com/docs/api/cards](https://scryfall.com/docs/api/cards)
///
/// Only the fields listed here are read. Every other Scryfall field is skipped
/// during deserialization rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
  pub name: String,
  #[serde(default)]
  pub mana_cost: String,
  #[serde(default)]
  pub type_line: String,
  #[serde(default)]
  pub cmc: f32,
  #[serde(default)]
  pub legalities: HashMap<String, Legality>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub card_faces: Vec<ScryfallCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, PartialEq)]
pub enum Legality {
  #[serde(rename = "legal")]
  Legal,
  #[serde(rename = "not_legal")]
  NotLegal,
  #[serde(rename = "banned")]
  Banned,
  #[serde(rename = "restricted")]
  Restricted,
  #[serde(other)]
  Other,
}

impl ScryfallCard {
  /// Returns true if the card is legal, banned or restricted in at least one format.
  /// Tokens and other non-cards are not legal anywhere.
  pub fn is_real_card(&self) -> bool {
    self.legalities.values().any(|l| l != &Legality::NotLegal)
  }
}

impl From<ScryfallCard> for Card {
  fn from(card: ScryfallCard) -> Self {
    // Split and modal cards carry an empty top level type line
    let type_line = if card.type_line.is_empty() {
      card
        .card_faces
        .first()
        .map(|face| face.type_line.clone())
        .unwrap_or_default()
    } else {
      card.type_line
    };
    Self {
      name: card.name,
      mana_cost: card.mana_cost,
      type_line,
      cmc: card.cmc.max(0.0) as u32,
      zone: Zone::Library,
      tapped: false,
    }
  }
}
