//! # Internal card representation
//!
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// NOTE: PartialEq, Eq, Ord and Hash are implemented below and only consider the name
/// Card represents one physical Magic: The Gathering card in a game
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  /// String representing the card name
  pub name: String,
  /// String representing the card mana cost, in "{X}{R}{R}" style format
  #[serde(default)]
  pub mana_cost: String,
  /// The full type line, e.g. "Legendary Creature — Goblin Rogue"
  pub type_line: String,
  /// Converted mana cost, used for affordability checks
  pub cmc: u32,
  /// The zone the card currently occupies
  #[serde(default)]
  pub zone: Zone,
  /// Only meaningful on the battlefield
  #[serde(default)]
  pub tapped: bool,
}

/// Zone represents a card location during a game.
/// See [https://mtg.gamepedia.com/Zone](https://mtg.gamepedia.com/Zone)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
  Library,
  Hand,
  Battlefield,
  Graveyard,
}

impl Zone {
  pub const ALL: [Zone; 4] = [
    Zone::Library,
    Zone::Hand,
    Zone::Battlefield,
    Zone::Graveyard,
  ];
}

impl Default for Zone {
  fn default() -> Self {
    Self::Library
  }
}

impl std::fmt::Display for Zone {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let s = match self {
      Self::Library => "Library",
      Self::Hand => "Hand",
      Self::Battlefield => "Battlefield",
      Self::Graveyard => "Graveyard",
    };
    f.write_str(s)
  }
}

impl Card {
  /// Returns a new card in the library
  pub fn new(name: &str, type_line: &str, cmc: u32) -> Self {
    Self {
      name: name.to_string(),
      type_line: type_line.to_string(),
      cmc,
      ..Self::default()
    }
  }

  /// Returns true if `tag` appears as a word of the type line
  pub fn has_type(&self, tag: &str) -> bool {
    self.type_line.split_whitespace().any(|word| word == tag)
  }

  /// Returns true if the card type is a land
  pub fn is_land(&self) -> bool {
    self.has_type("Land")
  }

  pub fn is_creature(&self) -> bool {
    self.has_type("Creature")
  }

  /// Returns true if the card is in `zone`
  #[inline]
  pub fn is_in(&self, zone: Zone) -> bool {
    self.zone == zone
  }

  /// Moves the card to `zone`, clearing the tap status
  pub fn move_to(&mut self, zone: Zone) {
    self.zone = zone;
    self.tapped = false;
  }
}

impl PartialEq for Card {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
  }
}

impl Eq for Card {}

impl PartialOrd for Card {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Card {
  fn cmp(&self, other: &Self) -> Ordering {
    self.name.cmp(&other.name)
  }
}

impl Hash for Card {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
  }
}

#[macro_export]
macro_rules! card {
  ($card_name:expr) => {
    $crate::data::ALL_CARDS
      .card_from_name($card_name)
      .unwrap_or_else(|| panic!("Cannot find card named \"{}\"", $card_name))
  };
}
