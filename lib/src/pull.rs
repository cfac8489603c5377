//! # Pull resolution policy
//!
//! A pull reveals the bottom card of the library and resolves it against an ordered
//! table of rules. The first rule whose matcher accepts the card decides where the card
//! goes, whether the pull counts as a hit and how much mana it produces.
use crate::card::{Card, Zone};
use crate::error::Result;

/// The result of resolving one pulled card
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
  /// Where the pulled card ends up
  pub zone: Zone,
  /// True if the pull is beneficial
  pub hit: bool,
  /// Mana added to the pool
  #[serde(default)]
  pub mana: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMatcher {
  /// Matches any card whose name is in the list, exactly
  Name(Vec<String>),
  /// Matches any card with the type word on its type line
  Type(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRule {
  pub when: CardMatcher,
  pub then: Effect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullPolicy {
  pub rules: Vec<PullRule>,
  /// Applies when no rule matches
  pub otherwise: Effect,
}

impl CardMatcher {
  pub fn matches(&self, card: &Card) -> bool {
    match self {
      Self::Name(names) => names.iter().any(|name| name == &card.name),
      Self::Type(tag) => card.has_type(tag),
    }
  }
}

impl Effect {
  pub fn new(zone: Zone, hit: bool, mana: u32) -> Self {
    Self { zone, hit, mana }
  }
}

impl PullPolicy {
  /// The resolution table of the Grenzo, Dungeon Warden pull deck.
  /// Named cards are checked before the generic creature rule
  pub fn grenzo() -> Self {
    fn names(list: &[&str]) -> CardMatcher {
      CardMatcher::Name(list.iter().map(|s| s.to_string()).collect())
    }
    Self {
      rules: vec![
        PullRule {
          when: names(&["Workhorse"]),
          then: Effect::new(Zone::Graveyard, true, 4),
        },
        PullRule {
          when: names(&["Emrakul's Hatcher", "Priest of Gix", "Priest of Urabrask"]),
          then: Effect::new(Zone::Battlefield, true, 3),
        },
        PullRule {
          when: names(&["Kalain, Reclusive Painter", "Wily Goblin"]),
          then: Effect::new(Zone::Battlefield, true, 1),
        },
        PullRule {
          when: CardMatcher::Type("Creature".to_string()),
          then: Effect::new(Zone::Battlefield, true, 0),
        },
      ],
      otherwise: Effect::new(Zone::Graveyard, false, 0),
    }
  }

  /// Loads a policy from JSON, e.g.
  ///
  /// ```json
  /// {
  ///   "rules": [
  ///     { "when": { "name": ["Workhorse"] }, "then": { "zone": "Graveyard", "hit": true, "mana": 4 } },
  ///     { "when": { "type": "Creature" }, "then": { "zone": "Battlefield", "hit": true } }
  ///   ],
  ///   "otherwise": { "zone": "Graveyard", "hit": false }
  /// }
  /// ```
  pub fn from_json(s: &str) -> Result<Self> {
    Ok(serde_json::from_str(s)?)
  }

  /// Returns the effect of pulling `card`
  pub fn resolve(&self, card: &Card) -> Effect {
    self
      .rules
      .iter()
      .find(|rule| rule.when.matches(card))
      .map(|rule| rule.then)
      .unwrap_or(self.otherwise)
  }
}

impl Default for PullPolicy {
  fn default() -> Self {
    Self::grenzo()
  }
}
