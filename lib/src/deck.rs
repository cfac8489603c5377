use crate::card::*;
use crate::collection::Collection;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;

/// A Deck is a list of distinct cards and the number of copies of each
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
  pub cards: Vec<DeckCard>,
  pub card_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckCard {
  pub card: Card,
  pub count: usize,
}

#[derive(Debug, Clone)]
pub struct DeckBuilder {
  pub cards: BTreeMap<Card, usize>,
}

impl DeckBuilder {
  pub fn new() -> Self {
    Self {
      cards: BTreeMap::new(),
    }
  }

  pub fn insert_count(mut self, card: Card, count: usize) -> Self {
    let total_count = self.cards.entry(card).or_insert(0);
    *total_count += count;
    Self { cards: self.cards }
  }

  pub fn build(self) -> Deck {
    let mut deck = Deck::new();
    let mut count = 0;
    for (k, v) in self.cards {
      if v == 0 {
        continue;
      }
      deck.cards.push(DeckCard { card: k, count: v });
      count += v;
    }
    deck.card_count = count;
    deck
  }
}

impl Default for DeckBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl Deck {
  pub fn new() -> Self {
    Self {
      cards: Vec::with_capacity(20),
      card_count: 0,
    }
  }

  /// Returns one fresh copy of every card in the deck, each in the library and untapped.
  /// Every simulated game owns the result, so no state leaks between games
  pub fn flatten(&self) -> Vec<Card> {
    let mut result = Vec::with_capacity(self.card_count);
    for card_count in &self.cards {
      for _ in 0..card_count.count {
        let mut card = card_count.card.clone();
        card.move_to(Zone::Library);
        result.push(card);
      }
    }
    result
  }

  pub fn card_from_name(&self, name: &str) -> Option<&Card> {
    self.card_count_from_name(name).map(|o| &o.card)
  }

  pub fn card_count_from_name(&self, name: &str) -> Option<&DeckCard> {
    self
      .cards
      .iter()
      .find(|probe| probe.card.name.eq_ignore_ascii_case(name))
  }

  /// Returns the number of cards in the deck that satisfy the predicate
  pub fn count<P>(&self, p: P) -> usize
  where
    P: Fn(&Card) -> bool,
  {
    self
      .cards
      .iter()
      .filter(|cc| p(&cc.card))
      .fold(0, |accum, cc| accum + cc.count)
  }

  pub fn len(&self) -> usize {
    self.card_count
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Parses a deck list of `<count> <card name>` lines, resolving every name against `collection`
  pub fn from_list(collection: &Collection, list: &str) -> Result<Self> {
    lazy_static! {
        static ref DECK_LINE_REGEX: Regex =
            Regex::new(r"^\s*(?P<amount>\d+)[xX]?\s+(?P<name>[^\(#\n\r]+)(?:\s*\((?P<set>\w+)\)\s*(?P<setnum>\S+)?)?\s*(?:#.*)?$")
                .expect("Failed to compile DECK_LINE_REGEX regex");
    }
    let mut builder = DeckBuilder::new();
    let mut seen_cards = false;
    for line in list.trim().lines() {
      let trimmed = line.trim();
      let trimmed_lower = trimmed.to_lowercase();
      // An empty line divides the main board cards from the side board cards
      if trimmed.is_empty() {
        if seen_cards {
          break;
        }
        continue;
      }
      // Ignore reserved words
      if trimmed_lower == "deck" || trimmed_lower == "commander" {
        continue;
      }
      if trimmed_lower == "sideboard" || trimmed_lower == "maybeboard" {
        break;
      }
      // Ignore line comments
      if trimmed.starts_with('#') {
        continue;
      }
      let caps = DECK_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| Error::BadDeckLine(line.to_string()))?;
      let amount = caps["amount"]
        .parse::<usize>()
        .map_err(|_| Error::BadCardCount(line.to_string()))?;
      let name = caps["name"].trim();
      let card = collection
        .card_from_name(name)
        .ok_or_else(|| Error::UnknownCard(name.to_string()))?
        .clone();
      builder = builder.insert_count(card, amount);
      seen_cards = true;
    }
    let deck = builder.build();
    if deck.is_empty() {
      return Err(Error::EmptyDeck);
    }
    Ok(deck)
  }
}

impl Default for Deck {
  fn default() -> Self {
    Self::new()
  }
}

#[macro_export]
macro_rules! decklist {
  ($list:expr) => {
    $crate::deck::Deck::from_list(&$crate::data::ALL_CARDS, $list)
      .unwrap_or_else(|e| panic!("Bad deck list: {}", e))
  };
}
