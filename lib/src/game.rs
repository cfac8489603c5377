//! # Game state engine
//!
//! A `Game` owns every card of one simulated game along with the mana pool, the turn
//! counter and the pull counters. The library is not a separate container: it is every
//! card in the `Library` zone, in the order of the underlying card sequence. The top of
//! the library is the first such card and the bottom is the last.
use crate::card::{Card, Zone};
use crate::pull::{Effect, PullPolicy};
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::fmt;

pub struct Game<'p> {
  cards: Vec<Card>,
  policy: &'p PullPolicy,
  rng: SmallRng,
  pub turn: usize,
  pub commander_in_play: bool,
  pub mana_pool: u32,
  pulls: usize,
  hits: usize,
  decked_out: bool,
}

/// The result of drawing a card
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum Draw {
  Drew,
  /// The library was empty, which loses the game
  DeckOut,
}

/// The result of pulling the bottom card of the library
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum Pull {
  Resolved(Effect),
  /// The library was empty, nothing was revealed and nothing was counted
  DeckOut,
}

impl<'p> Game<'p> {
  /// Returns a new game where every card starts untapped in a freshly shuffled library
  pub fn new(mut cards: Vec<Card>, policy: &'p PullPolicy, rng: SmallRng) -> Self {
    for card in &mut cards {
      card.move_to(Zone::Library);
    }
    let mut game = Self {
      cards,
      policy,
      rng,
      turn: 0,
      commander_in_play: false,
      mana_pool: 0,
      pulls: 0,
      hits: 0,
      decked_out: false,
    };
    game.shuffle();
    game
  }

  pub fn from_seed(cards: Vec<Card>, policy: &'p PullPolicy, seed: u64) -> Self {
    Self::new(cards, policy, SmallRng::seed_from_u64(seed))
  }

  /// Randomly permutes the card sequence, and with it the library order
  pub fn shuffle(&mut self) {
    self.cards.shuffle(&mut self.rng);
  }

  /// Returns every card to the library untapped and shuffles, keeping the counters.
  /// A deck-out seen before the reset no longer counts
  pub fn reset(&mut self) {
    for card in &mut self.cards {
      card.move_to(Zone::Library);
    }
    self.decked_out = false;
    self.shuffle();
  }

  pub fn untap(&mut self) {
    for card in self.cards.iter_mut().filter(|c| c.is_in(Zone::Battlefield)) {
      card.tapped = false;
    }
  }

  /// Moves the top card of the library to the hand
  pub fn draw(&mut self) -> Draw {
    match self.cards.iter_mut().find(|c| c.is_in(Zone::Library)) {
      Some(card) => {
        card.move_to(Zone::Hand);
        Draw::Drew
      }
      None => {
        warn!("Library is empty on turn {}, the game is lost", self.turn);
        self.decked_out = true;
        Draw::DeckOut
      }
    }
  }

  /// Puts the first land found in hand onto the battlefield untapped
  pub fn play_land(&mut self) {
    if let Some(land) = self
      .cards
      .iter_mut()
      .find(|c| c.is_in(Zone::Hand) && c.is_land())
    {
      land.move_to(Zone::Battlefield);
    }
  }

  /// Taps every untapped land on the battlefield for one mana each
  pub fn tap_for_mana(&mut self) {
    let mut mana = 0;
    for land in self
      .cards
      .iter_mut()
      .filter(|c| c.is_in(Zone::Battlefield) && c.is_land() && !c.tapped)
    {
      land.tapped = true;
      mana += 1;
    }
    self.mana_pool += mana;
  }

  /// Reveals the bottom card of the library and resolves it with the pull policy
  pub fn pull(&mut self) -> Pull {
    let policy = self.policy;
    let bottom = match self.cards.iter_mut().rev().find(|c| c.is_in(Zone::Library)) {
      Some(card) => card,
      None => {
        warn!("Library is empty on turn {}, nothing to pull", self.turn);
        self.decked_out = true;
        return Pull::DeckOut;
      }
    };
    let effect = policy.resolve(bottom);
    trace!("Pulled {} -> {:?}", bottom.name, effect);
    bottom.move_to(effect.zone);
    self.pulls += 1;
    if effect.hit {
      self.hits += 1;
    }
    self.mana_pool += effect.mana;
    Pull::Resolved(effect)
  }

  /// Casts the first card in hand named `name` if the mana pool can pay its cmc.
  /// Returns true if the card was cast
  pub fn cast(&mut self, name: &str) -> bool {
    let mana_pool = self.mana_pool;
    let card = self
      .cards
      .iter_mut()
      .find(|c| c.is_in(Zone::Hand) && c.name == name && c.cmc <= mana_pool);
    match card {
      Some(card) => {
        card.move_to(Zone::Battlefield);
        self.mana_pool -= card.cmc;
        debug!("Cast {} on turn {}", name, self.turn);
        true
      }
      None => false,
    }
  }

  /// Casts the commander from the command zone for `cost` mana.
  /// Returns true if the commander was cast
  pub fn cast_commander(&mut self, cost: u32) -> bool {
    if self.commander_in_play || !self.spend(cost) {
      return false;
    }
    debug!("Cast commander on turn {}", self.turn);
    self.commander_in_play = true;
    true
  }

  /// Removes `amount` mana from the pool if possible
  pub fn spend(&mut self, amount: u32) -> bool {
    if self.mana_pool < amount {
      return false;
    }
    self.mana_pool -= amount;
    true
  }

  /// Returns the number of lands in `zone`
  pub fn land_count(&self, zone: Zone) -> usize {
    self
      .cards
      .iter()
      .filter(|c| c.is_in(zone) && c.is_land())
      .count()
  }

  /// Returns the number of cards in `zone`
  pub fn zone_count(&self, zone: Zone) -> usize {
    self.cards.iter().filter(|c| c.is_in(zone)).count()
  }

  /// Returns the cards in `zone`, in sequence order
  pub fn zone(&self, zone: Zone) -> impl Iterator<Item = &Card> {
    self.cards.iter().filter(move |c| c.is_in(zone))
  }

  pub fn library_len(&self) -> usize {
    self.zone_count(Zone::Library)
  }

  pub fn top_of_library(&self) -> Option<&Card> {
    self.cards.iter().find(|c| c.is_in(Zone::Library))
  }

  pub fn bottom_of_library(&self) -> Option<&Card> {
    self.cards.iter().rev().find(|c| c.is_in(Zone::Library))
  }

  pub fn cards(&self) -> &[Card] {
    &self.cards
  }

  pub fn pulls(&self) -> usize {
    self.pulls
  }

  pub fn hits(&self) -> usize {
    self.hits
  }

  /// True once a draw or pull found the library empty
  pub fn decked_out(&self) -> bool {
    self.decked_out
  }
}

impl<'p> fmt::Display for Game<'p> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "Turn {}:", self.turn)?;
    for zone in &[Zone::Hand, Zone::Battlefield, Zone::Graveyard] {
      let names: Vec<_> = self.zone(*zone).map(|c| c.name.as_str()).collect();
      writeln!(f, "{}: {} cards {:?}", zone, names.len(), names)?;
    }
    Ok(())
  }
}
