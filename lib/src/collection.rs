//! # Collection
//!
use crate::card::Card;
use crate::error::Result;
use crate::scryfall::ScryfallCard;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::ops::Deref;
use std::path::Path;

/// A Collection represents a catalog of unique cards that deck lists are resolved against
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Collection {
  pub cards: Vec<Card>,
}

impl Collection {
  /// Returns a new collection of cards
  pub fn from_cards(mut cards: Vec<Card>) -> Self {
    // sort for binary_search used in card_from_name
    cards.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    cards.dedup_by(|a, b| a.name.eq_ignore_ascii_case(&b.name));
    Self { cards }
  }

  /// Returns a card from the card name, ignoring case
  pub fn card_from_name(&self, name: &str) -> Option<&Card> {
    let name_lowercase = name.to_lowercase();
    let res = self
      .cards
      .binary_search_by(|probe| probe.name.to_lowercase().cmp(&name_lowercase));
    res.map(|idx| &self.cards[idx]).ok()
  }

  /// Returns a collection from a JSON array of Scryfall card objects
  pub fn from_json_str(s: &str) -> Result<Self> {
    let scryfall_cards: Vec<ScryfallCard> = serde_json::from_str(s)?;
    Ok(Self::from_scryfall(scryfall_cards))
  }

  pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
    let scryfall_cards: Vec<ScryfallCard> = serde_json::from_reader(reader)?;
    Ok(Self::from_scryfall(scryfall_cards))
  }

  pub fn from_scryfall(scryfall_cards: Vec<ScryfallCard>) -> Self {
    Self::from_cards(scryfall_cards.into_iter().map(|c| c.into()).collect())
  }

  /// Returns a collection from gzip compressed bincode bytes, see `to_compressed`
  pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
    let mut gz = GzDecoder::new(bytes);
    let mut s: Vec<u8> = Vec::new();
    gz.read_to_end(&mut s)?;
    Ok(bincode::deserialize(&s)?)
  }

  /// Returns the gzip compressed bincode encoding of the collection
  pub fn to_compressed(&self) -> Result<Vec<u8>> {
    let encoded = bincode::serialize(self)?;
    let mut e = GzEncoder::new(Vec::new(), Compression::default());
    e.write_all(&encoded[..])?;
    Ok(e.finish()?)
  }

  /// Loads a collection from disk. Files ending in `.json` are read as Scryfall JSON,
  /// anything else as the compressed format written by `to_compressed`
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let is_json = path
      .extension()
      .map(|ext| ext.eq_ignore_ascii_case("json"))
      .unwrap_or(false);
    if is_json {
      info!("Loading Scryfall JSON @ {}", path.display());
      Self::from_json_reader(BufReader::new(File::open(path)?))
    } else {
      info!("Loading compressed collection @ {}", path.display());
      let mut bytes = Vec::new();
      File::open(path)?.read_to_end(&mut bytes)?;
      Self::from_compressed(&bytes)
    }
  }
}

impl Deref for Collection {
  type Target = [Card];

  fn deref(&self) -> &Self::Target {
    &self.cards
  }
}
