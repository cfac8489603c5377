//! # Library errors
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot parse deck list line: {0}")]
  BadDeckLine(String),
  #[error("cannot parse card count from deck list line: {0}")]
  BadCardCount(String),
  #[error("cannot find card named \"{0}\" in collection")]
  UnknownCard(String),
  #[error("deck list contains no cards")]
  EmptyDeck,
  #[error("no acceptable opening hand after {0} attempts")]
  NoAcceptableHand(usize),
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("bincode error: {0}")]
  Bincode(#[from] bincode::Error),
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
