extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate grenzo;

use grenzo::collection::Collection;
use grenzo::scryfall::ScryfallCard;
use std::env;
use std::fmt;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
enum Error {
  Json(serde_json::Error),
  Grenzo(grenzo::Error),
  Io(std::io::Error),
  Usage,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Json(e) => write!(f, "Invalid Scryfall JSON: {}", e),
      Self::Grenzo(e) => write!(f, "{}", e),
      Self::Io(e) => write!(f, "{}", e),
      Self::Usage => write!(f, "Usage: scryfall2grenzo <scryfall-cards.json> <out.grenzo>"),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Self::Io(error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(error: serde_json::Error) -> Self {
    Self::Json(error)
  }
}

impl From<grenzo::Error> for Error {
  fn from(error: grenzo::Error) -> Self {
    Self::Grenzo(error)
  }
}

fn main() {
  let _ = env_logger::try_init();
  if let Err(e) = run() {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}

fn run() -> Result<(), Error> {
  let args: Vec<String> = env::args().collect();
  if args.len() < 3 {
    return Err(Error::Usage);
  }
  let uri_string = &args[1];
  let out_path_string = &args[2];

  let uri_path = Path::new(uri_string);
  info!("Loading JSON file @ {}", uri_string);
  let reader = BufReader::new(File::open(uri_path)?);
  info!("Deserializing Scryfall JSON");
  let mut scryfall_cards: Vec<ScryfallCard> = serde_json::from_reader(reader)?;
  // Filter out any cards that are not legal in any format
  // This should filter out any tokens
  let total = scryfall_cards.len();
  scryfall_cards.retain(|c| c.is_real_card());
  info!("Kept {} of {} Scryfall objects", scryfall_cards.len(), total);
  // Flatten the card_faces out into scryfall_cards so each face resolves by name
  let mut card_faces = Vec::with_capacity(500);
  for card in &scryfall_cards {
    for face in &card.card_faces {
      let mut face = face.clone();
      if face.cmc == 0.0 {
        face.cmc = card.cmc;
      }
      face.legalities = card.legalities.clone();
      card_faces.push(face);
    }
  }
  scryfall_cards.extend(card_faces);
  info!("Generating grenzo output");
  let collection = Collection::from_scryfall(scryfall_cards);
  info!("Compressing {} cards", collection.len());
  let compressed = collection.to_compressed()?;
  info!("Writing {}", out_path_string);
  let mut file: File = OpenOptions::new()
    .write(true)
    .create(true)
    .truncate(true)
    .open(out_path_string)?;
  file.write_all(&compressed[..])?;
  Ok(())
}
