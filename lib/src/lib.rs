//! # Magic: The Gathering Pull Simulation Library
//!
//! grenzo is a library that simulates games of a deck built around repeatedly
//! revealing the bottom card of the library ("pulling") in order to estimate
//! how many of those pulls are beneficial. The turn loop plays lands, taps for
//! mana, casts the pull engine and spends the remaining mana on pulls.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate bincode;
extern crate flate2;
extern crate rand;
extern crate rayon;
extern crate regex;
extern crate wasm_bindgen;

#[macro_use]
pub mod card;
pub mod collection;
pub mod data;
#[macro_use]
pub mod deck;
pub mod error;
pub mod game;
pub mod mulligan;
pub mod pull;
pub mod scryfall;
pub mod simulation;
pub mod wasm;

pub use crate::error::{Error, Result};
pub use crate::wasm::run;
