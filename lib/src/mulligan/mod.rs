//! # Mulligan strategies
//!
//! The `mulligan` module defines a `Mulligan` trait that decides whether an opening
//! hand is kept, along with the bounded retry loop that searches for a keepable hand.

mod min_lands;
mod mulligan;
mod never;

pub use min_lands::MinLands;
pub use mulligan::Mulligan;
pub use never::Never;
