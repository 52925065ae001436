//! clairvoyant: the "Are You Clairvoyant?" card guessing game
//!
//! Goals:
//! - A deck shuffle that stops once the deck *looks* disordered enough, judged
//!   by an orderedness heuristic against the sorted deck
//! - Reproducible runs through an injected, seedable RNG
//! - A console session that works over any `BufRead`/`Write` pair
//!
//! ## Quick start: shuffle and inspect a deck
//! ```
//! use clairvoyant::deck::Deck;
//!
//! let mut deck = Deck::standard();
//! assert_eq!(deck.orderedness(), deck.initial_orderedness());
//!
//! let report = deck.shuffle_seeded(7);
//! assert!(report.passes >= 5);
//! assert!(f64::from(report.orderedness) <= f64::from(deck.initial_orderedness()) * report.threshold);
//! ```
//!
//! ## Playing
//! Run the interactive game with:
//! ```sh
//! cargo run --bin clairvoyant
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod orderedness;
pub mod probability;
pub mod session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
