//! cribbage-rs: Cribbage show scoring library
//!
//! Goals:
//! - Exact, deterministic scoring of a 4-card hand plus starter
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a show
//! ```
//! use cribbage_rs::cards::{Card, Rank, Suit};
//! use cribbage_rs::hand::Hand;
//! use cribbage_rs::scoring::score_hand;
//!
//! let hand = Hand::try_new([
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Ace, Suit::Diamonds),
//! ]).unwrap();
//! let starter = Card::new(Rank::Five, Suit::Hearts);
//!
//! let score = score_hand(&hand, starter);
//! assert_eq!(score.fifteens, 2);
//! assert_eq!(score.pairs, 2);
//! assert_eq!(score.nibs, 1);
//! assert_eq!(score.total(), 5);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin cribbage-rs
//! ```
//! or a headless batch with `cargo run --bin cribbage-rs -- --headless --hands 100000`.

pub mod cards;
pub mod deck;
pub mod hand;
pub mod scoring;
pub mod simulate;
pub mod stats;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
