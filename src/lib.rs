//! poker-rows: a two-player poker row game engine
//!
//! Each side builds several rows of five cards. Once every row is full, the
//! rows are scored as poker hands and compared pairwise; the side that takes
//! more rows wins the match.
//!
//! Goals:
//! - Pure, deterministic hand ranking and match judging
//! - Partial-row previews for live progress displays
//! - No panics for invalid input; use `Result` for precondition failures
//!
//! ## Quick start: judge two sets of rows
//! ```
//! use poker_rows::judge::{judge, Outcome};
//! use poker_rows::row::Row;
//!
//! let player: Vec<Row> = ["Kd Kc Kh 4s 4d", "2c 3d 4h 5s 7c"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let opponent: Vec<Row> = ["Ah Jh 8h 6h 3h", "2d 3c 4s 5h 7d"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let result = judge(&player, &opponent).unwrap();
//! assert_eq!(result.row_outcomes(), &[Outcome::Player, Outcome::Draw]);
//! assert_eq!(result.winner(), Outcome::Player);
//! ```
//!
//! ## Simulator
//! Play a seeded match between two random agents with:
//! ```sh
//! cargo run --bin poker-rows -- --seed 42
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod judge;
pub mod row;

/// Cards in a complete row, and in a scored hand.
pub const HAND_SIZE: usize = 5;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
