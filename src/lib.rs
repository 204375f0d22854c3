//! wrap-rs: deterministic wrap catalog generator
//!
//! For every distinct three-rank flop, enumerates all five-rank hole hands,
//! finds the maximal straight-draw shapes (wraps) they hold, classifies each
//! shape (flop archetype, draw type, nut status), and emits a ranked summary
//! per flop as one JSON artifact. Suits are ignored throughout: straight
//! outs are rank-level, expanded to four outs per rank at counting time.
//!
//! ## Quick start: analyze one draw
//! ```
//! use wrap_rs::board::{Flop, Hand};
//! use wrap_rs::cards::RankUniverse;
//! use wrap_rs::draws::{out_ranks, true_out_count};
//!
//! let universe = RankUniverse::standard();
//! let flop: Flop = "45J".parse().unwrap();
//! let hand: Hand = "2367K".parse().unwrap();
//!
//! let outs = out_ranks(&universe, &flop, &hand);
//! assert_eq!(outs.len(), 6);
//! assert_eq!(true_out_count(&hand, &outs), 20);
//! ```
//!
//! ## Generating the catalog
//! ```sh
//! cargo run --release --bin wrapgen
//! ```

pub mod board;
pub mod cards;
pub mod catalog;
pub mod draws;
pub mod records;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
