//! The enumeration engine: combinatorial iterators, straight detection, out
//! and nuttiness calculators, draw classification, and the per-flop
//! aggregator. Everything here is a pure function over small immutable rank
//! arrays; no state survives between calls.

pub mod aggregate;
pub mod classify;
pub mod combinations;
pub mod nuts;
pub mod outs;
pub mod straights;

pub use aggregate::{aggregate_flop, FlopSummary, WrapClass, MAX_WRAPS_PER_FLOP};
pub use classify::{DrawType, FlopArchetype};
pub use combinations::{choose, Combinations};
pub use nuts::{nut_outs, NutOuts};
pub use outs::{has_flopped_straight, out_ranks, true_out_count, working_cards};
pub use straights::{is_straight, StraightInfo};
