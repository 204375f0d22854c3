use super::classify::{DrawType, FlopArchetype};
use super::combinations::choose;
use super::nuts::nut_outs;
use super::outs::{has_flopped_straight, out_ranks, true_out_count, working_cards};
use crate::board::{Flop, Hand};
use crate::cards::{Rank, RankUniverse};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Ranked wrap classes retained per flop.
pub const MAX_WRAPS_PER_FLOP: usize = 15;

/// A strong draw needs at least this many distinct out ranks...
pub const MIN_OUT_RANKS: usize = 3;
/// ...and at least this many hand ranks doing the work.
pub const MIN_WORKING_CARDS: usize = 3;

/// Composite dedup key with structural equality: two hands collapse into one
/// class iff they agree on all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WrapKey {
    true_outs: u32,
    draw_type: DrawType,
    nut_outs: u32,
    out_ranks: Vec<Rank>,
}

/// One equivalence class of draws on a flop, carried by a representative
/// hand. Clean representatives (no rank shared with the flop) are preferred;
/// among equal cleanliness the first hand in enumeration order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapClass {
    pub representative: Hand,
    pub clean: bool,
    pub true_outs: u32,
    pub draw_type: DrawType,
    pub out_ranks: Vec<Rank>,
    pub working: Vec<Rank>,
    pub nut_outs: u32,
    pub nut_ranks: Vec<Rank>,
}

/// Everything the catalog keeps for one flop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlopSummary {
    pub flop: Flop,
    pub archetype: FlopArchetype,
    pub wraps: Vec<WrapClass>,
}

impl FlopSummary {
    /// Flops without a single qualifying wrap are dropped from the catalog.
    pub fn is_empty(&self) -> bool {
        self.wraps.is_empty()
    }
}

/// Sweep one flop's entire 5-rank hand space: enumerate, filter to strong
/// draws, dedup into wrap classes, rank by true out count, truncate.
///
/// An empty result is an expected outcome (trips boards, connected boards
/// whose wraps are all flopped straights), not an error.
pub fn aggregate_flop(universe: &RankUniverse, flop: Flop) -> FlopSummary {
    let archetype = FlopArchetype::classify(&flop);
    let mut classes: Vec<WrapClass> = Vec::new();
    let mut index: HashMap<WrapKey, usize> = HashMap::new();

    for ranks in choose::<5, Rank>(universe.ranks()) {
        // Universe ranks are distinct, so every combination is a valid hand
        let Ok(hand) = Hand::try_new(ranks) else { continue };

        if has_flopped_straight(&flop, &hand) {
            continue;
        }

        let outs = out_ranks(universe, &flop, &hand);
        if outs.len() < MIN_OUT_RANKS {
            continue;
        }
        let working = working_cards(&flop, &hand, &outs);
        if working.len() < MIN_WORKING_CARDS {
            continue;
        }
        let true_outs = true_out_count(&hand, &outs);
        if true_outs == 0 {
            continue;
        }

        let draw_type = DrawType::classify(&flop, &outs);
        let nuts = nut_outs(universe, &flop, &hand, &outs);
        let clean = hand.is_clean_on(&flop);

        let key = WrapKey {
            true_outs,
            draw_type,
            nut_outs: nuts.count,
            out_ranks: outs.clone(),
        };

        match index.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(classes.len());
                classes.push(WrapClass {
                    representative: hand,
                    clean,
                    true_outs,
                    draw_type,
                    out_ranks: outs,
                    working,
                    nut_outs: nuts.count,
                    nut_ranks: nuts.ranks,
                });
            }
            Entry::Occupied(slot) => {
                let existing = &mut classes[*slot.get()];
                if !existing.clean && clean {
                    existing.representative = hand;
                    existing.clean = true;
                    existing.working = working;
                }
                // An already-clean class keeps its first representative
            }
        }
    }

    // Stable sort keeps insertion order among equal out counts
    classes.sort_by(|a, b| b.true_outs.cmp(&a.true_outs));
    classes.truncate(MAX_WRAPS_PER_FLOP);

    FlopSummary { flop, archetype, wraps: classes }
}
