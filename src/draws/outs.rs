use super::combinations::choose;
use super::straights::is_straight;
use crate::board::{Flop, Hand};
use crate::cards::{Rank, RankUniverse};

/// True when some hole pair already makes a straight with the three flop
/// ranks alone. Such hands are made, not drawing, and are excluded upstream.
pub fn has_flopped_straight(flop: &Flop, hand: &Hand) -> bool {
    let f = flop.ranks();
    choose::<2, Rank>(hand.ranks()).any(|p| is_straight(&[f[0], f[1], f[2], p[0], p[1]]))
}

/// Whether any (board-triple, hole-pair) combination on a 4-card board is a
/// straight.
fn completes_straight(board4: &[Rank; 4], pair: [Rank; 2]) -> bool {
    choose::<3, Rank>(board4).any(|t| is_straight(&[t[0], t[1], t[2], pair[0], pair[1]]))
}

/// Ranks that, arriving as a 4th board card, complete a straight for this
/// hand. Candidates already on the flop are skipped; a rank the hand holds
/// may still qualify (its held copies are discounted by
/// [`true_out_count`]). Ascending, each rank at most once.
pub fn out_ranks(universe: &RankUniverse, flop: &Flop, hand: &Hand) -> Vec<Rank> {
    let f = flop.ranks();
    let mut outs = Vec::new();
    for &candidate in universe.ranks() {
        if flop.contains(candidate) {
            continue;
        }
        let board4 = [f[0], f[1], f[2], candidate];
        if choose::<2, Rank>(hand.ranks()).any(|pair| completes_straight(&board4, pair)) {
            outs.push(candidate);
        }
    }
    outs
}

/// Out ranks expanded to card outs: four suits per rank, minus the copies
/// the hand itself holds.
pub fn true_out_count(hand: &Hand, outs: &[Rank]) -> u32 {
    let held = outs.iter().filter(|r| hand.contains(**r)).count() as u32;
    outs.len() as u32 * Rank::SUITS - held
}

/// The hole ranks that participate in at least one qualifying straight for
/// any of the given out ranks. Non-working ranks are irrelevant to the draw.
pub fn working_cards(flop: &Flop, hand: &Hand, outs: &[Rank]) -> Vec<Rank> {
    let f = flop.ranks();
    let mut working: Vec<Rank> = Vec::new();
    for &out in outs {
        let board4 = [f[0], f[1], f[2], out];
        for pair in choose::<2, Rank>(hand.ranks()) {
            if completes_straight(&board4, pair) {
                for rank in pair {
                    if !working.contains(&rank) {
                        working.push(rank);
                    }
                }
            }
        }
    }
    working.sort_unstable();
    working
}
