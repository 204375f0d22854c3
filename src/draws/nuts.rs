use super::combinations::choose;
use super::straights::StraightInfo;
use crate::board::{Flop, Hand};
use crate::cards::{Rank, RankUniverse};

/// How many of a draw's outs make the best straight possible on the
/// resulting 4-card board, and which ranks those are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutOuts {
    pub count: u32,
    pub ranks: Vec<Rank>,
}

/// Classify each out rank by nuttiness.
///
/// For every out, the 4-card board's ceiling is the best straight top any
/// foreign hole pair can reach; the out is a nut out iff one of the hand's
/// own (board-triple, hole-pair) straights attains exactly that ceiling.
/// Straights sharing a top rank are equally nutty. The count discounts
/// copies of a nut rank the hand already holds.
///
/// This is the full opponent search over every foreign pair of universe
/// ranks off the board — the most expensive step of the pipeline.
pub fn nut_outs(universe: &RankUniverse, flop: &Flop, hand: &Hand, outs: &[Rank]) -> NutOuts {
    let f = flop.ranks();
    let mut ranks = Vec::new();
    let mut count = 0u32;

    for &out in outs {
        let board4 = [f[0], f[1], f[2], out];
        let Some(ceiling) = board_ceiling(universe, &board4) else {
            continue;
        };

        let attains = choose::<2, Rank>(hand.ranks()).any(|pair| {
            choose::<3, Rank>(&board4).any(|t| {
                StraightInfo::detect(&[t[0], t[1], t[2], pair[0], pair[1]]).top_rank
                    == Some(ceiling)
            })
        });

        if attains {
            let held = if hand.contains(out) { 1 } else { 0 };
            count += Rank::SUITS - held;
            ranks.push(out);
        }
    }

    NutOuts { count, ranks }
}

/// The best straight top rank any foreign hole pair reaches on this board,
/// or `None` when no straight is possible at all. Foreign pairs draw from
/// the universe excluding ranks already on the 4-card board.
///
/// Comparing by `Rank` order is sound because the wheel tops at Five, the
/// weakest possible straight top.
fn board_ceiling(universe: &RankUniverse, board4: &[Rank; 4]) -> Option<Rank> {
    let mut best: Option<Rank> = None;
    for pair in choose::<2, Rank>(universe.ranks()) {
        if pair.iter().any(|r| board4.contains(r)) {
            continue;
        }
        for t in choose::<3, Rank>(board4) {
            if let Some(top) =
                StraightInfo::detect(&[t[0], t[1], t[2], pair[0], pair[1]]).top_rank
            {
                if best.map_or(true, |b| top > b) {
                    best = Some(top);
                }
            }
        }
    }
    best
}
