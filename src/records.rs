//! Serialized form of the catalog: the field contract consumed by the
//! presentation layer. Downstream treats the artifact as an immutable lookup
//! table keyed by the flop string and does no recomputation.

use crate::cards::Rank;
use crate::draws::aggregate::{FlopSummary, WrapClass};
use crate::draws::classify::{DrawType, FlopArchetype};
use serde::{Deserialize, Serialize};

/// Width of the `drawHand` glyph pattern: one slot per hand rank.
pub const DRAW_HAND_WIDTH: usize = 5;

/// One catalog entry: a flop, its archetype label, and its ranked wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlopEntry {
    pub flop: String,
    pub flop_archetype: FlopArchetype,
    pub wraps: Vec<WrapRecord>,
}

/// One deduplicated draw shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapRecord {
    /// Composite dedup key, stable within a run.
    pub uid: String,
    pub draw_type: DrawType,
    pub out_count: u32,
    pub outs: OutsSummary,
    /// Working-card glyphs ascending, left-packed, `'x'` filling the
    /// irrelevant slots.
    pub draw_hand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutsSummary {
    pub ranks: Vec<String>,
    pub nut_outs: u32,
    pub nut_ranks: Vec<String>,
}

impl FlopEntry {
    pub fn from_summary(summary: &FlopSummary) -> Self {
        Self {
            flop: summary.flop.to_string(),
            flop_archetype: summary.archetype,
            wraps: summary.wraps.iter().map(WrapRecord::from_class).collect(),
        }
    }
}

impl WrapRecord {
    pub fn from_class(class: &WrapClass) -> Self {
        Self {
            uid: class_uid(class),
            draw_type: class.draw_type,
            out_count: class.true_outs,
            outs: OutsSummary {
                ranks: glyphs(&class.out_ranks),
                nut_outs: class.nut_outs,
                nut_ranks: glyphs(&class.nut_ranks),
            },
            draw_hand: draw_hand_pattern(&class.working),
        }
    }
}

fn glyphs(ranks: &[Rank]) -> Vec<String> {
    ranks.iter().map(Rank::to_string).collect()
}

/// `<outCount>-<drawType slug>-<nutOuts>-<out rank values, comma-joined>`.
fn class_uid(class: &WrapClass) -> String {
    let ranks: Vec<String> =
        class.out_ranks.iter().map(|r| r.value().to_string()).collect();
    format!(
        "{}-{}-{}-{}",
        class.true_outs,
        class.draw_type.slug(),
        class.nut_outs,
        ranks.join(",")
    )
}

fn draw_hand_pattern(working: &[Rank]) -> String {
    let mut pattern: String = working.iter().map(|r| r.to_char()).collect();
    while pattern.len() < DRAW_HAND_WIDTH {
        pattern.push('x');
    }
    pattern
}
