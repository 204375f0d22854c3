use crate::board::Flop;
use crate::cards::Rank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural classification of a flop's rank pattern. Exactly one label per
/// flop, matched in priority order from Trips down to the Ragged fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlopArchetype {
    Trips,
    Paired,
    #[serde(rename = "Wheel Draw")]
    WheelDraw,
    Connected,
    #[serde(rename = "One-Gapper")]
    OneGapper,
    #[serde(rename = "Two-Gapper")]
    TwoGapper,
    Ragged,
}

impl FlopArchetype {
    pub fn classify(flop: &Flop) -> Self {
        let [r1, r2, r3] = *flop.ranks();

        if r1 == r2 && r2 == r3 {
            return FlopArchetype::Trips;
        }
        if r1 == r2 || r2 == r3 {
            return FlopArchetype::Paired;
        }
        // Ace with a wheel card (ranks are ascending, so r1 is the low)
        if r3 == Rank::Ace && r1 <= Rank::Five {
            return FlopArchetype::WheelDraw;
        }
        if r2.value() == r1.value() + 1 && r3.value() == r2.value() + 1 {
            return FlopArchetype::Connected;
        }

        let min_gap = (r2.value() - r1.value()).min(r3.value() - r2.value());
        match min_gap {
            1 => FlopArchetype::OneGapper,
            2 => FlopArchetype::TwoGapper,
            _ => FlopArchetype::Ragged,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FlopArchetype::Trips => "Trips",
            FlopArchetype::Paired => "Paired",
            FlopArchetype::WheelDraw => "Wheel Draw",
            FlopArchetype::Connected => "Connected",
            FlopArchetype::OneGapper => "One-Gapper",
            FlopArchetype::TwoGapper => "Two-Gapper",
            FlopArchetype::Ragged => "Ragged",
        }
    }
}

impl fmt::Display for FlopArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The shape of a straight draw, derived from its out-rank set and the flop
/// texture. Three or more out ranks make a wrap; fewer fall back to the
/// conventional two-card draw names. Zero out ranks never reach
/// classification — such hands are filtered upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawType {
    #[serde(rename = "wrap")]
    Wrap,
    #[serde(rename = "wheel wrap")]
    WheelWrap,
    #[serde(rename = "broadway wrap")]
    BroadwayWrap,
    #[serde(rename = "open ended")]
    OpenEnded,
    #[serde(rename = "double gutshot")]
    DoubleGutshot,
    #[serde(rename = "gutshot")]
    Gutshot,
}

impl DrawType {
    pub fn classify(flop: &Flop, out_ranks: &[Rank]) -> Self {
        match out_ranks {
            [] | [_] => DrawType::Gutshot,
            [lo, hi] => {
                if hi.value() == lo.value() + 1 {
                    DrawType::OpenEnded
                } else {
                    DrawType::DoubleGutshot
                }
            }
            _ => {
                // Wheel texture is read off the flop directly (not the
                // archetype) so paired ace-low boards classify here too
                if flop.contains(Rank::Ace) && flop.low() <= Rank::Five {
                    DrawType::WheelWrap
                } else if flop.ranks().iter().filter(|r| **r >= Rank::Ten).count() >= 2 {
                    DrawType::BroadwayWrap
                } else {
                    DrawType::Wrap
                }
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DrawType::Wrap => "wrap",
            DrawType::WheelWrap => "wheel wrap",
            DrawType::BroadwayWrap => "broadway wrap",
            DrawType::OpenEnded => "open ended",
            DrawType::DoubleGutshot => "double gutshot",
            DrawType::Gutshot => "gutshot",
        }
    }

    /// Single-token form used inside composite uids.
    pub const fn slug(self) -> &'static str {
        match self {
            DrawType::Wrap => "wrap",
            DrawType::WheelWrap => "wheel_wrap",
            DrawType::BroadwayWrap => "broadway_wrap",
            DrawType::OpenEnded => "open_ended",
            DrawType::DoubleGutshot => "double_gutshot",
            DrawType::Gutshot => "gutshot",
        }
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archetype(s: &str) -> FlopArchetype {
        FlopArchetype::classify(&s.parse().expect("valid flop"))
    }

    #[test]
    fn archetype_priority_order() {
        assert_eq!(archetype("222"), FlopArchetype::Trips);
        // Paired outranks Wheel Draw for ace-low paired boards
        assert_eq!(archetype("AA2"), FlopArchetype::Paired);
        assert_eq!(archetype("A55"), FlopArchetype::Paired);
        assert_eq!(archetype("A23"), FlopArchetype::WheelDraw);
        assert_eq!(archetype("A45"), FlopArchetype::WheelDraw);
        assert_eq!(archetype("456"), FlopArchetype::Connected);
        assert_eq!(archetype("QKA"), FlopArchetype::Connected);
        assert_eq!(archetype("45J"), FlopArchetype::OneGapper);
        assert_eq!(archetype("79T"), FlopArchetype::OneGapper);
        assert_eq!(archetype("579"), FlopArchetype::TwoGapper);
        assert_eq!(archetype("57K"), FlopArchetype::TwoGapper);
        assert_eq!(archetype("28K"), FlopArchetype::Ragged);
    }

    #[test]
    fn ace_high_without_wheel_card_is_not_wheel_draw() {
        assert_eq!(archetype("A69"), FlopArchetype::Ragged);
        assert_eq!(archetype("A7T"), FlopArchetype::Ragged);
    }

    #[test]
    fn draw_type_by_out_rank_count() {
        let flop: Flop = "45J".parse().unwrap();
        assert_eq!(DrawType::classify(&flop, &[Rank::Eight]), DrawType::Gutshot);
        assert_eq!(
            DrawType::classify(&flop, &[Rank::Seven, Rank::Eight]),
            DrawType::OpenEnded
        );
        assert_eq!(
            DrawType::classify(&flop, &[Rank::Three, Rank::Eight]),
            DrawType::DoubleGutshot
        );
        assert_eq!(
            DrawType::classify(&flop, &[Rank::Three, Rank::Seven, Rank::Eight]),
            DrawType::Wrap
        );
    }

    #[test]
    fn wrap_refinements() {
        let wheelish: Flop = "AA2".parse().unwrap();
        let wrap3 = [Rank::Three, Rank::Four, Rank::Five];
        assert_eq!(DrawType::classify(&wheelish, &wrap3), DrawType::WheelWrap);

        let broadway: Flop = "9TJ".parse().unwrap();
        let wrap_high = [Rank::Seven, Rank::Eight, Rank::Queen];
        assert_eq!(DrawType::classify(&broadway, &wrap_high), DrawType::BroadwayWrap);

        // An ace-high flop without a wheel card is broadway, not wheel
        let ace_high: Flop = "9TA".parse().unwrap();
        assert_eq!(DrawType::classify(&ace_high, &wrap_high), DrawType::BroadwayWrap);
    }

    #[test]
    fn labels_match_contract() {
        assert_eq!(FlopArchetype::WheelDraw.to_string(), "Wheel Draw");
        assert_eq!(FlopArchetype::OneGapper.to_string(), "One-Gapper");
        assert_eq!(DrawType::OpenEnded.to_string(), "open ended");
        assert_eq!(DrawType::WheelWrap.slug(), "wheel_wrap");
    }
}
