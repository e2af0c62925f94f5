use crate::{HandKind, ScoringContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerId {
    ChipHoarder,
    EvenKeel,
    FlushFanatic,
    PairPatron,
    HighCardHustler,
    StraightShooter,
}

impl JokerId {
    pub fn id(self) -> &'static str {
        match self {
            JokerId::ChipHoarder => "chip_hoarder",
            JokerId::EvenKeel => "even_keel",
            JokerId::FlushFanatic => "flush_fanatic",
            JokerId::PairPatron => "pair_patron",
            JokerId::HighCardHustler => "high_card_hustler",
            JokerId::StraightShooter => "straight_shooter",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum JokerCondition {
    Always,
    FlushPlayed,
    StraightPlayed,
    PairLikePlayed,
    Hand(HandKind),
}

/// Effects are a closed set of tagged operations so every joker is
/// enumerable and testable in isolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum JokerEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
}

#[derive(Debug, Clone, Copy)]
pub struct JokerDef {
    pub id: JokerId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: i64,
    pub condition: JokerCondition,
    pub effect: JokerEffect,
}

impl JokerDef {
    pub fn matches(&self, ctx: &ScoringContext) -> bool {
        match self.condition {
            JokerCondition::Always => true,
            JokerCondition::FlushPlayed => ctx.is_flush,
            JokerCondition::StraightPlayed => ctx.is_straight,
            JokerCondition::PairLikePlayed => ctx.pair_like,
            JokerCondition::Hand(kind) => ctx.kind == kind,
        }
    }

    pub fn apply(&self, ctx: &mut ScoringContext) {
        if !self.matches(ctx) {
            return;
        }
        match self.effect {
            JokerEffect::AddChips(amount) => ctx.chips += amount,
            JokerEffect::AddMult(amount) => ctx.mult += amount,
            JokerEffect::MultiplyMult(factor) => ctx.mult *= factor,
        }
    }
}

pub const JOKER_CATALOG: [JokerDef; 6] = [
    JokerDef {
        id: JokerId::ChipHoarder,
        name: "Chip Hoarder",
        description: "+60 chips",
        cost: 4,
        condition: JokerCondition::Always,
        effect: JokerEffect::AddChips(60),
    },
    JokerDef {
        id: JokerId::EvenKeel,
        name: "Even Keel",
        description: "+1 mult",
        cost: 5,
        condition: JokerCondition::Always,
        effect: JokerEffect::AddMult(1.0),
    },
    JokerDef {
        id: JokerId::FlushFanatic,
        name: "Flush Fanatic",
        description: "x1.5 mult when a flush is played",
        cost: 6,
        condition: JokerCondition::FlushPlayed,
        effect: JokerEffect::MultiplyMult(1.5),
    },
    JokerDef {
        id: JokerId::PairPatron,
        name: "Pair Patron",
        description: "+80 chips for a pair, two pair, or three of a kind",
        cost: 5,
        condition: JokerCondition::PairLikePlayed,
        effect: JokerEffect::AddChips(80),
    },
    JokerDef {
        id: JokerId::HighCardHustler,
        name: "High Card Hustler",
        description: "+120 chips when high card is played",
        cost: 6,
        condition: JokerCondition::Hand(HandKind::HighCard),
        effect: JokerEffect::AddChips(120),
    },
    JokerDef {
        id: JokerId::StraightShooter,
        name: "Straight Shooter",
        description: "+2 mult when a straight is played",
        cost: 6,
        condition: JokerCondition::StraightPlayed,
        effect: JokerEffect::AddMult(2.0),
    },
];

pub fn joker_def(id: JokerId) -> &'static JokerDef {
    // Catalog order follows the enum declaration order.
    let def = &JOKER_CATALOG[id as usize];
    debug_assert_eq!(def.id, id);
    def
}
