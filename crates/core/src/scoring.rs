use crate::{GameConfig, HandEval, HandKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total(&self) -> i64 {
        (self.chips as f64 * self.mult).floor() as i64
    }
}

#[derive(Debug, Clone)]
pub struct ScoreTables {
    bases: HashMap<HandKind, (i64, f64)>,
    high_card_step: i64,
    high_card_floor: u8,
}

impl ScoreTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let mut bases = HashMap::new();
        for rule in &config.hands {
            bases.insert(rule.kind, (rule.base_chips, rule.base_mult));
        }
        Self {
            bases,
            high_card_step: config.scoring.high_card_step,
            high_card_floor: config.scoring.high_card_floor,
        }
    }

    /// Base score before any modifier runs. High Card scales with the
    /// highest played rank value; every other category is flat.
    pub fn hand_base(&self, eval: &HandEval) -> Score {
        let (mut chips, mult) = self
            .bases
            .get(&eval.kind)
            .copied()
            .unwrap_or_else(|| default_hand_base(eval.kind));
        if eval.kind == HandKind::HighCard {
            chips += self.high_card_step * i64::from(eval.high_value.max(self.high_card_floor));
        }
        Score { chips, mult }
    }
}

fn default_hand_base(kind: HandKind) -> (i64, f64) {
    match kind {
        HandKind::HighCard => (40, 1.0),
        HandKind::Pair => (80, 1.9),
        HandKind::TwoPair => (100, 2.2),
        HandKind::Trips => (120, 2.6),
        HandKind::Straight => (140, 3.2),
        HandKind::Flush => (150, 3.5),
        HandKind::FullHouse => (180, 4.0),
        HandKind::Quads => (230, 5.0),
        HandKind::StraightFlush => (260, 6.0),
        HandKind::RoyalFlush => (320, 8.0),
    }
}

/// Mutable scoring state threaded through the modifier pipeline. Effects
/// may touch `chips` and `mult`; the classification is read-only.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    pub chips: i64,
    pub mult: f64,
    pub kind: HandKind,
    pub is_flush: bool,
    pub is_straight: bool,
    pub pair_like: bool,
}

impl ScoringContext {
    pub fn new(eval: &HandEval, base: Score) -> Self {
        Self {
            chips: base.chips,
            mult: base.mult,
            kind: eval.kind,
            is_flush: eval.is_flush,
            is_straight: eval.is_straight,
            pair_like: eval.pair_like(),
        }
    }

    pub fn score(&self) -> Score {
        Score {
            chips: self.chips,
            mult: self.mult,
        }
    }
}

/// Structured result of a scored play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub kind: HandKind,
    pub base: Score,
    pub scored: Score,
    pub total: i64,
}
