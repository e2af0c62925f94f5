use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRule {
    pub kind: HandKind,
    pub base_chips: i64,
    pub base_mult: f64,
}

/// High Card is the one computed base: chips = base_chips + step * max(high
/// card value, floor).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringRule {
    pub high_card_step: i64,
    pub high_card_floor: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundRule {
    pub starting_target: i64,
    pub target_growth: f64,
    pub plays: u8,
    pub discards: u8,
    pub hand_size: usize,
    pub max_selection: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EconomyRule {
    pub starting_money: i64,
    pub clear_reward_base: i64,
    pub fail_penalty: i64,
    pub reroll_cost: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShopRule {
    pub offer_slots: usize,
    pub joker_slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub hands: Vec<HandRule>,
    pub scoring: ScoringRule,
    pub round: RoundRule,
    pub economy: EconomyRule,
    pub shop: ShopRule,
}

impl GameConfig {
    /// The standard rule set. The base chip/mult table is policy and games
    /// balanced against it expect these exact values.
    pub fn standard() -> Self {
        let hands = vec![
            hand_rule(HandKind::HighCard, 40, 1.0),
            hand_rule(HandKind::Pair, 80, 1.9),
            hand_rule(HandKind::TwoPair, 100, 2.2),
            hand_rule(HandKind::Trips, 120, 2.6),
            hand_rule(HandKind::Straight, 140, 3.2),
            hand_rule(HandKind::Flush, 150, 3.5),
            hand_rule(HandKind::FullHouse, 180, 4.0),
            hand_rule(HandKind::Quads, 230, 5.0),
            hand_rule(HandKind::StraightFlush, 260, 6.0),
            hand_rule(HandKind::RoyalFlush, 320, 8.0),
        ];
        Self {
            hands,
            scoring: ScoringRule {
                high_card_step: 4,
                high_card_floor: 10,
            },
            round: RoundRule {
                starting_target: 400,
                target_growth: 1.45,
                plays: 4,
                discards: 3,
                hand_size: 8,
                max_selection: 5,
            },
            economy: EconomyRule {
                starting_money: 8,
                clear_reward_base: 4,
                fail_penalty: 2,
                reroll_cost: 1,
            },
            shop: ShopRule {
                offer_slots: 3,
                joker_slots: 3,
            },
        }
    }

    pub fn hand_rule(&self, kind: HandKind) -> Option<&HandRule> {
        self.hands.iter().find(|rule| rule.kind == kind)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn hand_rule(kind: HandKind, base_chips: i64, base_mult: f64) -> HandRule {
    HandRule {
        kind,
        base_chips,
        base_mult,
    }
}
