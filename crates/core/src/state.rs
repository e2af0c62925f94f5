use crate::GameConfig;
use serde::{Deserialize, Serialize};

/// Round counters and the wallet. Budgets reset every round transition;
/// `money` persists across rounds and never drops below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub round: u32,
    pub target: i64,
    pub round_score: i64,
    pub plays_left: u8,
    pub discards_left: u8,
    pub plays_max: u8,
    pub discards_max: u8,
    pub hand_size: usize,
    pub money: i64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            round: 1,
            target: config.round.starting_target,
            round_score: 0,
            plays_left: config.round.plays,
            discards_left: config.round.discards,
            plays_max: config.round.plays,
            discards_max: config.round.discards,
            hand_size: config.round.hand_size,
            money: config.economy.starting_money,
        }
    }

    pub fn cleared(&self) -> bool {
        self.round_score >= self.target
    }

    pub fn reset_budgets(&mut self) {
        self.plays_left = self.plays_max;
        self.discards_left = self.discards_max;
    }
}
