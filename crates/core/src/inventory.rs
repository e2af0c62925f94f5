use crate::JokerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JokerInstance {
    pub id: JokerId,
    pub buy_price: i64,
}

/// Acquired jokers. Append-only until capacity; vector order is acquisition
/// order, which is also effect application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub joker_slots: usize,
    pub jokers: Vec<JokerInstance>,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("no joker slots")]
    NoJokerSlots,
}

impl Inventory {
    pub fn with_slots(joker_slots: usize) -> Self {
        Self {
            joker_slots,
            jokers: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.jokers.len() >= self.joker_slots
    }

    pub fn add_joker(&mut self, id: JokerId, buy_price: i64) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::NoJokerSlots);
        }
        self.jokers.push(JokerInstance { id, buy_price });
        Ok(())
    }
}
