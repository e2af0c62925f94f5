use crate::{HandKind, JokerId};
use serde::{Deserialize, Serialize};

/// Structured notifications for the presentation layer. The core never
/// prints; collaborators drain the bus and render however they like.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        target: i64,
        plays: u8,
        discards: u8,
    },
    CardsDrawn { count: usize },
    DeckReshuffled { count: usize },
    HandScored {
        kind: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
    },
    BlindCleared { score: i64, reward: i64, money: i64 },
    RoundFailed {
        score: i64,
        penalty: i64,
        money: i64,
    },
    CardsDiscarded { count: usize },
    ShopRolled { offers: usize },
    ShopRerolled { cost: i64, money: i64 },
    JokerBought {
        id: JokerId,
        cost: i64,
        money: i64,
    },
    RoundAdvanced { round: u32, target: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
