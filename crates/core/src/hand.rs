use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Straight Flush",
        }
    }
}

/// Classification result. The flags are the raw detection outcomes, not
/// derived from `kind`: a straight flush still reports both `is_flush` and
/// `is_straight`, which is what modifier conditions key on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandEval {
    pub kind: HandKind,
    pub is_flush: bool,
    pub is_straight: bool,
    pub high_value: u8,
}

impl HandEval {
    pub fn pair_like(&self) -> bool {
        matches!(
            self.kind,
            HandKind::Pair | HandKind::TwoPair | HandKind::Trips
        )
    }
}

/// Classifies 1-5 cards. Total over its domain: fewer than five cards simply
/// fail the multi-card categories and fall through.
pub fn evaluate_hand(cards: &[Card]) -> HandEval {
    debug_assert!(!cards.is_empty() && cards.len() <= 5);
    if cards.is_empty() {
        return HandEval {
            kind: HandKind::HighCard,
            is_flush: false,
            is_straight: false,
            high_value: 0,
        };
    }

    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable();
    let high_value = values.last().copied().unwrap_or(0);

    let mut rank_counts: HashMap<u8, usize> = HashMap::new();
    for value in &values {
        *rank_counts.entry(*value).or_insert(0) += 1;
    }
    let mut groups: Vec<usize> = rank_counts.values().copied().collect();
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.len() == 5 && cards.iter().all(|card| card.suit == cards[0].suit);
    let mut distinct = values.clone();
    distinct.dedup();
    let is_straight = is_straight_values(&distinct);

    let kind = if is_straight && is_flush && values.contains(&14) {
        HandKind::RoyalFlush
    } else if is_straight && is_flush {
        HandKind::StraightFlush
    } else if groups[0] == 4 {
        HandKind::Quads
    } else if groups[0] == 3 && groups.get(1).copied().unwrap_or(0) >= 2 {
        HandKind::FullHouse
    } else if is_flush {
        HandKind::Flush
    } else if is_straight {
        HandKind::Straight
    } else if groups[0] == 3 {
        HandKind::Trips
    } else if groups[0] == 2 && groups.get(1).copied().unwrap_or(0) == 2 {
        HandKind::TwoPair
    } else if groups[0] == 2 {
        HandKind::Pair
    } else {
        HandKind::HighCard
    };

    HandEval {
        kind,
        is_flush,
        is_straight,
        high_value,
    }
}

/// Five distinct consecutive values, or the wheel {14,2,3,4,5}.
fn is_straight_values(distinct: &[u8]) -> bool {
    if distinct.len() < 5 {
        return false;
    }
    for window in distinct.windows(5) {
        if window.windows(2).all(|pair| pair[1] == pair[0] + 1) {
            return true;
        }
    }
    [14u8, 2, 3, 4, 5]
        .iter()
        .all(|value| distinct.contains(value))
}
