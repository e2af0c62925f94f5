use crate::{Card, Rank, RngState, Suit};

/// Draw and discard piles. The draw pile is a stack: drawing pops from the
/// end. Together with the held hand these always account for all 52 cards.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// One card per (suit, rank) pair, ids 1..=52.
    pub fn standard52() -> Self {
        let mut draw = Vec::with_capacity(52);
        let mut next_id = 1u32;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::new(next_id, suit, rank));
                next_id += 1;
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn draw_one(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    /// Folds the discard pile back into the draw pile and shuffles. Returns
    /// false when there was nothing to reshuffle.
    pub fn reshuffle_discard(&mut self, rng: &mut RngState) -> bool {
        if self.discard.is_empty() {
            return false;
        }
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
        true
    }

    pub fn total(&self) -> usize {
        self.draw.len() + self.discard.len()
    }
}
