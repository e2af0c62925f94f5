use crate::{joker_def, JokerId, RngState, ShopRule, JOKER_CATALOG};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShopOffer {
    pub id: JokerId,
    pub price: i64,
}

/// The current offer set. Replaced wholesale on every roll; purchases remove
/// an offer without backfilling it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
}

impl ShopState {
    /// Up to `offer_slots` distinct catalog entries, uniform without
    /// replacement.
    pub fn roll(rule: &ShopRule, rng: &mut RngState) -> Self {
        let mut indices: Vec<usize> = (0..JOKER_CATALOG.len()).collect();
        rng.shuffle(&mut indices);
        indices.truncate(rule.offer_slots);
        let offers = indices
            .into_iter()
            .map(|index| {
                let def = &JOKER_CATALOG[index];
                ShopOffer {
                    id: def.id,
                    price: def.cost,
                }
            })
            .collect();
        Self { offers }
    }

    pub fn offer(&self, index: usize) -> Option<&ShopOffer> {
        self.offers.get(index)
    }

    pub fn take(&mut self, index: usize) -> Option<ShopOffer> {
        if index >= self.offers.len() {
            return None;
        }
        Some(self.offers.remove(index))
    }

    pub fn describe(&self, index: usize) -> Option<(&'static str, &'static str, i64)> {
        self.offer(index).map(|offer| {
            let def = joker_def(offer.id);
            (def.name, def.description, offer.price)
        })
    }
}
