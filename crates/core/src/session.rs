use crate::{
    evaluate_hand, joker_def, Card, Deck, Event, EventBus, GameConfig, GameState, Inventory,
    InventoryError, JokerId, RngState, ScoreBreakdown, ScoreTables, ScoringContext, ShopState,
};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no cards selected")]
    EmptySelection,
    #[error("selection is limited to {0} cards")]
    SelectionLimit(usize),
    #[error("card {0} is not in hand")]
    UnknownCard(u32),
    #[error("no plays left this round")]
    NoPlaysLeft,
    #[error("no discards left this round")]
    NoDiscardsLeft,
    #[error("not enough money")]
    NotEnoughMoney,
    #[error("round target not reached")]
    TargetNotMet,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// One game session owns every pile, counter, and acquisition. All commands
/// run to completion; a rejected command leaves the session untouched.
#[derive(Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub inventory: Inventory,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub selected: HashSet<u32>,
    pub state: GameState,
    pub shop: ShopState,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let tables = ScoreTables::from_config(&config);
        let inventory = Inventory::with_slots(config.shop.joker_slots);
        let state = GameState::new(&config);
        Self {
            config,
            tables,
            inventory,
            rng,
            deck,
            hand: Vec::new(),
            selected: HashSet::new(),
            state,
            shop: ShopState::default(),
        }
    }

    /// Initial deal and first shop roll.
    pub fn start(&mut self, events: &mut EventBus) {
        self.fill_hand(events);
        self.roll_shop(events);
        events.push(Event::RoundStarted {
            round: self.state.round,
            target: self.state.target,
            plays: self.state.plays_left,
            discards: self.state.discards_left,
        });
    }

    pub fn cleared(&self) -> bool {
        self.state.cleared()
    }

    pub fn total_cards(&self) -> usize {
        self.deck.total() + self.hand.len()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| self.selected.contains(&card.id))
            .copied()
            .collect()
    }

    /// Returns true when the card ends up selected, false when deselected.
    pub fn toggle_select(&mut self, card_id: u32) -> Result<bool, GameError> {
        if !self.hand.iter().any(|card| card.id == card_id) {
            return Err(GameError::UnknownCard(card_id));
        }
        if self.selected.remove(&card_id) {
            return Ok(false);
        }
        if self.selected.len() >= self.config.round.max_selection {
            return Err(GameError::SelectionLimit(self.config.round.max_selection));
        }
        self.selected.insert(card_id);
        Ok(true)
    }

    pub fn play(&mut self, events: &mut EventBus) -> Result<ScoreBreakdown, GameError> {
        let cards = self.selected_cards();
        if cards.is_empty() {
            return Err(GameError::EmptySelection);
        }
        if self.state.plays_left == 0 {
            return Err(GameError::NoPlaysLeft);
        }

        let eval = evaluate_hand(&cards);
        let base = self.tables.hand_base(&eval);
        let mut ctx = ScoringContext::new(&eval, base);
        for joker in &self.inventory.jokers {
            joker_def(joker.id).apply(&mut ctx);
        }
        let scored = ctx.score();
        let total = scored.total();

        let was_cleared = self.state.cleared();
        self.state.round_score += total;
        self.state.plays_left -= 1;
        self.move_selection_to_discard(cards);
        self.fill_hand(events);

        events.push(Event::HandScored {
            kind: eval.kind,
            chips: scored.chips,
            mult: scored.mult,
            total,
        });

        if !was_cleared && self.state.cleared() {
            let reward = self.config.economy.clear_reward_base + i64::from(self.state.round);
            self.state.money += reward;
            events.push(Event::BlindCleared {
                score: self.state.round_score,
                reward,
                money: self.state.money,
            });
        }

        if self.state.plays_left == 0 && !self.state.cleared() {
            self.fail_round(events);
        }

        Ok(ScoreBreakdown {
            kind: eval.kind,
            base,
            scored,
            total,
        })
    }

    pub fn discard(&mut self, events: &mut EventBus) -> Result<usize, GameError> {
        let cards = self.selected_cards();
        if cards.is_empty() {
            return Err(GameError::EmptySelection);
        }
        if self.state.discards_left == 0 {
            return Err(GameError::NoDiscardsLeft);
        }

        let count = cards.len();
        self.state.discards_left -= 1;
        self.move_selection_to_discard(cards);
        self.fill_hand(events);
        events.push(Event::CardsDiscarded { count });
        Ok(count)
    }

    pub fn advance_round(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        if !self.state.cleared() {
            return Err(GameError::TargetNotMet);
        }
        self.state.round += 1;
        self.state.target = (self.state.target as f64 * self.config.round.target_growth).floor()
            as i64;
        self.state.reset_budgets();
        self.state.round_score = 0;
        self.selected.clear();
        self.fill_hand(events);
        self.roll_shop(events);
        events.push(Event::RoundAdvanced {
            round: self.state.round,
            target: self.state.target,
        });
        Ok(())
    }

    pub fn refresh_shop(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        let cost = self.config.economy.reroll_cost;
        if self.state.money < cost {
            return Err(GameError::NotEnoughMoney);
        }
        self.state.money -= cost;
        self.roll_shop(events);
        events.push(Event::ShopRerolled {
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    pub fn buy_joker(&mut self, index: usize, events: &mut EventBus) -> Result<JokerId, GameError> {
        let price = self
            .shop
            .offer(index)
            .map(|offer| offer.price)
            .ok_or(GameError::InvalidOfferIndex)?;
        if self.inventory.is_full() {
            return Err(InventoryError::NoJokerSlots.into());
        }
        if self.state.money < price {
            return Err(GameError::NotEnoughMoney);
        }
        let offer = self.shop.take(index).ok_or(GameError::InvalidOfferIndex)?;
        self.state.money -= price;
        self.inventory.add_joker(offer.id, price)?;
        events.push(Event::JokerBought {
            id: offer.id,
            cost: price,
            money: self.state.money,
        });
        Ok(offer.id)
    }

    pub fn draw_to_fill(&mut self, events: &mut EventBus) {
        self.fill_hand(events);
    }

    fn roll_shop(&mut self, events: &mut EventBus) {
        self.shop = ShopState::roll(&self.config.shop, &mut self.rng);
        events.push(Event::ShopRolled {
            offers: self.shop.offers.len(),
        });
    }

    fn move_selection_to_discard(&mut self, cards: Vec<Card>) {
        let ids: HashSet<u32> = cards.iter().map(|card| card.id).collect();
        self.hand.retain(|card| !ids.contains(&card.id));
        self.deck.discard(cards);
        self.selected.clear();
    }

    /// Exhausting plays below the target is an automatic penalty transition,
    /// not a player action: money -2 (floored at 0), budgets and round score
    /// reset, hand topped back up.
    fn fail_round(&mut self, events: &mut EventBus) {
        let penalty = self.config.economy.fail_penalty;
        let score = self.state.round_score;
        self.state.money = (self.state.money - penalty).max(0);
        self.state.reset_budgets();
        self.state.round_score = 0;
        self.selected.clear();
        self.fill_hand(events);
        events.push(Event::RoundFailed {
            score,
            penalty,
            money: self.state.money,
        });
    }

    fn fill_hand(&mut self, events: &mut EventBus) {
        let mut drawn = 0usize;
        while self.hand.len() < self.state.hand_size {
            if self.deck.draw.is_empty() {
                if !self.deck.reshuffle_discard(&mut self.rng) {
                    break;
                }
                events.push(Event::DeckReshuffled {
                    count: self.deck.draw.len(),
                });
            }
            match self.deck.draw_one() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        if drawn > 0 {
            events.push(Event::CardsDrawn { count: drawn });
        }
        debug_assert_eq!(self.total_cards(), 52);
    }
}
