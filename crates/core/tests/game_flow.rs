use blindrush_core::{
    Deck, Event, EventBus, GameConfig, GameError, GameSession, JokerId, Rank, Suit,
};
use std::collections::HashSet;

fn new_session(seed: u64) -> (GameSession, EventBus) {
    let mut events = EventBus::default();
    let mut session = GameSession::new(GameConfig::standard(), seed);
    session.start(&mut events);
    events.drain().count();
    (session, events)
}

fn select_first(session: &mut GameSession) {
    let id = session.hand[0].id;
    session.toggle_select(id).unwrap();
}

#[test]
fn standard_deck_is_complete() {
    let deck = Deck::standard52();
    assert_eq!(deck.draw.len(), 52);
    assert_eq!(deck.discard.len(), 0);

    let ids: HashSet<u32> = deck.draw.iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), 52);

    let pairs: HashSet<(Suit, Rank)> = deck.draw.iter().map(|card| (card.suit, card.rank)).collect();
    assert_eq!(pairs.len(), 52);
}

#[test]
fn initial_deal_fills_hand_and_shop() {
    let (session, _) = new_session(7);
    assert_eq!(session.hand.len(), 8);
    assert_eq!(session.deck.draw.len(), 44);
    assert_eq!(session.total_cards(), 52);
    assert_eq!(session.shop.offers.len(), 3);
    assert_eq!(session.state.round, 1);
    assert_eq!(session.state.target, 400);
    assert_eq!(session.state.money, 8);
    assert_eq!(session.state.plays_left, 4);
    assert_eq!(session.state.discards_left, 3);
}

#[test]
fn empty_selection_is_rejected_without_mutation() {
    let (mut session, mut events) = new_session(7);
    let hand_before: Vec<u32> = session.hand.iter().map(|card| card.id).collect();
    let deck_before = session.deck.draw.len();
    let discard_before = session.deck.discard.len();

    let err = session.play(&mut events).unwrap_err();
    assert!(matches!(err, GameError::EmptySelection));
    let err = session.discard(&mut events).unwrap_err();
    assert!(matches!(err, GameError::EmptySelection));

    let hand_after: Vec<u32> = session.hand.iter().map(|card| card.id).collect();
    assert_eq!(hand_before, hand_after);
    assert_eq!(session.deck.draw.len(), deck_before);
    assert_eq!(session.deck.discard.len(), discard_before);
    assert_eq!(session.state.round_score, 0);
    assert_eq!(session.state.plays_left, 4);
    assert_eq!(session.state.discards_left, 3);
    assert_eq!(events.drain().count(), 0);
}

#[test]
fn selection_is_capped_at_five() {
    let (mut session, _) = new_session(7);
    let ids: Vec<u32> = session.hand.iter().map(|card| card.id).collect();
    for id in &ids[..5] {
        assert!(session.toggle_select(*id).unwrap());
    }
    let err = session.toggle_select(ids[5]).unwrap_err();
    assert!(matches!(err, GameError::SelectionLimit(5)));

    // Toggling a selected card off frees a slot.
    assert!(!session.toggle_select(ids[0]).unwrap());
    assert!(session.toggle_select(ids[5]).unwrap());
}

#[test]
fn selecting_a_card_not_in_hand_is_rejected() {
    let (mut session, _) = new_session(7);
    let err = session.toggle_select(9999).unwrap_err();
    assert!(matches!(err, GameError::UnknownCard(9999)));
}

#[test]
fn play_moves_cards_scores_and_refills() {
    let (mut session, mut events) = new_session(7);
    select_first(&mut session);
    let breakdown = session.play(&mut events).unwrap();

    assert!(breakdown.total > 0);
    assert_eq!(session.state.round_score, breakdown.total);
    assert_eq!(session.state.plays_left, 3);
    assert_eq!(session.hand.len(), 8);
    assert_eq!(session.deck.discard.len(), 1);
    assert!(session.selected.is_empty());
    assert_eq!(session.total_cards(), 52);

    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::HandScored { .. })));
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::CardsDrawn { count: 1 })));
}

#[test]
fn playing_with_no_plays_left_is_rejected() {
    let (mut session, mut events) = new_session(7);
    session.state.plays_left = 0;
    select_first(&mut session);
    let err = session.play(&mut events).unwrap_err();
    assert!(matches!(err, GameError::NoPlaysLeft));
}

#[test]
fn discarding_with_no_discards_left_is_rejected() {
    let (mut session, mut events) = new_session(7);
    session.state.discards_left = 0;
    select_first(&mut session);
    let err = session.discard(&mut events).unwrap_err();
    assert!(matches!(err, GameError::NoDiscardsLeft));
}

#[test]
fn card_count_is_conserved_through_reshuffles() {
    let (mut session, mut events) = new_session(11);
    session.state.discards_left = 60;

    let mut saw_reshuffle = false;
    for _ in 0..50 {
        select_first(&mut session);
        session.discard(&mut events).unwrap();
        assert_eq!(session.total_cards(), 52);
        assert_eq!(session.hand.len(), 8);
        for event in events.drain() {
            if let Event::DeckReshuffled { count } = event {
                saw_reshuffle = true;
                assert!(count > 0);
            }
        }
        if saw_reshuffle {
            break;
        }
    }
    assert!(saw_reshuffle, "draw pile never emptied in 50 discards");
    assert_eq!(session.total_cards(), 52);
}

#[test]
fn crossing_the_target_awards_money_once() {
    let (mut session, mut events) = new_session(7);
    session.state.target = 1;

    select_first(&mut session);
    session.play(&mut events).unwrap();
    // 4 + round 1.
    assert_eq!(session.state.money, 13);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::BlindCleared { reward: 5, .. })));

    // Still cleared; a further play pays nothing extra.
    select_first(&mut session);
    session.play(&mut events).unwrap();
    assert_eq!(session.state.money, 13);
    let drained: Vec<Event> = events.drain().collect();
    assert!(!drained
        .iter()
        .any(|event| matches!(event, Event::BlindCleared { .. })));
}

#[test]
fn exhausting_plays_below_target_resets_with_penalty() {
    let (mut session, mut events) = new_session(7);
    session.state.target = i64::MAX;
    session.state.plays_left = 1;

    select_first(&mut session);
    session.play(&mut events).unwrap();

    assert_eq!(session.state.plays_left, 4);
    assert_eq!(session.state.discards_left, 3);
    assert_eq!(session.state.round_score, 0);
    assert_eq!(session.state.money, 6);
    assert_eq!(session.hand.len(), 8);
    assert_eq!(session.total_cards(), 52);

    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::RoundFailed { penalty: 2, money: 6, .. })));
}

#[test]
fn fail_penalty_never_drives_money_negative() {
    let (mut session, mut events) = new_session(7);
    session.state.target = i64::MAX;
    session.state.plays_left = 1;
    session.state.money = 1;

    select_first(&mut session);
    session.play(&mut events).unwrap();
    assert_eq!(session.state.money, 0);
}

#[test]
fn advance_round_requires_target() {
    let (mut session, mut events) = new_session(7);
    let err = session.advance_round(&mut events).unwrap_err();
    assert!(matches!(err, GameError::TargetNotMet));
    assert_eq!(session.state.round, 1);
    assert_eq!(session.state.target, 400);

    session.state.round_score = 400;
    session.state.plays_left = 1;
    session.state.discards_left = 0;
    session.advance_round(&mut events).unwrap();

    assert_eq!(session.state.round, 2);
    assert_eq!(session.state.target, 580);
    assert_eq!(session.state.round_score, 0);
    assert_eq!(session.state.plays_left, 4);
    assert_eq!(session.state.discards_left, 3);
    assert_eq!(session.shop.offers.len(), 3);

    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::RoundAdvanced { round: 2, target: 580 })));
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::ShopRolled { .. })));
}

#[test]
fn shop_refresh_costs_one() {
    let (mut session, mut events) = new_session(7);
    session.refresh_shop(&mut events).unwrap();
    assert_eq!(session.state.money, 7);
    assert_eq!(session.shop.offers.len(), 3);

    session.state.money = 0;
    let err = session.refresh_shop(&mut events).unwrap_err();
    assert!(matches!(err, GameError::NotEnoughMoney));
    assert_eq!(session.state.money, 0);
}

#[test]
fn buying_jokers_preserves_acquisition_order() {
    let (mut session, mut events) = new_session(7);
    session.state.money = 100;

    let first = session.shop.offers[0].id;
    let second = session.shop.offers[1].id;
    let first_price = session.shop.offers[0].price;

    session.buy_joker(0, &mut events).unwrap();
    assert_eq!(session.state.money, 100 - first_price);
    assert_eq!(session.shop.offers.len(), 2);

    session.buy_joker(0, &mut events).unwrap();
    assert_eq!(session.shop.offers.len(), 1);

    let owned: Vec<JokerId> = session.inventory.jokers.iter().map(|j| j.id).collect();
    assert_eq!(owned, vec![first, second]);
}

#[test]
fn buy_rejections_leave_state_unchanged() {
    let (mut session, mut events) = new_session(7);

    let err = session.buy_joker(5, &mut events).unwrap_err();
    assert!(matches!(err, GameError::InvalidOfferIndex));

    session.state.money = 0;
    let offers_before = session.shop.offers.len();
    let err = session.buy_joker(0, &mut events).unwrap_err();
    assert!(matches!(err, GameError::NotEnoughMoney));
    assert_eq!(session.shop.offers.len(), offers_before);
    assert!(session.inventory.jokers.is_empty());

    session.state.money = 100;
    session.inventory.add_joker(JokerId::ChipHoarder, 4).unwrap();
    session.inventory.add_joker(JokerId::EvenKeel, 5).unwrap();
    session.inventory.add_joker(JokerId::PairPatron, 5).unwrap();
    let err = session.buy_joker(0, &mut events).unwrap_err();
    assert!(matches!(err, GameError::Inventory(_)));
    assert_eq!(session.shop.offers.len(), offers_before);
    assert_eq!(session.state.money, 100);
}

#[test]
fn owned_jokers_shape_the_played_score() {
    let (mut session, mut events) = new_session(7);
    session.inventory.add_joker(JokerId::ChipHoarder, 4).unwrap();
    session.inventory.add_joker(JokerId::EvenKeel, 5).unwrap();

    select_first(&mut session);
    let breakdown = session.play(&mut events).unwrap();
    assert_eq!(breakdown.scored.chips, breakdown.base.chips + 60);
    assert_eq!(breakdown.scored.mult, breakdown.base.mult + 1.0);
    assert_eq!(
        breakdown.total,
        (breakdown.scored.chips as f64 * breakdown.scored.mult).floor() as i64
    );
}
