use blindrush_core::{
    joker_def, Event, EventBus, GameConfig, GameSession, RngState, ScoreBreakdown,
};
use std::io::{self, BufRead, Write};

fn main() {
    let seed = parse_seed(std::env::args().skip(1)).unwrap_or_else(|| RngState::from_entropy().seed());
    let mut events = EventBus::default();
    let mut session = GameSession::new(GameConfig::standard(), seed);
    session.start(&mut events);

    println!("blindrush (seed {seed}) — type 'help' for commands");
    flush_events(&mut events);
    print_status(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = words.first() else {
            continue;
        };
        match command {
            "quit" | "exit" | "q" => break,
            "help" | "?" => print_help(),
            "status" | "st" => print_status(&session),
            "hand" | "h" => print_hand(&session),
            "jokers" | "inv" => print_jokers(&session),
            "shop" | "sh" => print_shop(&session),
            "select" | "s" => select(&mut session, &words[1..]),
            "play" | "p" => match session.play(&mut events) {
                Ok(breakdown) => {
                    print_breakdown(&breakdown);
                    flush_events(&mut events);
                    print_status(&session);
                }
                Err(err) => println!("{err}"),
            },
            "discard" | "d" => match session.discard(&mut events) {
                Ok(count) => {
                    println!("discarded {count} card(s)");
                    flush_events(&mut events);
                }
                Err(err) => println!("{err}"),
            },
            "draw" => {
                session.draw_to_fill(&mut events);
                flush_events(&mut events);
            }
            "buy" | "b" => buy(&mut session, &mut events, &words[1..]),
            "reroll" | "r" => match session.refresh_shop(&mut events) {
                Ok(()) => {
                    flush_events(&mut events);
                    print_shop(&session);
                }
                Err(err) => println!("{err}"),
            },
            "next" | "n" => match session.advance_round(&mut events) {
                Ok(()) => {
                    flush_events(&mut events);
                    print_status(&session);
                }
                Err(err) => println!("{err}"),
            },
            other => println!("unknown command '{other}', try 'help'"),
        }
    }
}

fn parse_seed(mut args: impl Iterator<Item = String>) -> Option<u64> {
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|value| value.parse().ok());
        }
        if let Some(value) = arg.strip_prefix("--seed=") {
            return value.parse().ok();
        }
    }
    None
}

fn select(session: &mut GameSession, args: &[&str]) {
    if args.is_empty() {
        println!("usage: select <hand positions, 1-based>");
        return;
    }
    for arg in args {
        let Ok(position) = arg.parse::<usize>() else {
            println!("not a hand position: {arg}");
            continue;
        };
        let Some(card) = session.hand.get(position.saturating_sub(1)).copied() else {
            println!("no card at position {position}");
            continue;
        };
        match session.toggle_select(card.id) {
            Ok(true) => println!("selected {card}"),
            Ok(false) => println!("deselected {card}"),
            Err(err) => println!("{err}"),
        }
    }
    print_hand(session);
}

fn buy(session: &mut GameSession, events: &mut EventBus, args: &[&str]) {
    let Some(index) = args.first().and_then(|arg| arg.parse::<usize>().ok()) else {
        println!("usage: buy <offer number, 1-based>");
        return;
    };
    match session.buy_joker(index.saturating_sub(1), events) {
        Ok(_) => flush_events(events),
        Err(err) => println!("{err}"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  status            round, target, score, money, budgets");
    println!("  hand              held cards (selection marked with *)");
    println!("  select <n...>     toggle cards by hand position");
    println!("  play              score the selected cards");
    println!("  discard           throw away the selected cards");
    println!("  draw              top the hand back up to 8");
    println!("  jokers            owned jokers, in application order");
    println!("  shop / buy <n> / reroll");
    println!("  next              advance to the next round (needs target)");
    println!("  quit");
}

fn print_status(session: &GameSession) {
    let state = &session.state;
    println!(
        "round {} | target {} | score {} | money {} | plays {} | discards {} | draw {} | discard pile {}",
        state.round,
        state.target,
        state.round_score,
        state.money,
        state.plays_left,
        state.discards_left,
        session.deck.draw.len(),
        session.deck.discard.len(),
    );
}

fn print_hand(session: &GameSession) {
    let rendered: Vec<String> = session
        .hand
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let marker = if session.selected.contains(&card.id) {
                "*"
            } else {
                ""
            };
            format!("{}:{}{}", index + 1, card, marker)
        })
        .collect();
    println!("hand: {}", rendered.join(" "));
}

fn print_jokers(session: &GameSession) {
    if session.inventory.jokers.is_empty() {
        println!("no jokers owned");
        return;
    }
    for (index, joker) in session.inventory.jokers.iter().enumerate() {
        let def = joker_def(joker.id);
        println!("{}: {} — {}", index + 1, def.name, def.description);
    }
}

fn print_shop(session: &GameSession) {
    if session.shop.offers.is_empty() {
        println!("shop is sold out; reroll or advance the round");
        return;
    }
    for index in 0..session.shop.offers.len() {
        if let Some((name, description, price)) = session.shop.describe(index) {
            println!("{}: {} ({}$) — {}", index + 1, name, price, description);
        }
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "{}: {} x {:.2} = {}",
        breakdown.kind.display_name(),
        breakdown.scored.chips,
        breakdown.scored.mult,
        breakdown.total,
    );
}

fn flush_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::RoundStarted {
                round,
                target,
                plays,
                discards,
            } => println!("round {round} started: target {target}, {plays} plays, {discards} discards"),
            Event::CardsDrawn { count } => println!("drew {count} card(s)"),
            Event::DeckReshuffled { count } => {
                println!("draw pile empty; reshuffled {count} card(s) from the discard pile")
            }
            Event::HandScored { .. } => {}
            Event::BlindCleared { reward, money, .. } => {
                println!("target reached! +{reward}$ (now {money}$)")
            }
            Event::RoundFailed { penalty, money, .. } => {
                println!("out of plays below target: -{penalty}$ (now {money}$), round reset")
            }
            Event::CardsDiscarded { .. } => {}
            Event::ShopRolled { offers } => println!("shop stocked with {offers} offer(s)"),
            Event::ShopRerolled { cost, money } => println!("shop rerolled (-{cost}$, now {money}$)"),
            Event::JokerBought { id, cost, money } => println!(
                "bought {} (-{cost}$, now {money}$)",
                joker_def(id).name
            ),
            Event::RoundAdvanced { round, target } => {
                println!("entering round {round}; new target {target}")
            }
        }
    }
}
