//! Terminal blackjack table driven by a `DeckSupplier`.

use std::io::{self, Write};

use bjdeck::{Card, DeckSupplier, Rank};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
    Draw,
}

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    losses: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    println!("Blackjack (H=hit, S=stand, Q=quit)");

    let mut supplier = DeckSupplier::initialize();
    let mut tally = Tally::default();

    loop {
        let Some(outcome) = play_round(&mut supplier) else {
            break;
        };

        match outcome {
            Outcome::Won => tally.wins += 1,
            Outcome::Lost => tally.losses += 1,
            Outcome::Draw => {}
        }
        print_stats(&tally);
        print_banner(outcome);

        if !wait_for_continue() {
            break;
        }
    }

    println!("Goodbye.");
}

/// Plays one round. Returns `None` if the player quits.
fn play_round(supplier: &mut DeckSupplier) -> Option<Outcome> {
    let mut player = vec![supplier.draw_card(), supplier.draw_card()];
    let mut dealer = vec![supplier.draw_card(), supplier.draw_card()];

    loop {
        print_table(&dealer, &player, false);

        if hand_value(&player) > 21 {
            print_table(&dealer, &player, true);
            return Some(Outcome::Lost);
        }
        if hand_value(&player) == 21 {
            break;
        }

        match prompt_line("Action: ").as_str() {
            "h" | "hit" => player.push(supplier.draw_card()),
            "s" | "stand" => break,
            "q" | "quit" => return None,
            _ => println!("Unknown action."),
        }
    }

    while hand_value(&dealer) < 17 {
        dealer.push(supplier.draw_card());
    }
    print_table(&dealer, &player, true);

    Some(settle(hand_value(&player), hand_value(&dealer)))
}

const fn settle(player: u8, dealer: u8) -> Outcome {
    if dealer > 21 || player > dealer {
        Outcome::Won
    } else if player < dealer {
        Outcome::Lost
    } else {
        Outcome::Draw
    }
}

const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        pip => pip.value(),
    }
}

fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }
    value
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn wait_for_continue() -> bool {
    loop {
        match prompt_line("Enter C to continue: ").as_str() {
            "c" => return true,
            "q" => return false,
            _ => {}
        }
    }
}

fn print_table(dealer: &[Card], player: &[Card], reveal: bool) {
    println!();
    println!(
        "{}{}{}",
        colorize("Dealer", "34"),
        " ".repeat(14),
        colorize("Player", "34")
    );

    let rows = dealer.len().max(player.len());
    for row in 0..rows {
        let dealer_cell = match dealer.get(row) {
            Some(_) if row == 1 && !reveal => "? ?".to_string(),
            Some(card) => format_card(card),
            None => String::new(),
        };
        let player_cell = player.get(row).map(format_card).unwrap_or_default();
        // Pad on the visible width; escape codes would throw off `{:<n}`.
        let padding = 20usize.saturating_sub(visible_width(dealer_cell.as_str()));
        println!("{dealer_cell}{}{player_cell}", " ".repeat(padding));
    }

    let dealer_total = if reveal {
        hand_value(dealer).to_string()
    } else {
        "?".to_string()
    };
    println!("({dealer_total}){}({})", " ".repeat(16), hand_value(player));
}

fn print_stats(tally: &Tally) {
    println!();
    println!("{}", colorize(&format!("Wins:   {:>4}", tally.wins), "34"));
    println!("{}", colorize(&format!("Losses: {:>4}", tally.losses), "34"));
}

fn print_banner(outcome: Outcome) {
    let message = match outcome {
        Outcome::Won => "YOU WON!",
        Outcome::Lost => "YOU LOST",
        Outcome::Draw => "DRAW",
    };
    println!("{}", colorize("+------------------------+", "31"));
    println!("{}", colorize(&format!("|{message:^24}|"), "31"));
    println!("{}", colorize("+------------------------+", "31"));
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "30" };
    colorize(
        &format!("{} {}", card.rank.symbol(), card.suit.glyph()),
        color_code,
    )
}

fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        match ch {
            '\u{1b}' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => width += 1,
        }
    }
    width
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
