//! Inspect card numbers passed on the command line.
//!
//! Run with: `cargo run --example card_check --features card -- 4111111111111111`

use dough::card::{detect_card_network, is_valid_luhn, mask_card};

fn main() {
    let numbers: Vec<String> = std::env::args().skip(1).collect();
    if numbers.is_empty() {
        eprintln!("usage: card_check <number>...");
        std::process::exit(2);
    }

    for (idx, number) in numbers.iter().enumerate() {
        let masked = match mask_card(number) {
            Ok(card) => card.masked,
            Err(err) => {
                println!("#{idx}: {err}");
                continue;
            }
        };
        let network = detect_card_network(number)
            .map(|n| n.to_string())
            .unwrap_or_else(|_| "unknown".into());
        let luhn = if is_valid_luhn(number) { "valid" } else { "invalid" };
        println!("{masked}: {network}, checksum {luhn}");
    }
}
