//! Format and parse the same amount in a handful of currencies.
//!
//! Run with: `cargo run --example format_amounts`

use dough::currency::{
    FormatStyle, format_minor_units, format_minor_units_as, parse_to_minor_units,
    resolve_by_alpha,
};
use dough::rounding::{RoundingPolicy, percentage_of_minor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let amount = 1_234_567;

    for code in ["USD", "EUR", "JPY", "CHF", "SEK", "BHD"] {
        let label = resolve_by_alpha(code)?.to_string();
        let text = format_minor_units(amount, code)?;
        let alpha = format_minor_units_as(amount, code, FormatStyle::Alpha)?;
        let back = parse_to_minor_units(&text, code, false)?;
        println!("{label:<28} {text:>18} {alpha:>20} -> {back}");
    }

    let tax = percentage_of_minor(amount, 8.875, 0, RoundingPolicy::BankersRound)?;
    println!("8.875% of {amount} minor units = {tax}");

    Ok(())
}
