#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = dough::card::mask_card(s);
        let _ = dough::card::mask_ach_account(s);
        let _ = dough::card::is_valid_luhn(s);
        let _ = dough::card::detect_card_network(s);
        let _ = dough::date::parse_expiry(s);
        let _ = dough::postal::is_valid_postal_code("GB", s);
    }
});
