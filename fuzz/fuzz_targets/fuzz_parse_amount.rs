#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine.
        for code in ["USD", "EUR", "JPY", "BHD", "CLF", "DKK"] {
            let _ = dough::currency::parse_to_minor_units(s, code, false);
            let _ = dough::currency::parse_to_minor_units(s, code, true);
        }
    }
});
