#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, i64)| {
    let (idx, amount) = input;
    let currencies = dough::currency::currencies();
    let meta = &currencies[usize::from(idx) % currencies.len()];

    let text = dough::currency::format_with(amount, meta);
    assert_eq!(
        dough::currency::parse_with(&text, meta, false),
        Ok(amount),
        "{} {text}",
        meta.alpha
    );
});
