#![cfg(feature = "card")]

use dough::card::*;

// ---------------------------------------------------------------------------
// Test card numbers published by the card networks and acquirers
// ---------------------------------------------------------------------------

const TEST_CARDS: &[(&str, CardNetwork)] = &[
    ("4111111111111111", CardNetwork::Visa),
    ("4457010000000009", CardNetwork::Visa),
    ("4457010100000008", CardNetwork::Visa),
    ("4457010140000141", CardNetwork::Visa),
    ("4457010200000247", CardNetwork::Visa),
    ("4100200300011001", CardNetwork::Visa),
    ("4100200300012009", CardNetwork::Visa),
    ("4100200300013007", CardNetwork::Visa),
    ("4100200310000002", CardNetwork::Visa),
    ("4024720001231239", CardNetwork::Visa),
    ("4457012400000001", CardNetwork::Visa),
    ("4457013200000001", CardNetwork::Visa),
    ("4457119922390123", CardNetwork::Visa),
    ("4457000300000007", CardNetwork::Visa),
    ("4457000100000009", CardNetwork::Visa),
    ("4457003100000003", CardNetwork::Visa),
    ("4457000400000006", CardNetwork::Visa),
    ("4457000200000008", CardNetwork::Visa),
    ("4457000800000002", CardNetwork::Visa),
    ("4457000900000001", CardNetwork::Visa),
    ("4457001000000008", CardNetwork::Visa),
    ("4005550000081019", CardNetwork::Visa),
    ("4000000000000002", CardNetwork::Visa),
    ("2223000148400010", CardNetwork::Mastercard),
    ("2223000048400011", CardNetwork::Mastercard),
    ("2223280062080010", CardNetwork::Mastercard),
    ("2222630061560019", CardNetwork::Mastercard),
    ("2222470061880012", CardNetwork::Mastercard),
    ("2222400061240016", CardNetwork::Mastercard),
    ("2222400041240011", CardNetwork::Mastercard),
    ("2223520063560019", CardNetwork::Mastercard),
    ("2223520043560014", CardNetwork::Mastercard),
    ("2222420040560011", CardNetwork::Mastercard),
    ("2222410040360017", CardNetwork::Mastercard),
    ("2223020040760014", CardNetwork::Mastercard),
    ("5112000100000003", CardNetwork::Mastercard),
    ("5112002100000009", CardNetwork::Mastercard),
    ("5112002200000008", CardNetwork::Mastercard),
    ("5112000200000002", CardNetwork::Mastercard),
    ("5112000300000001", CardNetwork::Mastercard),
    ("5112000400000000", CardNetwork::Mastercard),
    ("5112010400000009", CardNetwork::Mastercard),
    ("5112000600000008", CardNetwork::Mastercard),
    ("5112010000000003", CardNetwork::Mastercard),
    ("5112010100000002", CardNetwork::Mastercard),
    ("5112010140000004", CardNetwork::Mastercard),
    ("5154605300000121", CardNetwork::Mastercard),
    ("5167001020236549", CardNetwork::Mastercard),
    ("5500000254444445", CardNetwork::Mastercard),
    ("5592106621450897", CardNetwork::Mastercard),
    ("5590409551104142", CardNetwork::Mastercard),
    ("5587755665222179", CardNetwork::Mastercard),
    ("5445840176552850", CardNetwork::Mastercard),
    ("5390016478904678", CardNetwork::Mastercard),
    ("5112010201000109", CardNetwork::Mastercard),
    ("5112010202000108", CardNetwork::Mastercard),
    ("5194560012341234", CardNetwork::Mastercard),
    ("5435101234510196", CardNetwork::Mastercard),
    ("5407102010000018", CardNetwork::Mastercard),
    ("5112000900000005", CardNetwork::Mastercard),
    ("6759649826438453", CardNetwork::Mastercard),
    ("6011010000000003", CardNetwork::Discover),
    ("6011010100000002", CardNetwork::Discover),
    ("6011010140000004", CardNetwork::Discover),
    ("6011010000000003011", CardNetwork::Discover),
    ("6011010100000002011", CardNetwork::Discover),
    ("6011010140000000011", CardNetwork::Discover),
    ("375000026600004", CardNetwork::Amex),
    ("375001000000005", CardNetwork::Amex),
    ("375001010000003", CardNetwork::Amex),
    ("375001014000009", CardNetwork::Amex),
    ("341234567890127", CardNetwork::Amex),
    ("378734493671000", CardNetwork::Amex),
    ("3530111333300000", CardNetwork::Jcb),
    ("3566002020360505", CardNetwork::Jcb),
    ("3530111333300000332", CardNetwork::Jcb),
    ("3566002020360505005", CardNetwork::Jcb),
    ("30569309025904", CardNetwork::Diners),
    ("38520000023237", CardNetwork::Diners),
    ("3056930902590411014", CardNetwork::Diners),
    ("3852000002323711017", CardNetwork::Diners),
];

#[test]
fn every_test_card_passes_luhn() {
    for (number, _) in TEST_CARDS {
        assert!(is_valid_luhn(number), "{number} should pass the Luhn check");
    }
}

#[test]
fn every_test_card_is_detected() {
    for &(number, expected) in TEST_CARDS {
        assert_eq!(detect_card_network(number), Ok(expected), "{number}");
    }
}

#[test]
fn unknown_card_network() {
    assert_eq!(
        detect_card_network("1111111111111111"),
        Err(CardError::UnknownNetwork)
    );
}

#[test]
fn single_digit_change_breaks_luhn() {
    assert!(!is_valid_luhn("4111111111111112"));
    for (number, _) in TEST_CARDS {
        let mut bytes = number.as_bytes().to_vec();
        let last = bytes.len() - 1;
        bytes[last] = b'0' + (bytes[last] - b'0' + 1) % 10;
        let altered = String::from_utf8(bytes).unwrap();
        assert!(!is_valid_luhn(&altered), "{altered}");
    }
}

// ---------------------------------------------------------------------------
// Masking
// ---------------------------------------------------------------------------

#[test]
fn mask_test_cards_keeps_length() {
    for (number, _) in TEST_CARDS {
        let card = mask_card(number).unwrap();
        assert_eq!(card.masked.len(), number.len());
        assert!(number.starts_with(&card.first_six));
        assert!(number.ends_with(&card.last_four));
        assert_eq!(card.masked.matches('*').count(), number.len() - 10);
    }
}

#[test]
fn mask_card_too_short() {
    assert_eq!(mask_card("12345"), Err(CardError::CardTooShort(5)));
}

#[test]
fn mask_ach_accounts() {
    let cases = [
        ("8114460248", "81******48"),
        ("1113445648", "11******48"),
        ("4315460748", "43******48"),
    ];
    for (account, masked) in cases {
        assert_eq!(mask_ach_account(account).unwrap(), masked);
    }
    assert_eq!(mask_ach_account("123"), Err(CardError::AccountTooShort(3)));
}

#[test]
fn masked_card_serializes() {
    let card = mask_card("4111111111111111").unwrap();
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(
        json,
        r#"{"first_six":"411111","last_four":"1111","masked":"411111******1111"}"#
    );
}
