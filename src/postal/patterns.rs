//! Postal code patterns keyed by ISO 3166-1 alpha-2 country code.
//!
//! `None` marks countries that do not use postal codes. Patterns are
//! anchored at compile time. Sorted for binary search.

pub(super) static POSTAL_PATTERNS: &[(&str, Option<&str>)] = &[
    ("AD", Some(r"AD\d{3}")),
    ("AE", None),
    ("AG", None),
    ("AM", Some(r"(37)?\d{4}")),
    ("AO", None),
    ("AR", Some(r"([A-HJ-NP-Z])?\d{4}([A-Z]{3})?")),
    ("AS", Some(r"96799")),
    ("AT", Some(r"\d{4}")),
    ("AU", Some(r"\d{4}")),
    ("AW", None),
    ("AX", Some(r"22\d{3}")),
    ("AZ", Some(r"\d{4}")),
    ("BA", Some(r"\d{5}")),
    ("BB", Some(r"(BB\d{5})?")),
    ("BD", Some(r"\d{4}")),
    ("BE", Some(r"\d{4}")),
    ("BG", Some(r"\d{4}")),
    ("BH", Some(r"((1[0-2]|[2-9])\d{2})?")),
    ("BM", Some(r"[A-Z]{2}[ ]?[A-Z0-9]{2}")),
    ("BN", Some(r"[A-Z]{2}[ ]?\d{4}")),
    ("BR", Some(r"\d{5}[-]?\d{3}")),
    ("BS", None),
    ("BY", Some(r"\d{6}")),
    ("BZ", None),
    ("CA", Some(r"[ABCEGHJKLMNPRSTVXY]\d[ABCEGHJ-NPRSTV-Z][ ]?\d[ABCEGHJ-NPRSTV-Z]\d")),
    ("CC", Some(r"6799")),
    ("CH", Some(r"\d{4}")),
    ("CK", Some(r"\d{4}")),
    ("CL", Some(r"\d{7}")),
    ("CN", Some(r"\d{6}")),
    ("CR", Some(r"\d{4,5}")),
    ("CS", Some(r"\d{5}")),
    ("CV", Some(r"\d{4}")),
    ("CX", Some(r"6798")),
    ("CY", Some(r"\d{4}")),
    ("CZ", Some(r"\d{3}[ ]?\d{2}")),
    ("DE", Some(r"\d{5}")),
    ("DK", Some(r"\d{4}")),
    ("DO", Some(r"\d{5}")),
    ("DZ", Some(r"\d{5}")),
    ("EC", Some(r"([A-Z]\d{4}[A-Z]|(?:[A-Z]{2})?\d{6})?")),
    ("EE", Some(r"\d{5}")),
    ("EG", Some(r"\d{5}")),
    ("ES", Some(r"\d{5}")),
    ("ET", Some(r"\d{4}")),
    ("FI", Some(r"\d{5}")),
    ("FK", Some(r"FIQQ 1ZZ")),
    ("FM", Some(r"(9694[1-4])([ -]\d{4})?")),
    ("FO", Some(r"\d{3}")),
    ("FR", Some(r"\d{2}[ ]?\d{3}")),
    ("GB", Some(r"GIR[ ]?0AA|((AB|AL|B|BA|BB|BD|BH|BL|BN|BR|BS|BT|CA|CB|CF|CH|CM|CO|CR|CT|CV|CW|DA|DD|DE|DG|DH|DL|DN|DT|DY|E|EC|EH|EN|EX|FK|FY|G|GL|GY|GU|HA|HD|HG|HP|HR|HS|HU|HX|IG|IM|IP|IV|JE|KA|KT|KW|KY|L|LA|LD|LE|LL|LN|LS|LU|M|ME|MK|ML|N|NE|NG|NN|NP|NR|NW|OL|OX|PA|PE|PH|PL|PO|PR|RG|RH|RM|S|SA|SE|SG|SK|SL|SM|SN|SO|SP|SR|SS|ST|SW|SY|TA|TD|TF|TN|TQ|TR|TS|TW|UB|W|WA|WC|WD|WF|WN|WR|WS|WV|YO|ZE)(\d[\dA-Z]?[ ]?\d[ABD-HJLN-UW-Z]{2}))|BFPO[ ]?\d{1,4}")),
    ("GE", Some(r"\d{4}")),
    ("GF", Some(r"9[78]3\d{2}")),
    ("GG", Some(r"GY\d[\dA-Z]?[ ]?\d[ABD-HJLN-UW-Z]{2}")),
    ("GL", Some(r"39\d{2}")),
    ("GN", Some(r"\d{3}")),
    ("GP", Some(r"9[78][01]\d{2}")),
    ("GR", Some(r"\d{3}[ ]?\d{2}")),
    ("GS", Some(r"SIQQ 1ZZ")),
    ("GT", Some(r"\d{5}")),
    ("GU", Some(r"969[123]\d([ -]\d{4})?")),
    ("GW", Some(r"\d{4}")),
    ("HK", None),
    ("HM", Some(r"\d{4}")),
    ("HN", Some(r"(?:\d{5})?")),
    ("HR", Some(r"\d{5}")),
    ("HT", Some(r"\d{4}")),
    ("HU", Some(r"\d{4}")),
    ("ID", Some(r"\d{5}")),
    ("IL", Some(r"\d{5}")),
    ("IM", Some(r"IM\d[\dA-Z]?[ ]?\d[ABD-HJLN-UW-Z]{2}")),
    ("IN", Some(r"\d{6}")),
    ("IO", Some(r"BBND 1ZZ")),
    ("IQ", Some(r"\d{5}")),
    ("IS", Some(r"\d{3}")),
    ("IT", Some(r"\d{5}")),
    ("JE", Some(r"JE\d[\dA-Z]?[ ]?\d[ABD-HJLN-UW-Z]{2}")),
    ("JO", Some(r"\d{5}")),
    ("JP", Some(r"\d{3}-\d{4}")),
    ("KE", Some(r"\d{5}")),
    ("KG", Some(r"\d{6}")),
    ("KH", Some(r"\d{5}")),
    ("KR", Some(r"\d{3}[-]\d{3}")),
    ("KW", Some(r"\d{5}")),
    ("KZ", Some(r"\d{6}")),
    ("LA", Some(r"\d{5}")),
    ("LB", Some(r"(\d{4}([ ]?\d{4})?)?")),
    ("LI", Some(r"948[5-9]|949[0-8]")),
    ("LK", Some(r"\d{5}")),
    ("LR", Some(r"\d{4}")),
    ("LS", Some(r"\d{3}")),
    ("LT", Some(r"\d{5}")),
    ("LU", Some(r"\d{4}")),
    ("LV", Some(r"\d{4}")),
    ("MA", Some(r"\d{5}")),
    ("MC", Some(r"980\d{2}")),
    ("MD", Some(r"\d{4}")),
    ("ME", Some(r"8\d{4}")),
    ("MG", Some(r"\d{3}")),
    ("MH", Some(r"969[67]\d([ -]\d{4})?")),
    ("MK", Some(r"\d{4}")),
    ("MN", Some(r"\d{6}")),
    ("MP", Some(r"9695[012]([ -]\d{4})?")),
    ("MQ", Some(r"9[78]2\d{2}")),
    ("MT", Some(r"[A-Z]{3}[ ]?\d{2,4}")),
    ("MU", Some(r"(\d{3}[A-Z]{2}\d{3})?")),
    ("MV", Some(r"\d{5}")),
    ("MX", Some(r"\d{5}")),
    ("MY", Some(r"\d{5}")),
    ("NC", Some(r"988\d{2}")),
    ("NE", Some(r"\d{4}")),
    ("NF", Some(r"2899")),
    ("NG", Some(r"(\d{6})?")),
    ("NI", Some(r"((\d{4}-)?\d{3}-\d{3}(-\d{1})?)?")),
    ("NL", Some(r"\d{4}[ ]?[A-Z]{2}")),
    ("NO", Some(r"\d{4}")),
    ("NP", Some(r"\d{5}")),
    ("NZ", Some(r"\d{4}")),
    ("OM", Some(r"(PC )?\d{3}")),
    ("PF", Some(r"987\d{2}")),
    ("PG", Some(r"\d{3}")),
    ("PH", Some(r"\d{4}")),
    ("PK", Some(r"\d{5}")),
    ("PL", Some(r"\d{2}-\d{3}")),
    ("PM", Some(r"9[78]5\d{2}")),
    ("PN", Some(r"PCRN 1ZZ")),
    ("PR", Some(r"00[679]\d{2}([ -]\d{4})?")),
    ("PT", Some(r"\d{4}([-]\d{3})?")),
    ("PW", Some(r"96940")),
    ("PY", Some(r"\d{4}")),
    ("QA", None),
    ("RE", Some(r"9[78]4\d{2}")),
    ("RO", Some(r"\d{6}")),
    ("RS", Some(r"\d{6}")),
    ("RU", Some(r"\d{6}")),
    ("SA", Some(r"\d{5}")),
    ("SE", Some(r"\d{3}[ ]?\d{2}")),
    ("SG", Some(r"\d{6}")),
    ("SH", Some(r"(ASCN|STHL) 1ZZ")),
    ("SI", Some(r"\d{4}")),
    ("SJ", Some(r"\d{4}")),
    ("SK", Some(r"\d{3}[ ]?\d{2}")),
    ("SM", Some(r"4789\d")),
    ("SN", Some(r"\d{5}")),
    ("SO", Some(r"\d{5}")),
    ("SZ", Some(r"[HLMS]\d{3}")),
    ("TC", Some(r"TKCA 1ZZ")),
    ("TH", Some(r"\d{5}")),
    ("TJ", Some(r"\d{6}")),
    ("TM", Some(r"\d{6}")),
    ("TN", Some(r"\d{4}")),
    ("TR", Some(r"\d{5}")),
    ("TW", Some(r"\d{3}(\d{2})?")),
    ("UA", Some(r"\d{5}")),
    ("US", Some(r"\d{5}([ -]\d{4})?")),
    ("UY", Some(r"\d{5}")),
    ("UZ", Some(r"\d{6}")),
    ("VA", Some(r"00120")),
    ("VE", Some(r"\d{4}")),
    ("VI", Some(r"008(([0-4]\d)|(5[01]))([ \-]\d{4})?")),
    ("WF", Some(r"986\d{2}")),
    ("XK", Some(r"\d{5}")),
    ("YT", Some(r"976\d{2}")),
    ("YU", Some(r"\d{5}")),
    ("ZA", Some(r"\d{4}")),
    ("ZM", Some(r"\d{5}")),
];
