//! US (NANP) phone numbers and the area-code geography used to check that a
//! number belongs to the state picked on a form.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// The 50 states plus DC, as (code, name).
pub const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Geographic area codes per state.
const STATE_AREA_CODES: &[(&str, &[u16])] = &[
    ("AL", &[205, 251, 256, 334, 938]),
    ("AK", &[907]),
    ("AZ", &[480, 520, 602, 623, 928]),
    ("AR", &[479, 501, 870]),
    ("CA", &[
        209, 213, 279, 310, 323, 341, 408, 415, 424, 442, 510, 530, 559, 562, 619, 626, 628,
        650, 657, 661, 669, 707, 714, 747, 760, 805, 818, 820, 831, 858, 909, 916, 925, 949,
        951,
    ]),
    ("CO", &[303, 719, 720, 970]),
    ("CT", &[203, 475, 860, 959]),
    ("DE", &[302]),
    ("DC", &[202]),
    ("FL", &[
        239, 305, 321, 352, 386, 407, 561, 727, 754, 772, 786, 813, 850, 863, 904, 941, 954,
    ]),
    ("GA", &[229, 404, 470, 478, 678, 706, 762, 770, 912]),
    ("HI", &[808]),
    ("ID", &[208, 986]),
    ("IL", &[217, 224, 309, 312, 331, 618, 630, 708, 773, 779, 815, 847, 872]),
    ("IN", &[219, 260, 317, 463, 574, 765, 812, 930]),
    ("IA", &[319, 515, 563, 641, 712]),
    ("KS", &[316, 620, 785, 913]),
    ("KY", &[270, 364, 502, 606, 859]),
    ("LA", &[225, 318, 337, 504, 985]),
    ("ME", &[207]),
    ("MD", &[240, 301, 410, 443, 667]),
    ("MA", &[339, 351, 413, 508, 617, 774, 781, 857, 978]),
    ("MI", &[231, 248, 269, 313, 517, 586, 616, 734, 810, 906, 947, 989]),
    ("MN", &[218, 320, 507, 612, 651, 763, 952]),
    ("MS", &[228, 601, 662, 769]),
    ("MO", &[314, 417, 573, 636, 660, 816]),
    ("MT", &[406]),
    ("NE", &[308, 402, 531]),
    ("NV", &[702, 725, 775]),
    ("NH", &[603]),
    ("NJ", &[201, 551, 609, 640, 732, 848, 856, 862, 908, 973]),
    ("NM", &[505, 575]),
    ("NY", &[
        212, 315, 332, 347, 516, 518, 585, 607, 631, 646, 680, 716, 718, 838, 845, 914, 917,
        929, 934,
    ]),
    ("NC", &[252, 336, 704, 743, 828, 910, 919, 980, 984]),
    ("ND", &[701]),
    ("OH", &[216, 220, 234, 330, 380, 419, 440, 513, 567, 614, 740, 937]),
    ("OK", &[405, 539, 580, 918]),
    ("OR", &[458, 503, 541, 971]),
    ("PA", &[215, 223, 267, 272, 412, 445, 484, 570, 610, 717, 724, 814, 878]),
    ("RI", &[401]),
    ("SC", &[803, 839, 843, 854, 864]),
    ("SD", &[605]),
    ("TN", &[423, 615, 629, 731, 865, 901, 931]),
    ("TX", &[
        210, 214, 254, 281, 325, 346, 361, 409, 430, 432, 469, 512, 682, 713, 726, 737, 806,
        817, 830, 832, 903, 915, 936, 940, 956, 972, 979,
    ]),
    ("UT", &[385, 435, 801]),
    ("VT", &[802]),
    ("VA", &[276, 434, 540, 571, 703, 757, 804]),
    ("WA", &[206, 253, 360, 425, 509, 564]),
    ("WV", &[304, 681]),
    ("WI", &[262, 414, 534, 608, 715, 920]),
    ("WY", &[307]),
];

/// Area codes that geocode to a single city rather than a whole state.
const CITY_AREA_CODES: &[(u16, &str)] = &[
    (212, "New York, NY"),
    (646, "New York, NY"),
    (917, "New York, NY"),
    (415, "San Francisco, CA"),
    (628, "San Francisco, CA"),
    (312, "Chicago, IL"),
    (773, "Chicago, IL"),
    (617, "Boston, MA"),
    (206, "Seattle, WA"),
    (305, "Miami, FL"),
    (713, "Houston, TX"),
    (504, "New Orleans, LA"),
];

static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s().\-]+$").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    Unparsable,
    Invalid,
}

impl fmt::Display for PhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneError::Unparsable => write!(f, "not a phone number"),
            PhoneError::Invalid => write!(f, "not a valid US phone number"),
        }
    }
}

impl std::error::Error for PhoneError {}

/// A valid US number split into its NANP parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsPhoneNumber {
    pub area_code: u16,
    pub exchange: u16,
    pub line: u16,
}

impl UsPhoneNumber {
    /// Parses the common US spellings: `4155552671`, `(415) 555-2671`,
    /// `415.555.2671`, `+1 415 555 2671`, `1-415-555-2671`.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let input = input.trim();
        if !PHONE_CHARS.is_match(input) {
            return Err(PhoneError::Unparsable);
        }

        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        let national = match digits.len() {
            10 => digits.as_str(),
            11 if digits.starts_with('1') => &digits[1..],
            _ => return Err(PhoneError::Invalid),
        };

        // ten ASCII digits, so the slices parse
        let area_code: u16 = national[0..3].parse().map_err(|_| PhoneError::Unparsable)?;
        let exchange: u16 = national[3..6].parse().map_err(|_| PhoneError::Unparsable)?;
        let line: u16 = national[6..10].parse().map_err(|_| PhoneError::Unparsable)?;

        // NXX rules: no leading 0/1, no N11 service codes
        if area_code < 200 || exchange < 200 || exchange % 100 == 11 {
            return Err(PhoneError::Invalid);
        }
        if state_for_area_code(area_code).is_none() {
            return Err(PhoneError::Invalid);
        }

        Ok(Self { area_code, exchange, line })
    }

    /// National display format, e.g. `(415) 555-2671`.
    pub fn national(&self) -> String {
        format!("({:03}) {:03}-{:04}", self.area_code, self.exchange, self.line)
    }

    /// Human description of where the number is registered.
    /// Either a full state name, `"City, ST"`, or `"Washington, D.C."`.
    pub fn location_description(&self) -> Option<String> {
        describe_area_code(self.area_code)
    }

    /// Two-letter state code implied by the area code.
    pub fn state_code(&self) -> Option<&'static str> {
        self.location_description()
            .as_deref()
            .and_then(state_code_from_description)
    }
}

fn state_for_area_code(area_code: u16) -> Option<&'static str> {
    STATE_AREA_CODES
        .iter()
        .find(|(_, codes)| codes.contains(&area_code))
        .map(|(state, _)| *state)
}

pub fn describe_area_code(area_code: u16) -> Option<String> {
    if let Some((_, city)) = CITY_AREA_CODES.iter().find(|(code, _)| *code == area_code) {
        return Some((*city).to_string());
    }
    match state_for_area_code(area_code)? {
        "DC" => Some("Washington, D.C.".to_string()),
        code => state_name(code).map(str::to_string),
    }
}

pub fn state_name(code: &str) -> Option<&'static str> {
    STATES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

pub fn is_state_code(code: &str) -> bool {
    STATES.iter().any(|(c, _)| *c == code)
}

/// Normalizes a location description to a two-letter state code.
///
/// "Washington, D.C." has a comma but no state code after it, so the D.C.
/// form is checked first.
pub fn state_code_from_description(description: &str) -> Option<&'static str> {
    let description = description.trim();
    if description.contains("D.C.") {
        return Some("DC");
    }
    if let Some((_, suffix)) = description.rsplit_once(',') {
        let suffix = suffix.trim();
        return STATES
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(suffix))
            .map(|(code, _)| *code);
    }
    STATES
        .iter()
        .find(|(code, name)| {
            name.eq_ignore_ascii_case(description) || code.eq_ignore_ascii_case(description)
        })
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings_to_national_format() {
        for raw in [
            "4155552671",
            "(415) 555-2671",
            "415.555.2671",
            "+1 415 555 2671",
            "1-415-555-2671",
        ] {
            let number = UsPhoneNumber::parse(raw).unwrap();
            assert_eq!(number.national(), "(415) 555-2671", "input {raw}");
        }
    }

    #[test]
    fn rejects_garbage_and_bad_numbers() {
        assert_eq!(UsPhoneNumber::parse("not-a-number"), Err(PhoneError::Unparsable));
        assert_eq!(UsPhoneNumber::parse("555-2671"), Err(PhoneError::Invalid));
        assert_eq!(UsPhoneNumber::parse("(115) 555-2671"), Err(PhoneError::Invalid));
        assert_eq!(UsPhoneNumber::parse("(415) 911-2671"), Err(PhoneError::Invalid));
        // Canadian area code, not a US number
        assert_eq!(UsPhoneNumber::parse("(416) 555-2671"), Err(PhoneError::Invalid));
    }

    #[test]
    fn every_description_form_maps_to_a_code() {
        assert_eq!(state_code_from_description("Rhode Island"), Some("RI"));
        assert_eq!(state_code_from_description("Providence, RI"), Some("RI"));
        assert_eq!(state_code_from_description("Washington, D.C."), Some("DC"));
        assert_eq!(state_code_from_description("Washington"), Some("WA"));
        assert_eq!(state_code_from_description("Atlantis"), None);
    }

    #[test]
    fn area_codes_resolve_to_states() {
        let cases = [
            ("(401) 555-0100", "RI"),
            ("(212) 555-0100", "NY"),
            ("(202) 555-0100", "DC"),
            ("(206) 555-0100", "WA"),
            ("(504) 555-0100", "LA"),
        ];
        for (raw, state) in cases {
            let number = UsPhoneNumber::parse(raw).unwrap();
            assert_eq!(number.state_code(), Some(state), "number {raw}");
        }
    }

    #[test]
    fn every_area_code_has_a_state() {
        for (state, codes) in STATE_AREA_CODES {
            assert!(is_state_code(state));
            for code in *codes {
                assert_eq!(
                    describe_area_code(*code).as_deref().and_then(state_code_from_description),
                    Some(*state),
                    "area code {code}"
                );
            }
        }
    }
}
