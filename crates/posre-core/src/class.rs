//! POSIX character classes (`[:name:]` inside bracket expressions).

/// Named character class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    XDigit,
}

impl CharClass {
    pub const ALL: [CharClass; 12] = [
        CharClass::Alnum,
        CharClass::Alpha,
        CharClass::Blank,
        CharClass::Cntrl,
        CharClass::Digit,
        CharClass::Graph,
        CharClass::Lower,
        CharClass::Print,
        CharClass::Punct,
        CharClass::Space,
        CharClass::Upper,
        CharClass::XDigit,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Alnum => "alnum",
            CharClass::Alpha => "alpha",
            CharClass::Blank => "blank",
            CharClass::Cntrl => "cntrl",
            CharClass::Digit => "digit",
            CharClass::Graph => "graph",
            CharClass::Lower => "lower",
            CharClass::Print => "print",
            CharClass::Punct => "punct",
            CharClass::Space => "space",
            CharClass::Upper => "upper",
            CharClass::XDigit => "xdigit",
        }
    }

    /// The class covering the opposite case, for case-insensitive brackets.
    ///
    /// `[:upper:]` under case folding also admits lowercase letters.
    pub fn opposite_case(self) -> Option<Self> {
        match self {
            CharClass::Upper => Some(CharClass::Lower),
            CharClass::Lower => Some(CharClass::Upper),
            _ => None,
        }
    }

    /// ASCII-only membership, as defined by the POSIX locale.
    pub fn matches_ascii(self, c: char) -> bool {
        match self {
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Blank => c == ' ' || c == '\t',
            CharClass::Cntrl => c.is_ascii_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Graph => c.is_ascii_graphic(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Print => c.is_ascii_graphic() || c == ' ',
            CharClass::Punct => c.is_ascii_punctuation(),
            CharClass::Space => matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'),
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::XDigit => c.is_ascii_hexdigit(),
        }
    }

    /// Unicode membership, derived from the standard library's properties.
    pub fn matches_unicode(self, c: char) -> bool {
        match self {
            CharClass::Alnum => c.is_alphanumeric(),
            CharClass::Alpha => c.is_alphabetic(),
            CharClass::Blank => c == '\t' || (c.is_whitespace() && !is_line_break(c)),
            CharClass::Cntrl => c.is_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Graph => !c.is_control() && !c.is_whitespace(),
            CharClass::Lower => c.is_lowercase(),
            CharClass::Print => !c.is_control() && (c == ' ' || !c.is_whitespace()),
            CharClass::Punct => {
                c.is_ascii_punctuation()
                    || (!c.is_ascii()
                        && !c.is_alphanumeric()
                        && !c.is_whitespace()
                        && !c.is_control())
            }
            CharClass::Space => c.is_whitespace(),
            CharClass::Upper => c.is_uppercase(),
            CharClass::XDigit => c.is_ascii_hexdigit(),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
