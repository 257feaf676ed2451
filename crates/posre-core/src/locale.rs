//! Built-in collation adapters.

use crate::{CharClass, Collation};

/// The POSIX ("C") locale.
///
/// Weights are code points, classes and case folding are ASCII-only, and
/// bracket expressions compile to the byte-indexed fast path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CLocale;

impl Collation for CLocale {
    fn byte_indexed(&self) -> bool {
        true
    }

    fn unique_weight(&self, c: char) -> u32 {
        c as u32
    }

    fn primary_weight(&self, c: char) -> u32 {
        c as u32
    }

    fn char_for_weight(&self, weight: u32) -> Option<char> {
        char::from_u32(weight)
    }

    fn is_class(&self, class: CharClass, c: char) -> bool {
        class.matches_ascii(c)
    }

    fn opposite_case(&self, c: char) -> Option<char> {
        if c.is_ascii_lowercase() {
            Some(c.to_ascii_uppercase())
        } else if c.is_ascii_uppercase() {
            Some(c.to_ascii_lowercase())
        } else {
            None
        }
    }
}

/// A Unicode-aware UTF-8 locale.
///
/// Unique weights are code points. Latin letters carrying a diacritic share
/// the primary weight of their base letter, so `[[=e=]]` admits `é`, `è`,
/// `ê` and `ë`. Classes and case folding follow Unicode properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utf8Locale;

/// Highest code point whose primary weight may differ from its unique weight.
const DECOMPOSABLE_MAX: u32 = 0x17F;

impl Collation for Utf8Locale {
    fn byte_indexed(&self) -> bool {
        false
    }

    fn unique_weight(&self, c: char) -> u32 {
        c as u32
    }

    fn primary_weight(&self, c: char) -> u32 {
        base_letter(c).unwrap_or(c) as u32
    }

    fn char_for_weight(&self, weight: u32) -> Option<char> {
        char::from_u32(weight)
    }

    fn is_class(&self, class: CharClass, c: char) -> bool {
        class.matches_unicode(c)
    }

    fn opposite_case(&self, c: char) -> Option<char> {
        if c.is_lowercase() {
            single(c.to_uppercase())
        } else if c.is_uppercase() {
            single(c.to_lowercase())
        } else {
            None
        }
    }

    fn equivalents(&self, c: char) -> Vec<char> {
        let primary = self.primary_weight(c);
        if primary > DECOMPOSABLE_MAX {
            return vec![c];
        }
        (0..=DECOMPOSABLE_MAX)
            .filter_map(char::from_u32)
            .filter(|&other| self.primary_weight(other) == primary)
            .collect()
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Base letter of a precomposed Latin-1 / Latin Extended-A letter.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ď' | 'Đ' => 'D',
        'ď' | 'đ' => 'd',
        'È'..='Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĥ' | 'Ħ' => 'H',
        'ĥ' | 'ħ' => 'h',
        'Ì'..='Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'Ĵ' => 'J',
        'ĵ' => 'j',
        'Ķ' => 'K',
        'ķ' => 'k',
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => 'L',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'Ţ' | 'Ť' | 'Ŧ' => 'T',
        'ţ' | 'ť' | 'ŧ' => 't',
        'Ù'..='Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ŵ' => 'W',
        'ŵ' => 'w',
        'Ý' | 'Ŷ' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}
