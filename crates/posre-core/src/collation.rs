//! Locale capability consumed by the compiler and the matcher.
//!
//! The engine never owns locale data. Everything it needs to know about
//! characters (how to decode one, how it collates, which classes it belongs
//! to, what its opposite case is) goes through [`Collation`], which callers
//! inject by reference.

use crate::CharClass;

/// Locale services for bracket expressions, case folding and decoding.
///
/// Implementations must be pure: the same input always yields the same
/// answer, so a compiled program stays valid for as long as its adapter does.
pub trait Collation {
    /// Whether bracket expressions can use the 256-entry byte-indexed set.
    ///
    /// True only when unique weights coincide with code points for every
    /// value up to 255.
    fn byte_indexed(&self) -> bool;

    /// Weight that totally orders characters (used for ranges).
    fn unique_weight(&self, c: char) -> u32;

    /// Weight shared by members of one equivalence class (`[=x=]`).
    fn primary_weight(&self, c: char) -> u32;

    /// Inverse of [`unique_weight`](Self::unique_weight).
    fn char_for_weight(&self, weight: u32) -> Option<char>;

    /// Class membership test for `[:name:]`.
    fn is_class(&self, class: CharClass, c: char) -> bool;

    /// The opposite-case counterpart of `c`, if it has exactly one.
    fn opposite_case(&self, c: char) -> Option<char>;

    /// Decode the character starting at byte offset `pos`.
    ///
    /// Returns the character and its width in bytes, or `None` at the end of
    /// the subject or when `pos` is not on a character boundary.
    fn decode(&self, subject: &str, pos: usize) -> Option<(char, usize)> {
        let c = subject.get(pos..)?.chars().next()?;
        Some((c, c.len_utf8()))
    }

    /// Every character sharing `c`'s primary weight, `c` included.
    fn equivalents(&self, c: char) -> Vec<char> {
        vec![c]
    }

    /// Resolve the body of a `[.name.]` collating symbol.
    fn collating_symbol(&self, name: &str) -> Option<char> {
        posix_symbol(name)
    }

    /// Case-insensitive character comparison.
    fn fold_eq(&self, a: char, b: char) -> bool {
        a == b || self.opposite_case(a) == Some(b)
    }

    /// Whether `c` is a word constituent for `\<`, `\>`, `\b`, `\B`.
    fn is_word(&self, c: char) -> bool {
        c == '_' || self.is_class(CharClass::Alnum, c)
    }
}

impl<T: Collation + ?Sized> Collation for &T {
    fn byte_indexed(&self) -> bool {
        (**self).byte_indexed()
    }

    fn unique_weight(&self, c: char) -> u32 {
        (**self).unique_weight(c)
    }

    fn primary_weight(&self, c: char) -> u32 {
        (**self).primary_weight(c)
    }

    fn char_for_weight(&self, weight: u32) -> Option<char> {
        (**self).char_for_weight(weight)
    }

    fn is_class(&self, class: CharClass, c: char) -> bool {
        (**self).is_class(class, c)
    }

    fn opposite_case(&self, c: char) -> Option<char> {
        (**self).opposite_case(c)
    }

    fn decode(&self, subject: &str, pos: usize) -> Option<(char, usize)> {
        (**self).decode(subject, pos)
    }

    fn equivalents(&self, c: char) -> Vec<char> {
        (**self).equivalents(c)
    }

    fn collating_symbol(&self, name: &str) -> Option<char> {
        (**self).collating_symbol(name)
    }

    fn fold_eq(&self, a: char, b: char) -> bool {
        (**self).fold_eq(a, b)
    }

    fn is_word(&self, c: char) -> bool {
        (**self).is_word(c)
    }
}

/// Single characters and the portable POSIX collating-symbol names.
pub fn posix_symbol(name: &str) -> Option<char> {
    let mut chars = name.chars();
    if let Some(c) = chars.next()
        && chars.next().is_none()
    {
        return Some(c);
    }
    let c = match name {
        "NUL" => '\0',
        "tab" => '\t',
        "newline" => '\n',
        "vertical-tab" => '\x0b',
        "form-feed" => '\x0c',
        "carriage-return" => '\r',
        "space" => ' ',
        "exclamation-mark" => '!',
        "quotation-mark" => '"',
        "number-sign" => '#',
        "dollar-sign" => '$',
        "percent-sign" => '%',
        "ampersand" => '&',
        "apostrophe" => '\'',
        "left-parenthesis" => '(',
        "right-parenthesis" => ')',
        "asterisk" => '*',
        "plus-sign" => '+',
        "comma" => ',',
        "hyphen" | "hyphen-minus" => '-',
        "period" | "full-stop" => '.',
        "slash" | "solidus" => '/',
        "zero" => '0',
        "one" => '1',
        "two" => '2',
        "three" => '3',
        "four" => '4',
        "five" => '5',
        "six" => '6',
        "seven" => '7',
        "eight" => '8',
        "nine" => '9',
        "colon" => ':',
        "semicolon" => ';',
        "less-than-sign" => '<',
        "equals-sign" => '=',
        "greater-than-sign" => '>',
        "question-mark" => '?',
        "commercial-at" => '@',
        "left-square-bracket" => '[',
        "backslash" | "reverse-solidus" => '\\',
        "right-square-bracket" => ']',
        "circumflex" | "circumflex-accent" => '^',
        "underscore" | "low-line" => '_',
        "grave-accent" => '`',
        "left-brace" | "left-curly-bracket" => '{',
        "vertical-line" => '|',
        "right-brace" | "right-curly-bracket" => '}',
        "tilde" => '~',
        "DEL" => '\x7f',
        _ => return None,
    };
    Some(c)
}
