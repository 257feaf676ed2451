//! Compiled bracket-expression sets.

use posre_core::CharClass;

/// 256-bit set indexed by code points 0..=255.
///
/// Characters above 255 are members exactly when the set was negated, so
/// `[^a-c]` still admits multi-byte characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteSet {
    bits: [u64; 4],
    negated: bool,
}

impl ByteSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, b: u8) {
        self.bits[(b >> 6) as usize] |= 1 << (b & 63);
    }

    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for b in lo..=hi {
            self.insert(b);
        }
    }

    #[inline]
    pub fn remove(&mut self, b: u8) {
        self.bits[(b >> 6) as usize] &= !(1 << (b & 63));
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }

    /// Flip every bit, including the implicit membership of characters above 255.
    pub fn complement(&mut self) {
        for word in &mut self.bits {
            *word = !*word;
        }
        self.negated = !self.negated;
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Membership test for a decoded character.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match u8::try_from(c as u32) {
            Ok(b) => self.contains(b),
            Err(_) => self.negated,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(|&b| self.contains(b))
    }

    /// Members grouped into closed ranges, ascending.
    pub fn ranges(&self) -> Vec<(u8, u8)> {
        let mut out: Vec<(u8, u8)> = Vec::new();
        for b in self.iter() {
            match out.last_mut() {
                Some((_, hi)) if *hi as u16 + 1 == b as u16 => *hi = b,
                _ => out.push((b, b)),
            }
        }
        out
    }
}

/// Set indexed by unique collation weight.
///
/// Only the span between the lowest and highest inserted weight is backed
/// by storage. Character classes are kept symbolic and evaluated through
/// the collation adapter at match time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightSet {
    /// Weight of bit 0 of `bits[0]`; always a multiple of 64.
    base: u32,
    bits: Vec<u64>,
    classes: Vec<CharClass>,
    negated: bool,
    exclude_newline: bool,
}

impl WeightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, weight: u32) {
        self.insert_range(weight, weight);
    }

    pub fn insert_range(&mut self, lo: u32, hi: u32) {
        if lo > hi {
            return;
        }
        self.reserve(lo, hi);
        for w in lo..=hi {
            let off = (w - self.base) as usize;
            self.bits[off >> 6] |= 1 << (off & 63);
        }
    }

    /// Grow the backing span so it covers `lo..=hi`.
    fn reserve(&mut self, lo: u32, hi: u32) {
        let lo_aligned = lo & !63;
        if self.bits.is_empty() {
            self.base = lo_aligned;
        } else if lo_aligned < self.base {
            let prepend = ((self.base - lo_aligned) >> 6) as usize;
            self.bits.splice(0..0, std::iter::repeat_n(0, prepend));
            self.base = lo_aligned;
        }
        let words = ((hi - self.base) >> 6) as usize + 1;
        if self.bits.len() < words {
            self.bits.resize(words, 0);
        }
    }

    pub fn contains_weight(&self, weight: u32) -> bool {
        if weight < self.base {
            return false;
        }
        let off = (weight - self.base) as usize;
        self.bits
            .get(off >> 6)
            .is_some_and(|word| word & (1 << (off & 63)) != 0)
    }

    pub fn add_class(&mut self, class: CharClass) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// Mark the set as negated; `exclude_newline` keeps `\n` out of the complement.
    pub fn negate(&mut self, exclude_newline: bool) {
        self.negated = true;
        self.exclude_newline = exclude_newline;
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn excludes_newline(&self) -> bool {
        self.exclude_newline
    }

    /// Explicit members grouped into closed weight ranges, ascending.
    pub fn ranges(&self) -> Vec<(u32, u32)> {
        let mut out: Vec<(u32, u32)> = Vec::new();
        for (i, &word) in self.bits.iter().enumerate() {
            let mut word = word;
            while word != 0 {
                let bit = word.trailing_zeros();
                word &= word - 1;
                let w = self.base + (i as u32) * 64 + bit;
                match out.last_mut() {
                    Some((_, hi)) if *hi + 1 == w => *hi = w,
                    _ => out.push((w, w)),
                }
            }
        }
        out
    }
}
