//! Bracket expression parser.

use posre_core::{CharClass, Collation};

use crate::Result;
use crate::error::{CompileError, CompileErrorKind};

/// Members of one bracket expression, in unique-weight space.
#[derive(Debug, Default)]
pub(super) struct BracketItems {
    pub negated: bool,
    /// Closed weight ranges; adjacent insertions are coalesced.
    pub ranges: Vec<(u32, u32)>,
    pub classes: Vec<CharClass>,
}

impl BracketItems {
    fn add_weight(&mut self, weight: u32) {
        self.add_range(weight, weight);
    }

    fn add_range(&mut self, lo: u32, hi: u32) {
        if let Some((_, last)) = self.ranges.last_mut()
            && last.checked_add(1) == Some(lo)
        {
            *last = hi;
            return;
        }
        self.ranges.push((lo, hi));
    }

    fn add_class(&mut self, class: CharClass) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }
}

/// One parsed element: a character usable as a range end point, or a
/// class / equivalence set that was already added.
enum Element {
    Char(char),
    Set,
}

pub(super) struct BracketParser<'a> {
    pattern: &'a str,
    pos: usize,
    /// Offset of the opening `[`.
    open: usize,
    ignore_case: bool,
    collation: &'a dyn Collation,
    items: BracketItems,
}

impl<'a> BracketParser<'a> {
    pub fn new(
        pattern: &'a str,
        open: usize,
        ignore_case: bool,
        collation: &'a dyn Collation,
    ) -> Self {
        Self {
            pattern,
            pos: open + 1,
            open,
            ignore_case,
            collation,
            items: BracketItems::default(),
        }
    }

    /// Parse up to and including the closing `]`.
    pub fn parse(mut self) -> Result<(BracketItems, usize)> {
        if self.rest().starts_with('^') {
            self.pos += 1;
            self.items.negated = true;
        }

        let mut first = true;
        loop {
            let offset = self.pos;
            match self.rest().chars().next() {
                None => return Err(self.error(self.open, CompileErrorKind::UnmatchedBracket)),
                Some(']') if !first => {
                    self.pos += 1;
                    break;
                }
                Some(_) => {}
            }
            first = false;

            let Element::Char(lo) = self.element()? else {
                continue;
            };
            if self.at_range_operator() {
                self.pos += 1;
                let hi = self.range_end()?;
                self.range(lo, hi, offset)?;
            } else {
                self.char(lo);
            }
        }

        Ok((self.items, self.pos))
    }

    fn rest(&self) -> &'a str {
        let pattern = self.pattern;
        &pattern[self.pos..]
    }

    fn error(&self, offset: usize, kind: CompileErrorKind) -> CompileError {
        CompileError::new(offset, kind)
    }

    /// A `-` that is neither last in the set nor followed by end of input.
    fn at_range_operator(&self) -> bool {
        let rest = self.rest();
        rest.starts_with('-') && rest.len() > 1 && !rest[1..].starts_with(']')
    }

    fn bump(&mut self) -> Result<char> {
        let c = self
            .rest()
            .chars()
            .next()
            .ok_or_else(|| self.error(self.open, CompileErrorKind::UnmatchedBracket))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    /// The delimiter of a `[:`, `[=` or `[.` token starting here.
    fn token_kind(&self) -> Option<char> {
        let kind = self.rest().strip_prefix('[')?.chars().next()?;
        matches!(kind, ':' | '=' | '.').then_some(kind)
    }

    fn element(&mut self) -> Result<Element> {
        let offset = self.pos;
        let Some(kind) = self.token_kind() else {
            return self.bump().map(Element::Char);
        };

        let body = self.token_body(kind, offset)?;
        match kind {
            ':' => {
                let class = CharClass::from_name(body)
                    .ok_or_else(|| self.error(offset, CompileErrorKind::UnknownClass))?;
                self.class(class);
                Ok(Element::Set)
            }
            '=' => {
                let c = self.symbol(body, offset)?;
                for member in self.collation.equivalents(c) {
                    self.char(member);
                }
                Ok(Element::Set)
            }
            _ => self.symbol(body, offset).map(Element::Char),
        }
    }

    /// Upper end point of a range: a plain character or a collating symbol.
    fn range_end(&mut self) -> Result<char> {
        let offset = self.pos;
        match self.token_kind() {
            None => self.bump(),
            Some('.') => {
                let body = self.token_body('.', offset)?;
                self.symbol(body, offset)
            }
            Some(_) => Err(self.error(offset, CompileErrorKind::RangeOutOfOrder)),
        }
    }

    /// Consume `[k body k]` and return `body`.
    fn token_body(&mut self, kind: char, offset: usize) -> Result<&'a str> {
        let rest = &self.rest()[2..];
        let terminator = format!("{kind}]");
        let Some(len) = rest.find(&terminator) else {
            return Err(self.error(offset, CompileErrorKind::BadBracketToken));
        };
        self.pos += 2 + len + 2;
        Ok(&rest[..len])
    }

    fn symbol(&self, body: &str, offset: usize) -> Result<char> {
        self.collation
            .collating_symbol(body)
            .ok_or_else(|| self.error(offset, CompileErrorKind::InvalidCollatingElement))
    }

    fn char(&mut self, c: char) {
        self.items.add_weight(self.collation.unique_weight(c));
        if self.ignore_case
            && let Some(other) = self.collation.opposite_case(c)
        {
            self.items.add_weight(self.collation.unique_weight(other));
        }
    }

    fn range(&mut self, lo: char, hi: char, offset: usize) -> Result<()> {
        let lo = self.collation.unique_weight(lo);
        let hi = self.collation.unique_weight(hi);
        if lo > hi {
            return Err(self.error(offset, CompileErrorKind::RangeOutOfOrder));
        }
        self.items.add_range(lo, hi);

        if self.ignore_case {
            for weight in lo..=hi {
                if let Some(c) = self.collation.char_for_weight(weight)
                    && let Some(other) = self.collation.opposite_case(c)
                {
                    self.items.add_weight(self.collation.unique_weight(other));
                }
            }
        }
        Ok(())
    }

    fn class(&mut self, class: CharClass) {
        self.items.add_class(class);
        if self.ignore_case
            && let Some(other) = class.opposite_case()
        {
            self.items.add_class(other);
        }
    }
}
