/// Extended glob group kind, selected by the sigil preceding `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extglob {
    /// `!(...)` matches anything except the group.
    Negate,
    /// `*(...)`
    ZeroOrMore,
    /// `+(...)`
    OneOrMore,
    /// `?(...)`
    ZeroOrOne,
    /// `@(...)` matches exactly one occurrence and is treated as a capture.
    ExactlyOne,
}

impl Extglob {
    pub fn from_sigil(ch: char) -> Option<Self> {
        match ch {
            '!' => Some(Self::Negate),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            '?' => Some(Self::ZeroOrOne),
            '@' => Some(Self::ExactlyOne),
            _ => None,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Self::Negate => '!',
            Self::ZeroOrMore => '*',
            Self::OneOrMore => '+',
            Self::ZeroOrOne => '?',
            Self::ExactlyOne => '@',
        }
    }

    /// Fragment emitted in place of the opening `(`.
    pub fn opening(self) -> &'static str {
        match self {
            Self::Negate => "(?:(?!(?:",
            _ => "(?:",
        }
    }

    /// Fragment emitted in place of the closing `)`.
    ///
    /// A negated group is anchored at the end when nothing follows it in the pattern,
    /// then followed by `star` to consume the rest of the component.
    pub fn closing(self, at_end: bool, star: &str) -> String {
        match self {
            Self::Negate => {
                let anchor = if at_end { "$" } else { "" };
                format!("){anchor}){star})")
            }
            Self::ZeroOrMore | Self::OneOrMore | Self::ZeroOrOne => format!("){}", self.sigil()),
            Self::ExactlyOne => ")".to_owned(),
        }
    }

    /// Reports whether the group marks its segment as a capture rather than an extglob.
    pub fn is_capture(self) -> bool {
        self == Self::ExactlyOne
    }
}

// ---

/// Stack of sigils waiting for their group to close.
#[derive(Debug, Default)]
pub(crate) struct Extglobs {
    pending: Vec<Extglob>,
}

impl Extglobs {
    pub fn push(&mut self, extglob: Extglob) {
        self.pending.push(extglob);
    }

    pub fn pop(&mut self) -> Option<Extglob> {
        self.pending.pop()
    }

    pub fn last(&self) -> Option<Extglob> {
        self.pending.last().copied()
    }
}

#[cfg(test)]
mod tests;
