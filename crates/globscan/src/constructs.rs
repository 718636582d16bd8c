use crate::error::{Error, Result};

// ---

/// Kind of a bracket-like construct tracked while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Paren,
    Angle,
    Brace,
    Bracket,
    Quote,
}

impl ConstructKind {
    pub fn from_opener(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Paren),
            '<' => Some(Self::Angle),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Bracket),
            _ => None,
        }
    }

    pub fn from_closer(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(Self::Paren),
            '>' => Some(Self::Angle),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Bracket),
            _ => None,
        }
    }

    /// Canonical opening character. Quotes open with several characters, `"` is reported.
    pub fn opener(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Angle => '<',
            Self::Brace => '{',
            Self::Bracket => '[',
            Self::Quote => '"',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Angle => '>',
            Self::Brace => '}',
            Self::Bracket => ']',
            Self::Quote => '"',
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Paren => 0,
            Self::Angle => 1,
            Self::Brace => 2,
            Self::Bracket => 3,
            Self::Quote => 4,
        }
    }
}

// ---

/// An open construct.
///
/// The kind is fixed at push time. The compiled text is only ever appended to.
/// For bracket expressions the raw source characters are kept as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    kind: ConstructKind,
    opener: char,
    text: String,
    raw: String,
}

impl Frame {
    fn new(kind: ConstructKind, opener: char) -> Self {
        Self {
            kind,
            opener,
            text: String::new(),
            raw: String::new(),
        }
    }

    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    pub fn opener(&self) -> char {
        self.opener
    }

    /// Compiled text emitted since the frame was opened.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source characters seen inside the frame, escapes resolved.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

// ---

/// Stack of open constructs.
///
/// Parens, angles, braces and brackets share one ordered stack, with per-kind counters
/// kept alongside. Quotes live on a lane of their own and never count towards
/// [`Constructs::depth`].
#[derive(Debug, Default)]
pub(crate) struct Constructs {
    frames: Vec<Frame>,
    counts: [usize; 5],
    quotes: Vec<Frame>,
}

impl Constructs {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_inside(&self, kind: ConstructKind) -> bool {
        self.counts[kind.slot()] != 0
    }

    #[inline]
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[inline]
    pub fn top_kind(&self) -> Option<ConstructKind> {
        self.top().map(Frame::kind)
    }

    pub fn push(&mut self, kind: ConstructKind, opener: char) {
        debug_assert_ne!(kind, ConstructKind::Quote, "quotes are tracked on their own lane");
        self.counts[kind.slot()] += 1;
        self.frames.push(Frame::new(kind, opener));
    }

    /// Pops the top frame, which must be of the given kind.
    pub fn pop(&mut self, kind: ConstructKind) -> Result<Frame> {
        match self.frames.last() {
            Some(frame) if frame.kind == kind => {}
            _ => return Err(Error::MissingOpening(kind.opener())),
        }
        self.counts[kind.slot()] -= 1;
        self.frames.pop().ok_or(Error::MissingOpening(kind.opener()))
    }

    /// Appends compiled text to the top frame, if any.
    pub fn append(&mut self, text: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.text.push_str(text);
        }
    }

    /// Records a source character in the top frame, if any.
    pub fn note(&mut self, ch: char) {
        if let Some(frame) = self.frames.last_mut() {
            frame.raw.push(ch);
        }
    }

    pub fn note_str(&mut self, text: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.raw.push_str(text);
        }
    }

    /// Opens a quote with `ch`, or closes the innermost quote if it was opened with `ch`.
    pub fn toggle_quote(&mut self, ch: char) {
        if self.quotes.last().map(Frame::opener) == Some(ch) {
            self.close_quote();
        } else {
            self.open_quote(ch);
        }
    }

    pub fn open_quote(&mut self, ch: char) {
        self.counts[ConstructKind::Quote.slot()] += 1;
        self.quotes.push(Frame::new(ConstructKind::Quote, ch));
    }

    pub fn close_quote(&mut self) -> Option<Frame> {
        let frame = self.quotes.pop()?;
        self.counts[ConstructKind::Quote.slot()] -= 1;
        Some(frame)
    }

    /// Opening characters of the frames still open, bottom first.
    pub fn openers(&self) -> Vec<char> {
        self.frames.iter().map(Frame::opener).collect()
    }
}
