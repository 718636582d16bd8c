// std imports
use std::mem::take;

// local imports
use crate::{
    constructs::{ConstructKind, Constructs, Frame},
    cursor::Cursor,
    error::{Error, Result},
    extglob::{Extglob, Extglobs},
    options::Options,
    stash::{Segment, SegmentKind, Stash},
    state::State,
};

// ---

const QMARK: &str = "[^/]";
const QMARK_NO_DOT: &str = "[^./]";
const STAR: &str = "[^/]*?";
const DOT_GUARD: &str = r"(?!\.)";
const DOT_GUARD_DOTS: &str = r"(?!\.{1,2}(?:$|\/))";
const GLOBSTAR: &str = r"(?:(?!(?:\/|^)\.).)*?";
const GLOBSTAR_DOTS: &str = r"(?:(?!(?:\/|^)\.{1,2}(?:$|\/)).)*?";
const SEPARATOR: &str = r"\/";
const OPTIONAL_SEPARATOR: &str = r"(?:\/|^|(?<=\/))";

/// Compiles a glob pattern into its regex description.
///
/// Fails only when a closing `)`, `>`, `}` or `]` is found while no construct is open.
/// Constructs still open at the end of the input are closed on a best-effort basis and
/// reported in [`State::unclosed`].
pub fn compile(pattern: &str, options: &Options) -> Result<State> {
    let state = Compiler::new(pattern, options).run()?;
    log::trace!("compiled {:?} into {}", pattern, state);
    Ok(state)
}

// ---

struct Compiler<'a> {
    options: &'a Options,
    cursor: Cursor<'a>,
    constructs: Constructs,
    extglobs: Extglobs,
    stash: Stash,
    negated: bool,
    dot: bool,
    has_globstar: bool,
    after_group: bool,
    scratch: String,
}

impl<'a> Compiler<'a> {
    fn new(pattern: &'a str, options: &'a Options) -> Self {
        Self {
            options,
            cursor: Cursor::new(pattern),
            constructs: Constructs::new(),
            extglobs: Extglobs::default(),
            stash: Stash::new(),
            negated: false,
            dot: false,
            has_globstar: false,
            after_group: false,
            scratch: String::new(),
        }
    }

    fn run(mut self) -> Result<State> {
        while let Some(ch) = self.cursor.advance() {
            self.step(ch)?;
        }
        Ok(self.finish())
    }

    fn step(&mut self, ch: char) -> Result<()> {
        let after_group = take(&mut self.after_group);

        if self.constructs.is_inside(ConstructKind::Bracket) {
            return self.step_bracket(ch);
        }

        if self.constructs.depth() == 0 && self.cursor.next_is('(') {
            if let Some(extglob) = Extglob::from_sigil(ch) {
                self.extglobs.push(extglob);
                return Ok(());
            }
        }
        if let Some(kind) = ConstructKind::from_opener(ch) {
            self.open(kind, ch);
            return Ok(());
        }
        if let Some(kind) = ConstructKind::from_closer(ch) {
            return self.close(kind, ch);
        }

        match ch {
            '\\' => match self.cursor.advance() {
                Some(escaped) => self.escaped(escaped),
                None => self.append(r"\\"),
            },
            '/' => self.separator(),
            '"' | '\'' | '`' => {
                self.constructs.toggle_quote(ch);
                self.literal(ch);
            }
            '“' => {
                self.constructs.open_quote(ch);
                self.literal(ch);
            }
            '”' => {
                self.constructs.close_quote();
                self.literal(ch);
            }
            '.' => self.dot(),
            '!' if self.cursor.is_first() => self.negated = true,
            '*' => self.star(),
            '?' => self.qmark(),
            '+' if after_group => self.append("+"),
            ':' => self.colon(),
            _ => self.literal(ch),
        }
        Ok(())
    }

    fn step_bracket(&mut self, ch: char) -> Result<()> {
        let body = self.constructs.top().map(Frame::text).unwrap_or_default();
        let negatable = body == "[";
        let empty = negatable || body == "[^";

        match ch {
            '!' | '^' if negatable => {
                self.constructs.note(ch);
                self.append("^");
            }
            ']' if empty => {
                self.constructs.note(ch);
                self.append(r"\]");
            }
            ']' => return self.close(ConstructKind::Bracket, ch),
            '\\' => match self.cursor.advance() {
                Some(escaped) => {
                    self.constructs.note(escaped);
                    self.class_member(escaped);
                }
                None => {
                    self.constructs.note(ch);
                    self.append(r"\\");
                }
            },
            '[' if self.cursor.next_is(':') => match self.posix_class() {
                Some((name, ranges)) => {
                    self.constructs.note_str(&format!("[:{name}:]"));
                    self.append(ranges);
                }
                None => {
                    self.constructs.note(ch);
                    self.class_member(ch);
                }
            },
            _ => {
                self.constructs.note(ch);
                self.class_member(ch);
            }
        }
        Ok(())
    }

    fn open(&mut self, kind: ConstructKind, ch: char) {
        if self.constructs.depth() != 0 {
            self.literal(ch);
            return;
        }

        match kind {
            ConstructKind::Paren => {
                let opening = self.extglobs.last().map_or("(", Extglob::opening);
                self.constructs.push(kind, ch);
                self.append(opening);
            }
            ConstructKind::Bracket => {
                self.append("(?:");
                self.constructs.push(kind, ch);
                self.append("[");
            }
            ConstructKind::Angle | ConstructKind::Brace | ConstructKind::Quote => {
                self.constructs.push(kind, ch);
                self.literal(ch);
            }
        }
    }

    fn close(&mut self, kind: ConstructKind, ch: char) -> Result<()> {
        match self.constructs.top_kind() {
            None => return Err(Error::MissingOpening(kind.opener())),
            Some(top) if top != kind => {
                self.literal(ch);
                return Ok(());
            }
            Some(_) => {}
        }

        let frame = self.constructs.pop(kind)?;
        match kind {
            ConstructKind::Paren => self.close_group(),
            ConstructKind::Bracket => self.close_bracket(&frame, true),
            ConstructKind::Angle | ConstructKind::Brace | ConstructKind::Quote => self.literal(ch),
        }
        Ok(())
    }

    fn close_group(&mut self) {
        let extglob = self.extglobs.pop();
        let segment = self.stash.current_mut();
        match extglob {
            Some(extglob) if !extglob.is_capture() => segment.extglob = true,
            _ => segment.capture = true,
        }

        let closing = match extglob {
            Some(extglob) => {
                let at_end = self.cursor.at_end();
                extglob.closing(at_end, self.star_fragment())
            }
            None => ")".to_owned(),
        };
        self.append(&closing);
        self.after_group = true;
    }

    fn close_bracket(&mut self, frame: &Frame, closed: bool) {
        let mut text = String::new();
        if !closed && (frame.text() == "[" || frame.text() == "[^") {
            text.push_str(r"\[");
        }
        text.push_str(r"]|\[");
        for ch in frame.raw().chars() {
            push_literal(&mut text, ch);
        }
        if closed {
            text.push_str(r"\]");
        }
        text.push(')');
        self.append(&text);
        self.after_group = true;
    }

    fn posix_class(&mut self) -> Option<(String, &'static str)> {
        let mut name = String::new();
        let mut n = 2;
        loop {
            match self.cursor.peek(n)? {
                ':' => break,
                ch if ch.is_ascii_lowercase() && name.len() < 6 => name.push(ch),
                _ => return None,
            }
            n += 1;
        }
        if self.cursor.peek(n + 1)? != ']' {
            return None;
        }

        let ranges = posix_ranges(&name)?;
        for _ in 0..=n {
            self.cursor.advance();
        }
        Some((name, ranges))
    }

    fn separator(&mut self) {
        let optional = self.stash.lookbehind(1).is_some_and(|s| s.globstar);
        self.stash.begin(Segment::slash(optional));
        self.append(if optional { OPTIONAL_SEPARATOR } else { SEPARATOR });
    }

    fn dot(&mut self) {
        if matches!(self.cursor.last(), None | Some('/')) {
            self.stash.current_mut().dot = true;
            self.dot = true;
        }
        self.append(r"\.");
    }

    fn star(&mut self) {
        let mut globstar = false;
        while self.cursor.next_is('*') {
            self.cursor.advance();
            globstar = true;
        }

        if globstar {
            self.has_globstar = true;
            self.stash.current_mut().globstar = true;
            self.append(if self.dot || self.options.dot {
                GLOBSTAR_DOTS
            } else {
                GLOBSTAR
            });
            self.dot = false;
            return;
        }

        if self.stash.current().kind == SegmentKind::Slash
            && self.cursor.last() == Some('/')
            && !self.cursor.rest_starts_with('.')
        {
            self.append(self.dot_guard());
        }
        let star = self.star_fragment();
        self.append(star);
    }

    fn qmark(&mut self) {
        match self.cursor.last() {
            Some('(') if self.constructs.top_kind() == Some(ConstructKind::Paren) => {}
            Some('/') if !self.options.dot => self.append(QMARK_NO_DOT),
            _ => self.append(QMARK),
        }
    }

    fn colon(&mut self) {
        let marker = self.constructs.top_kind() == Some(ConstructKind::Paren)
            && matches!(
                (self.cursor.last(), self.cursor.before_last()),
                (Some('('), _) | (Some('?'), Some('('))
            );
        if marker {
            self.stash.current_mut().capture = true;
        } else {
            self.literal(':');
        }
    }

    fn finish(mut self) -> State {
        let unclosed = self.constructs.openers();
        while let Some(kind) = self.constructs.top_kind() {
            let Ok(frame) = self.constructs.pop(kind) else {
                break;
            };
            match kind {
                ConstructKind::Paren => self.close_group(),
                ConstructKind::Bracket => self.close_bracket(&frame, false),
                ConstructKind::Angle | ConstructKind::Brace | ConstructKind::Quote => {}
            }
        }

        let guard = self.dot_guard();
        let first = self.stash.first_mut();
        if !self.negated && !first.dot && !first.globstar {
            first.text.insert_str(0, guard);
        }

        State {
            negated: self.negated,
            prefix: format!("^{}", self.options.prefix.as_deref().unwrap_or_default()),
            suffix: format!("{}$", self.options.suffix.as_deref().unwrap_or_default()),
            has_globstar: self.has_globstar,
            segments: self.stash.into_segments(),
            unclosed,
        }
    }

    fn dot_guard(&self) -> &'static str {
        if self.options.dot {
            DOT_GUARD_DOTS
        } else {
            DOT_GUARD
        }
    }

    fn star_fragment(&self) -> &'a str {
        self.options.star.as_deref().unwrap_or(STAR)
    }

    fn append(&mut self, text: &str) {
        self.constructs.append(text);
        self.stash.append(text);
    }

    fn literal(&mut self, ch: char) {
        let raw_bar = ch == '|' && self.constructs.depth() != 0;
        self.push_char(ch, !raw_bar && is_meta(ch));
    }

    fn escaped(&mut self, ch: char) {
        self.push_char(ch, is_meta(ch));
    }

    fn class_member(&mut self, ch: char) {
        self.push_char(ch, matches!(ch, '\\' | '[' | ']' | '^' | '&' | '~'));
    }

    fn push_char(&mut self, ch: char, escape: bool) {
        let mut text = take(&mut self.scratch);
        text.clear();
        if escape {
            text.push('\\');
        }
        text.push(ch);
        self.append(&text);
        self.scratch = text;
    }
}

// ---

fn is_meta(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '/'
    )
}

fn push_literal(out: &mut String, ch: char) {
    if is_meta(ch) {
        out.push('\\');
    }
    out.push(ch);
}

fn posix_ranges(name: &str) -> Option<&'static str> {
    Some(match name {
        "alnum" => "a-zA-Z0-9",
        "alpha" => "a-zA-Z",
        "ascii" => r"\x00-\x7F",
        "blank" => r" \t",
        "cntrl" => r"\x00-\x1F\x7F",
        "digit" => "0-9",
        "graph" => r"\x21-\x7E",
        "lower" => "a-z",
        "print" => r"\x20-\x7E",
        "punct" => r"!-/:-@\[-`{-~",
        "space" => r" \t\r\n\x0B\x0C",
        "upper" => "A-Z",
        "word" => "A-Za-z0-9_",
        "xdigit" => "A-Fa-f0-9",
        _ => return None,
    })
}
