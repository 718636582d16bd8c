/// How a segment record was started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// The record opened at the beginning of the input.
    #[default]
    Bos,
    /// A record opened by an unescaped `/`.
    Slash,
}

/// Compiled text of one `/`-delimited component of a pattern, plus what the scanner
/// learned about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Regex fragment emitted for the component.
    pub text: String,
    /// The component began with a literal dot.
    pub dot: bool,
    /// The component is a `**` wildcard.
    pub globstar: bool,
    /// The separator opening this component directly follows a globstar component
    /// and may match zero directories.
    pub optional: bool,
    /// The component contains a plain or `@(...)` group.
    pub capture: bool,
    /// The component contains an extglob group other than `@(...)`.
    pub extglob: bool,
}

impl Segment {
    pub fn bos() -> Self {
        Self::default()
    }

    pub fn slash(optional: bool) -> Self {
        Self {
            kind: SegmentKind::Slash,
            optional,
            ..Self::default()
        }
    }
}

// ---

/// Ordered segment records of a pattern being compiled.
///
/// Only the last record is ever mutated. Once [`Stash::begin`] starts a new one, the
/// previous record is frozen.
#[derive(Debug)]
pub(crate) struct Stash {
    done: Vec<Segment>,
    current: Segment,
}

impl Stash {
    pub fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Segment::bos(),
        }
    }

    #[inline]
    pub fn current(&self) -> &Segment {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Segment {
        &mut self.current
    }

    pub fn begin(&mut self, segment: Segment) {
        let finished = std::mem::replace(&mut self.current, segment);
        self.done.push(finished);
    }

    pub fn append(&mut self, text: &str) {
        self.current.text.push_str(text);
    }

    /// Returns the `n`-th most recent record, `1` being the current one.
    pub fn lookbehind(&self, n: usize) -> Option<&Segment> {
        match n {
            0 => None,
            1 => Some(&self.current),
            _ => self.done.len().checked_sub(n - 1).map(|i| &self.done[i]),
        }
    }

    pub fn first_mut(&mut self) -> &mut Segment {
        match self.done.first_mut() {
            Some(first) => first,
            None => &mut self.current,
        }
    }

    pub fn into_segments(mut self) -> Vec<Segment> {
        self.done.push(self.current);
        self.done
    }
}

#[cfg(test)]
mod tests;
