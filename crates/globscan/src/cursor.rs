use std::collections::VecDeque;
use std::str::Chars;

// ---

/// Character cursor over a glob pattern.
///
/// Characters are consumed one at a time with [`Cursor::advance`]. Lookahead is served
/// from a queue that [`Cursor::peek`] fills lazily, so peeking the same position twice
/// never touches the underlying source again. The two most recently consumed characters
/// before the current one are kept for lookbehind.
pub(crate) struct Cursor<'a> {
    source: Chars<'a>,
    queue: VecDeque<char>,
    history: [Option<char>; 3],
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor, dropping a leading `./` from the input.
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix("./").unwrap_or(input);
        Self {
            source: input.chars(),
            queue: VecDeque::new(),
            history: [None; 3],
            consumed: 0,
        }
    }

    /// Consumes the next character, returning `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.queue.pop_front().or_else(|| self.source.next())?;
        self.history = [Some(ch), self.history[0], self.history[1]];
        self.consumed += 1;
        Some(ch)
    }

    /// Returns the character `n` positions ahead of the current one without consuming it.
    pub fn peek(&mut self, n: usize) -> Option<char> {
        debug_assert!(n > 0, "peek distance must be positive");
        while self.queue.len() < n {
            let ch = self.source.next()?;
            self.queue.push_back(ch);
        }
        self.queue.get(n - 1).copied()
    }

    #[inline]
    pub fn next_is(&mut self, ch: char) -> bool {
        self.peek(1) == Some(ch)
    }

    #[inline]
    pub fn at_end(&mut self) -> bool {
        self.peek(1).is_none()
    }

    /// The character consumed right before the current one.
    #[inline]
    pub fn last(&self) -> Option<char> {
        self.history[1]
    }

    #[inline]
    pub fn before_last(&self) -> Option<char> {
        self.history[2]
    }

    /// Reports whether the current character is the first one of the input.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.consumed == 1
    }

    /// Unconsumed remainder of the input, including characters already peeked.
    pub fn rest(&self) -> impl Iterator<Item = char> + '_ {
        self.queue.iter().copied().chain(self.source.clone())
    }

    pub fn rest_starts_with(&self, ch: char) -> bool {
        self.rest().next() == Some(ch)
    }
}

#[cfg(test)]
mod tests;
