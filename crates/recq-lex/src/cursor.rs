//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor only ever moves forward. Its byte position never decreases,
/// `line` grows by one each time a `\n` is consumed (and `column` resets to
/// 1), and every other consumed character moves `column` on by one.
///
/// # Example
///
/// ```
/// use recq_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 10;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor at the start of `source`: offset 0, line 1, column 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one
    /// without consuming anything (0 = current).
    ///
    /// Returns '\0' past the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use recq_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: everything up to and including the target is ASCII
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            self.bump_position(b == b'\n');
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.bump_position(false);
        }
    }

    #[inline]
    fn bump_position(&mut self, newline: bool) {
        if newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters, stopping early
    /// at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use recq_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("(* x *)");
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.current_char(), ' ');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use recq_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("->");
    /// assert!(!cursor.match_char('>'));
    /// cursor.advance();
    /// assert!(cursor.match_char('>'));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use recq_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("select *");
    /// let start = cursor.position();
    /// cursor.advance_n(6);
    /// assert_eq!(cursor.slice_from(start), "select");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }
}
