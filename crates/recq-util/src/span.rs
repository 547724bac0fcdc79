//! Source location tracking.
//!
//! A [`Span`] records where a lexeme sits in the source text: byte offsets
//! for slicing, plus the 1-based line and column of its first character for
//! human-readable output.
//!
//! # Examples
//!
//! ```
//! use recq_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! ```

/// Source location span
///
/// `start..end` is a byte range into the source buffer. `line` and `column`
/// locate `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location.
    ///
    /// # Examples
    ///
    /// ```
    /// use recq_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use recq_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recq_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line
/// terminator.
///
/// # Examples
///
/// ```
/// use recq_util::span::line_at;
///
/// assert_eq!(line_at("let x\nlet y\r\n", 2), Some("let y"));
/// assert_eq!(line_at("let x", 3), None);
/// ```
pub fn line_at(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(3, 1, 4);
        assert_eq!(span.start, span.end);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 4);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(10, 10, 1, 5).is_empty());
        assert!(!Span::new(10, 20, 1, 5).is_empty());
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(10, 20, 1, 5).len(), 10);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(10, 20, 1, 5);
        assert!(span.contains(10));
        assert!(span.contains(15));
        assert!(!span.contains(20));
    }

    #[test]
    fn test_span_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }

    #[test]
    fn test_line_at() {
        let source = "select a\nfrom t\n\nwhere b";
        assert_eq!(line_at(source, 1), Some("select a"));
        assert_eq!(line_at(source, 2), Some("from t"));
        assert_eq!(line_at(source, 3), Some(""));
        assert_eq!(line_at(source, 4), Some("where b"));
        assert_eq!(line_at(source, 5), None);
        assert_eq!(line_at(source, 0), None);
    }
}
