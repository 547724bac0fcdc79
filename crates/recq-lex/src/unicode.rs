//! Character classes used by the scanner.

/// Checks if a character can start an identifier: a Unicode letter or `_`.
///
/// # Example
///
/// ```
/// use recq_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('é'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier: a start character or
/// an ASCII digit.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Checks if a character is trivia between tokens.
///
/// Spaces, tabs, carriage returns and line feeds.
#[inline]
pub fn is_trivia(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
