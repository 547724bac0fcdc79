//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The run is then looked up in the keyword table
    /// without regard to case; the token text keeps the case as written.
    ///
    /// # Returns
    ///
    /// Either a keyword kind (e.g., `TokenKind::Select`) or `TokenKind::Identifier`
    pub(super) fn lex_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
    }
}
