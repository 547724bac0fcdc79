//! Trivia skipping.
//!
//! Whitespace and `(* ... *)` block comments separate tokens and are never
//! emitted. Block comments do not nest.

use recq_util::Span;
use tracing::debug;

use crate::error::{LexError, LexResult};
use crate::unicode::is_trivia;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Skips whitespace and block comments until the next lexeme.
    ///
    /// Repeats until neither applies, so any run of comments and whitespace
    /// is consumed in one call.
    ///
    /// # Errors
    ///
    /// In strict mode, an unterminated comment is reported after the rest of
    /// the input has been consumed.
    pub(super) fn skip_trivia(&mut self) -> LexResult<()> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            let c = self.cursor.current_char();
            if is_trivia(c) {
                self.cursor.advance();
            } else if c == '(' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Skips a block comment starting at `(*`.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.advance_n(2);

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == ')' {
                self.cursor.advance_n(2);
                debug!(line, column, "skipped block comment");
                return Ok(());
            }
            self.cursor.advance();
        }

        let span = Span::new(start, self.cursor.position(), line, column);
        if self.config.strict {
            Err(LexError::UnterminatedComment { span })
        } else {
            debug!(line, column, "unterminated block comment ran to end of input");
            Ok(())
        }
    }
}
