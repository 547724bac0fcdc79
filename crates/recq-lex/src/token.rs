//! Token definitions for the recq language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text that produced
//! it and the position of its first character. Tokens borrow their text from
//! the source buffer, so producing one never allocates.

use std::fmt;

use recq_util::Span;

/// The closed set of token classifications.
///
/// Some members are reserved and never produced by the scanner: `EndOfLine`,
/// `Float`, `Bool`, `Date`, `Time` and `Foreach`. They stay in the set so that
/// downstream code can match on them once the scanner learns to emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========================================================================
    // Sentinels
    // ========================================================================
    /// End of input. Also carries unknown characters in permissive mode.
    Eof,
    /// Reserved line terminator.
    EndOfLine,

    // ========================================================================
    // Literals
    // ========================================================================
    /// Identifier: `total_amount`
    Identifier,
    /// Integer literal: `42`
    Number,
    /// Reserved floating-point literal.
    Float,
    /// String literal; the text excludes the quotes.
    String,
    /// Reserved boolean literal.
    Bool,
    /// Reserved date literal.
    Date,
    /// Reserved time literal.
    Time,

    // ========================================================================
    // Operators
    // ========================================================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=` or `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `->`
    RightArrow,
    /// `<-`
    LeftArrow,
    /// `!` or keyword `not`
    Not,
    /// `in`
    In,
    /// `like`
    Like,
    /// `between`
    Between,

    // ========================================================================
    // Delimiters
    // ========================================================================
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// Reserved; `foreach` currently scans as an identifier.
    Foreach,
    /// `function`
    Function,
    /// `return`
    Return,
    /// `let`
    Let,
    /// `type`
    Type,
    /// `record`
    Record,
    /// `action`
    Action,
    /// `start`
    Start,
    /// `end`
    End,
    /// `do`
    Do,
    /// `stop`
    Stop,
    /// `number`
    NumberType,
    /// `float`
    FloatType,
    /// `string`
    StringType,
    /// `boolean`
    BoolType,
    /// `date`
    DateType,
    /// `time`
    TimeType,
    /// `array`
    Array,
    /// `select`
    Select,
    /// `from`
    From,
    /// `where`
    Where,
    /// `recursive`
    Recursive,
    /// `browse`
    Browse,
    /// `case`
    Case,
}

/// Keyword spellings recognized by [`keyword_from_ident`], in lower case.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("select", TokenKind::Select),
    ("case", TokenKind::Case),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("let", TokenKind::Let),
    ("type", TokenKind::Type),
    ("record", TokenKind::Record),
    ("action", TokenKind::Action),
    ("start", TokenKind::Start),
    ("end", TokenKind::End),
    ("do", TokenKind::Do),
    ("stop", TokenKind::Stop),
    ("number", TokenKind::NumberType),
    ("float", TokenKind::FloatType),
    ("string", TokenKind::StringType),
    ("boolean", TokenKind::BoolType),
    ("date", TokenKind::DateType),
    ("time", TokenKind::TimeType),
    ("array", TokenKind::Array),
    ("from", TokenKind::From),
    ("where", TokenKind::Where),
    ("recursive", TokenKind::Recursive),
    ("browse", TokenKind::Browse),
    ("in", TokenKind::In),
    ("like", TokenKind::Like),
    ("between", TokenKind::Between),
    ("not", TokenKind::Not),
];

/// Looks up an identifier in the keyword table, ignoring ASCII case.
///
/// Returns `None` for anything that is not a keyword, including `foreach`.
///
/// # Example
///
/// ```
/// use recq_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("SELECT"), Some(TokenKind::Select));
/// assert_eq!(keyword_from_ident("Between"), Some(TokenKind::Between));
/// assert_eq!(keyword_from_ident("total"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    // Longest keyword is "recursive"
    if ident.len() > 9 {
        return None;
    }

    KEYWORDS
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(ident))
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Returns true if this kind is a keyword (including the keyword
    /// operators `in`, `like` and `between`, and the reserved `Foreach`).
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Foreach
                | TokenKind::Function
                | TokenKind::Return
                | TokenKind::Let
                | TokenKind::Type
                | TokenKind::Record
                | TokenKind::Action
                | TokenKind::Start
                | TokenKind::End
                | TokenKind::Do
                | TokenKind::Stop
                | TokenKind::NumberType
                | TokenKind::FloatType
                | TokenKind::StringType
                | TokenKind::BoolType
                | TokenKind::DateType
                | TokenKind::TimeType
                | TokenKind::Array
                | TokenKind::Select
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::Recursive
                | TokenKind::Browse
                | TokenKind::Case
                | TokenKind::In
                | TokenKind::Like
                | TokenKind::Between
        )
    }

    /// Returns true if this kind is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Bool
                | TokenKind::Date
                | TokenKind::Time
        )
    }

    /// Returns true if this kind is an operator.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Assign
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::RightArrow
                | TokenKind::LeftArrow
                | TokenKind::Not
                | TokenKind::In
                | TokenKind::Like
                | TokenKind::Between
        )
    }

    /// Returns true if this kind is a delimiter.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::Dot
        )
    }

    /// Returns true for members the scanner never produces.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::EndOfLine
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::Date
                | TokenKind::Time
                | TokenKind::Foreach
        )
    }

    /// Returns the canonical spelling of fixed-text kinds.
    ///
    /// Kinds whose text varies (identifiers and literals) and the sentinels
    /// return `None`. `NotEqual` spells as `!=` and `Not` as `!`.
    pub fn as_str(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Eof
            | TokenKind::EndOfLine
            | TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Bool
            | TokenKind::Date
            | TokenKind::Time => return None,

            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::RightArrow => "->",
            TokenKind::LeftArrow => "<-",
            TokenKind::Not => "!",
            TokenKind::In => "in",
            TokenKind::Like => "like",
            TokenKind::Between => "between",

            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",

            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Foreach => "foreach",
            TokenKind::Function => "function",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::Type => "type",
            TokenKind::Record => "record",
            TokenKind::Action => "action",
            TokenKind::Start => "start",
            TokenKind::End => "end",
            TokenKind::Do => "do",
            TokenKind::Stop => "stop",
            TokenKind::NumberType => "number",
            TokenKind::FloatType => "float",
            TokenKind::StringType => "string",
            TokenKind::BoolType => "boolean",
            TokenKind::DateType => "date",
            TokenKind::TimeType => "time",
            TokenKind::Array => "array",
            TokenKind::Select => "select",
            TokenKind::From => "from",
            TokenKind::Where => "where",
            TokenKind::Recursive => "recursive",
            TokenKind::Browse => "browse",
            TokenKind::Case => "case",
        };
        Some(s)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "'{}'", s),
            None => match self {
                TokenKind::Eof => write!(f, "end of input"),
                TokenKind::EndOfLine => write!(f, "end of line"),
                TokenKind::Identifier => write!(f, "identifier"),
                TokenKind::Number => write!(f, "number"),
                TokenKind::Float => write!(f, "float"),
                TokenKind::String => write!(f, "string"),
                TokenKind::Bool => write!(f, "boolean"),
                TokenKind::Date => write!(f, "date"),
                TokenKind::Time => write!(f, "time"),
                other => write!(f, "{:?}", other),
            },
        }
    }
}

/// A classified lexeme with its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The classification.
    pub kind: TokenKind,
    /// The source text of the lexeme. String literals exclude their quotes.
    pub text: &'src str,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based).
    pub column: u32,
    /// Byte range of the whole lexeme, quotes included.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token positioned at the start of `span`.
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self {
            kind,
            text,
            line: span.line,
            column: span.column,
            span,
        }
    }

    /// Returns true for the genuine end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof && self.text.is_empty()
    }

    /// Returns true for an unknown character reported in permissive mode.
    ///
    /// Such a token has kind `Eof` but carries the offending character as
    /// its text, so it is not the end of input.
    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Eof && !self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            TokenKind::String => write!(f, "string {:?}", self.text),
            _ if self.is_unknown() => write!(f, "unknown character `{}`", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
