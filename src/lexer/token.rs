use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Text of the token (string contents without quotes)
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Creates the end-of-input marker for the given line
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "EOF", line)
    }

    /// Content hash of the lexeme, for debugging output only
    pub fn fingerprint(&self) -> i32 {
        fingerprint(&self.lexeme)
    }

    /// Check if this is the end-of-input marker
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Check if this token reports a lexical error
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "<{}, \"{}\", line: {}, fingerprint: {}>",
            self.kind,
            self.lexeme,
            self.line,
            self.fingerprint()
        )
    }
}

/// Polynomial string hash: `h = 31 * h + unit` over UTF-16 code units, wrapping.
///
/// Pure in `text`, so equal lexemes always share a fingerprint.
pub fn fingerprint(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// All possible token types in GYH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Keywords
    /// DECLARAR keyword
    Declare,
    /// PROGRAMA keyword
    Program,
    /// INTEGER type keyword
    IntegerType,
    /// REAL type keyword
    RealType,
    /// LER keyword
    Read,
    /// IMPRIMIR keyword
    Print,
    /// SE keyword
    If,
    /// ENTAO keyword
    Then,
    /// SENAO keyword
    Else,
    /// ENQTO keyword
    While,
    /// INICIO keyword (block start)
    Begin,
    /// FINAL keyword (block end)
    End,

    // Arithmetic operators
    /// Multiplication operator (*)
    Star,
    /// Division operator (/)
    Slash,
    /// Addition operator (+)
    Plus,
    /// Subtraction operator (-)
    Minus,

    // Relational operators
    /// Less than operator (<)
    Less,
    /// Less than or equal operator (<=)
    LessEqual,
    /// Greater than operator (>)
    Greater,
    /// Greater than or equal operator (>=)
    GreaterEqual,
    /// Equality operator (==)
    EqualEqual,
    /// Inequality operator (!=)
    NotEqual,

    // Boolean operators
    /// Logical AND (E)
    And,
    /// Logical OR (OU)
    Or,

    // Delimiters
    /// Left bracket [
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Colon delimiter (:)
    Colon,

    /// Assignment operator (:=)
    Assign,

    // Names and literals
    /// Variable name (lowercase-initial)
    Identifier,
    /// Integer literal
    Integer,
    /// Real literal
    Real,
    /// String literal
    String,

    // Special
    /// End of file marker
    Eof,
    /// Lexical error; the lexeme holds the offending text
    Error,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Declare
                | TokenKind::Program
                | TokenKind::IntegerType
                | TokenKind::RealType
                | TokenKind::Read
                | TokenKind::Print
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Begin
                | TokenKind::End
        )
    }

    /// Check if token is an arithmetic, relational, boolean or assignment operator
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::EqualEqual
                | TokenKind::NotEqual
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Assign
        )
    }

    /// Check if token is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Real | TokenKind::String
        )
    }

    /// Get keyword (or word operator) from string
    pub fn keyword(s: &str) -> Option<TokenKind> {
        super::keyword::lookup(s)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
