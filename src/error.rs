//! Error types for the GYH lexer

use thiserror::Error;

/// Lexical errors detected while scanning
///
/// These never stop a scan. Each one is paired with an
/// [`TokenKind::Error`](crate::lexer::TokenKind::Error) token carrying the
/// same offending text, so the caller sees it in the token stream as well.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// Word that is neither a reserved word nor a lowercase-initial name
    ///
    /// **Triggered by:** a name starting with an uppercase letter
    /// **Example:** `X := 5`, `Total := 0`
    #[error("Invalid identifier \"{lexeme}\" at line {line} (must start with a lowercase letter)")]
    InvalidIdentifier {
        /// Line number where error occurred
        line: usize,
        /// The rejected word
        lexeme: String,
    },

    /// String literal with no closing quote on its line
    ///
    /// **Triggered by:** `"` followed by the end of the line
    /// **Example:** `IMPRIMIR "hello`
    #[error("Unterminated string at line {line}: {lexeme}")]
    UnterminatedString {
        /// Line number where error occurred
        line: usize,
        /// Text from the opening quote to the end of the line
        lexeme: String,
    },

    /// Character that starts no token
    ///
    /// **Example:** `a = 1` (lone `=`), `!x`, `@`
    #[error("Unknown symbol \"{lexeme}\" at line {line}")]
    UnknownSymbol {
        /// Line number where error occurred
        line: usize,
        /// The offending character
        lexeme: String,
    },
}

impl LexicalError {
    /// Line on which the error was detected
    pub fn line(&self) -> usize {
        match self {
            LexicalError::InvalidIdentifier { line, .. }
            | LexicalError::UnterminatedString { line, .. }
            | LexicalError::UnknownSymbol { line, .. } => *line,
        }
    }

    /// Offending source text
    pub fn lexeme(&self) -> &str {
        match self {
            LexicalError::InvalidIdentifier { lexeme, .. }
            | LexicalError::UnterminatedString { lexeme, .. }
            | LexicalError::UnknownSymbol { lexeme, .. } => lexeme,
        }
    }
}

/// GYH lexer errors
#[derive(Error, Debug)]
pub enum Error {
    /// Source could not be opened or read
    ///
    /// **Triggered by:** missing file, permission denied, invalid UTF-8,
    /// or a read failure in the middle of a scan
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for GYH lexer operations
pub type Result<T> = std::result::Result<T, Error>;
