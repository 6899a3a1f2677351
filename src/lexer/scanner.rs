use std::path::Path;

use tracing::{debug, trace, warn};

use super::keyword;
use super::source::{FileSource, LineSource, StrSource};
use super::token::{Token, TokenKind};
use crate::error::{LexicalError, Result};

/// What sits under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Peek {
    /// No line left to read
    Exhausted,
    /// Cursor is at or past the end of the current line
    EndOfLine,
    /// Next unread character
    Char(char),
}

/// Separator characters skipped between tokens
///
/// Unicode white space minus the no-break spaces (U+00A0, U+2007, U+202F) and
/// NEL, plus the information separators U+001C..=U+001F.
fn is_blank(c: char) -> bool {
    matches!(c, '\u{1c}'..='\u{1f}')
        || (c.is_whitespace() && !matches!(c, '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}'))
}

/// Position of a scan within its input
///
/// All scanning steps operate on this value and nothing else, so each step
/// can be exercised on a single line without a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    /// Current line, `None` once the input is exhausted
    line_text: Option<Vec<char>>,
    /// Offset of the next unread character (0-indexed)
    column: usize,
    /// Current line number (1-indexed)
    line_number: usize,
    /// Set by the first lexical error, never cleared
    error_seen: bool,
}

impl ScanState {
    fn new(first_line: Option<String>) -> Self {
        ScanState {
            line_text: first_line.map(|line| line.chars().collect()),
            column: 0,
            line_number: 1,
            error_seen: false,
        }
    }

    /// Current line number (1-indexed)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Offset of the next unread character in the current line
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether any lexical error has been reported
    pub fn error_seen(&self) -> bool {
        self.error_seen
    }

    /// Whether the input has run out
    pub fn is_exhausted(&self) -> bool {
        self.line_text.is_none()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.line_text.as_ref().and_then(|line| line.get(index).copied())
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.line_text
            .as_ref()
            .map(|line| line[start..end].iter().collect())
            .unwrap_or_default()
    }

    fn line_len(&self) -> usize {
        self.line_text.as_ref().map_or(0, Vec::len)
    }

    fn peek(&self) -> Peek {
        match &self.line_text {
            None => Peek::Exhausted,
            Some(line) => match line.get(self.column) {
                Some(&c) => Peek::Char(c),
                None => Peek::EndOfLine,
            },
        }
    }

    /// Moves to the next line; the counter advances even when `next` is `None`.
    fn advance_line(&mut self, next: Option<String>) {
        self.line_text = next.map(|line| line.chars().collect());
        self.line_number += 1;
        self.column = 0;
    }

    fn token(&self, kind: TokenKind, lexeme: String) -> Token {
        Token::new(kind, lexeme, self.line_number)
    }

    /// Keyword or identifier: a run of letters and digits
    fn scan_word(&mut self) -> std::result::Result<Token, LexicalError> {
        let start = self.column;
        while self
            .char_at(self.column)
            .is_some_and(|c| c.is_alphabetic() || c.is_ascii_digit())
        {
            self.column += 1;
        }
        let lexeme = self.slice(start, self.column);

        if let Some(kind) = keyword::lookup(&lexeme) {
            return Ok(self.token(kind, lexeme));
        }

        if lexeme.starts_with(char::is_lowercase) {
            Ok(self.token(TokenKind::Identifier, lexeme))
        } else {
            Err(LexicalError::InvalidIdentifier {
                line: self.line_number,
                lexeme,
            })
        }
    }

    /// Digits with at most one dot; a second dot ends the literal
    fn scan_number(&mut self) -> Token {
        let start = self.column;
        let mut seen_dot = false;
        while let Some(c) = self.char_at(self.column) {
            if c == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.column += 1;
        }

        let kind = if seen_dot {
            TokenKind::Real
        } else {
            TokenKind::Integer
        };
        self.token(kind, self.slice(start, self.column))
    }

    /// Quoted text closed on the same line
    fn scan_string(&mut self) -> std::result::Result<Token, LexicalError> {
        let start = self.column;
        let mut end = start + 1;
        while self.char_at(end).is_some_and(|c| c != '"') {
            end += 1;
        }

        if self.char_at(end).is_some() {
            self.column = end + 1;
            Ok(self.token(TokenKind::String, self.slice(start + 1, end)))
        } else {
            self.column = self.line_len();
            Err(LexicalError::UnterminatedString {
                line: self.line_number,
                lexeme: self.slice(start, self.column),
            })
        }
    }

    /// Operators and delimiters, with one character of lookahead
    fn scan_symbol(&mut self, c: char) -> std::result::Result<Token, LexicalError> {
        let next = self.char_at(self.column + 1);
        let (kind, width) = match (c, next) {
            ('[', _) => (TokenKind::LeftBracket, 1),
            (']', _) => (TokenKind::RightBracket, 1),
            ('(', _) => (TokenKind::LeftParen, 1),
            (')', _) => (TokenKind::RightParen, 1),
            (':', Some('=')) => (TokenKind::Assign, 2),
            (':', _) => (TokenKind::Colon, 1),
            ('*', _) => (TokenKind::Star, 1),
            ('/', _) => (TokenKind::Slash, 1),
            ('+', _) => (TokenKind::Plus, 1),
            ('-', _) => (TokenKind::Minus, 1),
            ('<', Some('=')) => (TokenKind::LessEqual, 2),
            ('<', _) => (TokenKind::Less, 1),
            ('>', Some('=')) => (TokenKind::GreaterEqual, 2),
            ('>', _) => (TokenKind::Greater, 1),
            ('=', Some('=')) => (TokenKind::EqualEqual, 2),
            ('!', Some('=')) => (TokenKind::NotEqual, 2),
            _ => {
                self.column += 1;
                return Err(LexicalError::UnknownSymbol {
                    line: self.line_number,
                    lexeme: c.to_string(),
                });
            }
        };

        let start = self.column;
        self.column += width;
        Ok(self.token(kind, self.slice(start, self.column)))
    }
}

/// Scanner for GYH source text
///
/// Pulls lines from a [`LineSource`] on demand and hands out one token per
/// call to [`next_token`](Scanner::next_token). Lexical errors become
/// [`TokenKind::Error`] tokens and scanning carries on; only I/O failures are
/// returned as `Err`.
#[derive(Debug)]
pub struct Scanner<S> {
    /// Where lines come from
    source: S,
    /// Cursor, line counter and error flag
    state: ScanState,
    /// Every lexical error reported so far, in order
    diagnostics: Vec<LexicalError>,
}

impl Scanner<FileSource> {
    /// Opens a source file and reads its first line
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let source = FileSource::open(path)?;
        debug!(path = %source.path().display(), "opened source file");
        Scanner::new(source)
    }
}

impl Scanner<StrSource> {
    /// Creates a scanner over in-memory source text
    pub fn from_text(text: &str) -> Self {
        let mut source = StrSource::new(text);
        let first_line = source.take_line();
        Scanner::with_first_line(source, first_line)
    }
}

impl<S: LineSource> Scanner<S> {
    /// Creates a scanner, reading the first line from `source`
    pub fn new(mut source: S) -> Result<Self> {
        let first_line = source.next_line()?;
        Ok(Scanner::with_first_line(source, first_line))
    }

    fn with_first_line(source: S, first_line: Option<String>) -> Self {
        debug!(empty = first_line.is_none(), "scanner ready");
        Scanner {
            source,
            state: ScanState::new(first_line),
            diagnostics: Vec::new(),
        }
    }

    /// Returns the next token
    ///
    /// Once the input is exhausted this keeps returning the same
    /// [`TokenKind::Eof`] token without touching the source again.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            let c = match self.state.peek() {
                Peek::Exhausted => return Ok(Token::eof(self.state.line_number)),
                Peek::EndOfLine => {
                    self.advance_line()?;
                    continue;
                }
                Peek::Char(c) => c,
            };

            if is_blank(c) {
                self.state.column += 1;
                continue;
            }

            // Comments run to the end of the line
            if c == '#' {
                self.advance_line()?;
                continue;
            }

            let scanned = if c.is_alphabetic() {
                self.state.scan_word()
            } else if c.is_ascii_digit() {
                Ok(self.state.scan_number())
            } else if c == '"' {
                self.state.scan_string()
            } else {
                self.state.scan_symbol(c)
            };

            return Ok(match scanned {
                Ok(token) => token,
                Err(error) => self.report(error),
            });
        }
    }

    /// Scans all remaining tokens, including the final EOF marker
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Whether any lexical error has been seen so far
    pub fn had_error(&self) -> bool {
        self.state.error_seen
    }

    /// Lexical errors reported so far, in detection order
    pub fn diagnostics(&self) -> &[LexicalError] {
        &self.diagnostics
    }

    /// Current scan position
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    fn advance_line(&mut self) -> Result<()> {
        let next = self.source.next_line()?;
        self.state.advance_line(next);
        if self.state.is_exhausted() {
            trace!(line = self.state.line_number, "end of input");
        } else {
            trace!(line = self.state.line_number, "line loaded");
        }
        Ok(())
    }

    fn report(&mut self, error: LexicalError) -> Token {
        warn!(line = error.line(), lexeme = error.lexeme(), "{}", error);
        self.state.error_seen = true;
        let token = Token::new(TokenKind::Error, error.lexeme(), error.line());
        self.diagnostics.push(error);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(line: &str) -> ScanState {
        ScanState::new(Some(line.to_string()))
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::from_text(source);
        scanner
            .scan_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_declaration() {
        let mut scanner = Scanner::from_text("DECLARAR x INTEGER");
        let tokens = scanner.scan_tokens().unwrap();

        assert_eq!(tokens.len(), 4); // DECLARAR x INTEGER EOF
        assert_eq!(tokens[0].kind, TokenKind::Declare);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[2].kind, TokenKind::IntegerType);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert!(!scanner.had_error());
    }

    #[test]
    fn test_uppercase_identifier_is_error() {
        let mut scanner = Scanner::from_text("X := 5");
        let tokens = scanner.scan_tokens().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "X");
        assert_eq!(tokens[1].kind, TokenKind::Assign);
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[2].lexeme, "5");
        assert!(scanner.had_error());
        assert_eq!(
            scanner.diagnostics(),
            &[LexicalError::InvalidIdentifier {
                line: 1,
                lexeme: "X".to_string()
            }]
        );
    }

    #[test]
    fn test_word_run_includes_digits() {
        let mut s = state("abc123+");
        let token = s.scan_word().unwrap();
        assert_eq!(token.lexeme, "abc123");
        assert_eq!(s.column(), 6);
    }

    #[test]
    fn test_keyword_wins_over_identifier() {
        let mut s = state("ENTAO");
        assert_eq!(s.scan_word().unwrap().kind, TokenKind::Then);
    }

    #[test]
    fn test_number_second_dot_not_consumed() {
        let mut s = state("1.2.3");
        let token = s.scan_number();
        assert_eq!(token.kind, TokenKind::Real);
        assert_eq!(token.lexeme, "1.2");
        assert_eq!(s.column(), 3);
    }

    #[test]
    fn test_number_trailing_dot_is_real() {
        let mut s = state("12.");
        let token = s.scan_number();
        assert_eq!(token.kind, TokenKind::Real);
        assert_eq!(token.lexeme, "12.");
    }

    #[test]
    fn test_integer() {
        let mut s = state("42abc");
        let token = s.scan_number();
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(token.lexeme, "42");
    }

    #[test]
    fn test_string_strips_quotes() {
        let mut s = state("\"hello world\" x");
        let token = s.scan_string().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "hello world");
        assert_eq!(s.column(), 13);
    }

    #[test]
    fn test_empty_string() {
        let mut s = state("\"\"");
        assert_eq!(s.scan_string().unwrap().lexeme, "");
    }

    #[test]
    fn test_unterminated_string() {
        let mut s = state("x \"abc");
        s.column = 2;
        let err = s.scan_string().unwrap_err();
        assert_eq!(err.lexeme(), "\"abc");
        assert_eq!(s.column(), 6);
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            kinds(":= : <= < >= > == !="),
            vec![
                TokenKind::Assign,
                TokenKind::Colon,
                TokenKind::LessEqual,
                TokenKind::Less,
                TokenKind::GreaterEqual,
                TokenKind::Greater,
                TokenKind::EqualEqual,
                TokenKind::NotEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lone_equals_and_bang_are_errors() {
        let mut scanner = Scanner::from_text("= !");
        let tokens = scanner.scan_tokens().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "=");
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].lexeme, "!");
        assert_eq!(scanner.diagnostics().len(), 2);
    }

    #[test]
    fn test_unknown_symbol_advances_one() {
        let mut s = state("@@");
        assert!(s.scan_symbol('@').is_err());
        assert_eq!(s.column(), 1);
    }

    #[test]
    fn test_comment_truncates_line() {
        assert_eq!(
            kinds("x # y := 3\nz"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::from_text("x\ny");
        let tokens = scanner.scan_tokens().unwrap();
        let eof = tokens.last().unwrap().clone();
        assert_eq!(eof.line, 3);
        for _ in 0..3 {
            assert_eq!(scanner.next_token().unwrap(), eof);
        }
        assert_eq!(scanner.state().line_number(), 3);
    }

    #[test]
    fn test_no_break_space_is_not_blank() {
        let mut scanner = Scanner::from_text("x\u{a0}y\u{2007}");
        let tokens = scanner.scan_tokens().unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Error, "\u{a0}"),
                (TokenKind::Identifier, "y"),
                (TokenKind::Error, "\u{2007}"),
                (TokenKind::Eof, "EOF"),
            ]
        );
    }

    #[test]
    fn test_separator_controls_are_blank() {
        assert_eq!(
            kinds("a\u{1c}b\u{1f}\t\u{3000}c\u{2028}"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert!(!is_blank('\u{85}'));
        assert!(is_blank('\u{b}'));
    }

    #[test]
    fn test_only_ascii_digits_continue_words_and_numbers() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        let mut scanner = Scanner::from_text("a\u{663} \u{663}1");
        let tokens = scanner.scan_tokens().unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Error, "\u{663}"),
                (TokenKind::Error, "\u{663}"),
                (TokenKind::Integer, "1"),
                (TokenKind::Eof, "EOF"),
            ]
        );
        assert_eq!(scanner.diagnostics().len(), 2);
    }

    #[test]
    fn test_empty_input_is_eof_on_line_one() {
        let mut scanner = Scanner::from_text("");
        let token = scanner.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.line, 1);
    }
}
