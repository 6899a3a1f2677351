//! # GYH - Lexical Analyzer
//!
//! A scanner for GYH, a small imperative teaching language. It turns source
//! text into a flat stream of classified tokens and keeps going past
//! malformed input, reporting each lexical error as it is found.
//!
//! ## Quick Start
//!
//! ```rust
//! use gyh::{Scanner, TokenKind};
//!
//! # fn main() -> gyh::Result<()> {
//! let mut scanner = Scanner::from_text("DECLARAR x INTEGER");
//!
//! let tokens = scanner.scan_tokens()?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Declare,
//!         TokenKind::Identifier,
//!         TokenKind::IntegerType,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(!scanner.had_error());
//! # Ok(())
//! # }
//! ```
//!
//! ### Pulling tokens one at a time
//!
//! ```rust
//! use gyh::{Scanner, TokenKind};
//!
//! # fn main() -> gyh::Result<()> {
//! let mut scanner = Scanner::from_text("X := 5");
//!
//! loop {
//!     let token = scanner.next_token()?;
//!     println!("{}", token);
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//! }
//!
//! // `X` is not a valid name, but the scan still reached the end
//! assert!(scanner.had_error());
//! assert_eq!(scanner.diagnostics().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Reserved words**: `DECLARAR`, `PROGRAMA`, `INTEGER`, `REAL`, `LER`,
//!   `IMPRIMIR`, `SE`, `ENTAO`, `SENAO`, `ENQTO`, `INICIO`, `FINAL`, `E`, `OU`
//! - **Names**: letters and digits, starting with a lowercase letter
//! - **Numbers**: `42` (integer), `3.14` (real)
//! - **Strings**: `"text"`, closed on the same line
//! - **Operators**: `* / + -`, `< <= > >= == !=`, `:=`
//! - **Delimiters**: `[ ] ( ) :`
//! - **Comments**: `#` to the end of the line
//!
//! ## Error Handling
//!
//! Lexical errors (bad names, unterminated strings, unknown symbols) never
//! stop a scan. They come back as [`TokenKind::Error`] tokens, are logged
//! through `tracing` at `warn` level, and set [`Scanner::had_error`]. Only
//! I/O failures are returned as [`Error`].

/// Version of the GYH lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, LexicalError, Result};
pub use lexer::{FileSource, LineSource, ScanState, Scanner, StrSource, Token, TokenKind};
