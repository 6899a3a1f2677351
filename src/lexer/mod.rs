//! Lexical analysis for GYH
//!
//! Converts source text into a stream of tokens, one line at a time.

pub mod keyword;
mod scanner;
pub mod source;
mod token;

pub use scanner::{ScanState, Scanner};
pub use source::{FileSource, LineSource, ReaderSource, StrSource};
pub use token::{fingerprint, Token, TokenKind};
