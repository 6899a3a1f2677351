//! Line providers feeding the scanner
//!
//! A [`LineSource`] hands out one line at a time, without its terminator,
//! and reports `None` once the input is exhausted. Sources are read forward
//! only; nothing is ever re-read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Supplies source text one line at a time
pub trait LineSource {
    /// Returns the next line without its `\n` / `\r\n` terminator,
    /// or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Line source over any buffered reader
///
/// The reader is owned, so a file handle is closed as soon as the source
/// (and the scanner holding it) is dropped.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }
        Ok(Some(self.buffer.clone()))
    }
}

/// Line source reading a file from disk
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    inner: ReaderSource<BufReader<File>>,
}

impl FileSource {
    /// Opens `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        Ok(FileSource {
            path,
            inner: ReaderSource::new(BufReader::new(file)),
        })
    }

    /// Path this source was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.inner.next_line()
    }
}

/// Line source over in-memory text
#[derive(Debug, Clone)]
pub struct StrSource {
    lines: std::vec::IntoIter<String>,
}

impl StrSource {
    /// Splits `text` into lines the same way a file would be read
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        StrSource {
            lines: lines.into_iter(),
        }
    }

    /// Next line; reading from memory cannot fail
    pub fn take_line(&mut self) -> Option<String> {
        self.lines.next()
    }
}

impl LineSource for StrSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.take_line())
    }
}
