//! Output byte tokenizer.
//!
//! Splits a chunk of recorded output into plain characters and CSI control
//! sequences. A sequence cut off by the end of the chunk stops iteration and
//! is reported through [`Tokenizer::incomplete`], so the caller can prepend
//! it to the next chunk.

use std::fmt;

use crate::error::SequenceError;

const ESC: u8 = 0x1b;

/// Two-byte (and charset) escapes that are consumed without effect:
/// character set selection and keypad mode hints.
const IGNORED_ESCAPES: &[&[u8]] = &[b"(B", b"(0", b")B", b")0", b"=", b">"];

/// A parsed CSI control sequence (`ESC [ params command`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub command: char,
    pub params: Vec<String>,
}

impl Sequence {
    pub fn new(command: char, params: &[&str]) -> Self {
        Self {
            command,
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn parse(params: &[u8], command: u8) -> Self {
        let params = if params.is_empty() {
            Vec::new()
        } else {
            String::from_utf8_lossy(params)
                .split(';')
                .map(str::to_string)
                .collect()
        };
        Self {
            command: command as char,
            params,
        }
    }

    /// Parameter at `index`, `None` when missing or empty.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params
            .get(index)
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    /// Numeric parameter at `index`, or `default` when missing or empty.
    pub fn number(&self, index: usize, default: usize) -> Result<usize, SequenceError> {
        match self.param(index) {
            None => Ok(default),
            Some(p) => p
                .parse()
                .map_err(|_| self.unsupported("non-numeric parameter")),
        }
    }

    pub fn unsupported(&self, reason: &'static str) -> SequenceError {
        SequenceError::Unsupported {
            sequence: self.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ESC[{}{}", self.params.join(";"), self.command)
    }
}

/// A unit of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A decoded character, including `\t`, `\n`, `\r` and `\b`
    Char(char),
    /// A CSI control sequence
    Csi(Sequence),
}

enum Escape {
    Csi { len: usize, sequence: Sequence },
    Ignored(usize),
    Incomplete,
    Unknown,
}

/// Iterator over the tokens of one output chunk.
pub struct Tokenizer<'a> {
    buf: &'a [u8],
    pos: usize,
    incomplete: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            incomplete: None,
        }
    }

    /// Unconsumed tail of an escape sequence cut off by the end of the chunk.
    ///
    /// Only set once iteration has stopped on it.
    pub fn incomplete(&self) -> Option<&'a [u8]> {
        self.incomplete.map(|start| &self.buf[start..])
    }

    /// Byte offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn decode_char(&mut self) -> Result<Token, SequenceError> {
        let rest = &self.buf[self.pos..];
        let width = utf8_width(rest[0]);
        let decoded = (width > 0 && rest.len() >= width)
            .then(|| std::str::from_utf8(&rest[..width]).ok())
            .flatten()
            .and_then(|s| s.chars().next());

        match decoded {
            Some(ch) => {
                self.pos += width;
                Ok(Token::Char(ch))
            }
            None => {
                let end = width.clamp(1, rest.len());
                self.pos += 1;
                Err(SequenceError::InvalidUtf8 {
                    bytes: rest[..end].to_vec(),
                })
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.incomplete.is_some() || self.pos >= self.buf.len() {
                return None;
            }

            let rest = &self.buf[self.pos..];
            if rest[0] != ESC {
                return Some(self.decode_char());
            }

            match scan_escape(rest) {
                Escape::Csi { len, sequence } => {
                    self.pos += len;
                    return Some(Ok(Token::Csi(sequence)));
                }
                Escape::Ignored(len) => {
                    self.pos += len;
                }
                Escape::Incomplete => {
                    self.incomplete = Some(self.pos);
                    return None;
                }
                Escape::Unknown => {
                    // ESC plus the whole character after it
                    let len = (1 + utf8_width(rest[1]).max(1)).min(rest.len());
                    let bytes = rest[..len].to_vec();
                    self.pos += len;
                    return Some(Err(SequenceError::UnknownEscape { bytes }));
                }
            }
        }
    }
}

/// Classify the escape at the start of `rest` (which begins with ESC).
fn scan_escape(rest: &[u8]) -> Escape {
    if rest.len() < 2 {
        return Escape::Incomplete;
    }

    if rest[1] == b'[' {
        return match rest[2..].iter().position(|&b| is_final(b)) {
            Some(i) => {
                let end = i + 2;
                Escape::Csi {
                    len: end + 1,
                    sequence: Sequence::parse(&rest[2..end], rest[end]),
                }
            }
            None => Escape::Incomplete,
        };
    }

    let tail = &rest[1..];
    if let Some(form) = IGNORED_ESCAPES.iter().find(|form| tail.starts_with(form)) {
        return Escape::Ignored(1 + form.len());
    }
    if IGNORED_ESCAPES.iter().any(|form| form.starts_with(tail)) {
        return Escape::Incomplete;
    }
    Escape::Unknown
}

fn is_final(b: u8) -> bool {
    b == b'@' || b.is_ascii_alphabetic()
}

fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}
