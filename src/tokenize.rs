use std::io::BufRead;

use bytes::BytesMut;
use log::debug;
use tokio_util::codec::Decoder;

use crate::compare::Word;
use crate::error::{AnalyzerError, Result};
use crate::util::utf8;

pub const MAX_WORD_LEN: usize = 1_000_000;

/// What to do with the empty fragment between two adjacent separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTokens {
    Skip,
    /// Keep it as an empty word. Trailing empty fragments are still dropped,
    /// but a document without any byte reads as one empty word.
    Keep,
}

impl Default for EmptyTokens {
    fn default() -> Self {
        EmptyTokens::Skip
    }
}

#[inline]
pub fn is_separator(b: u8) -> bool {
    b == b' ' || b == b'\n' || b == b'\r'
}

/// Splits a byte stream into words at single space, `\n` or `\r` bytes.
pub struct WordCodec {
    empty: EmptyTokens,
    // empty fragments seen since the last word; only emitted once another
    // word proves they are not trailing
    held_empty: usize,
    held_word: Option<String>,
    // nothing consumed from the input yet
    untouched: bool,
}

impl WordCodec {
    pub fn new(empty: EmptyTokens) -> Self {
        WordCodec {
            empty,
            held_empty: 0,
            held_word: None,
            untouched: true,
        }
    }

    fn release_held(&mut self) -> Option<Word> {
        let word = self.held_word.take()?;
        if self.held_empty > 0 {
            self.held_empty -= 1;
            self.held_word = Some(word);
            Some(Some(String::new()))
        } else {
            Some(Some(word))
        }
    }
}

impl Decoder for WordCodec {
    type Item = Word;
    type Error = AnalyzerError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Word>> {
        loop {
            if let Some(word) = self.release_held() {
                return Ok(Some(word));
            }

            let offset = match buf.iter().position(|b| is_separator(*b)) {
                Some(offset) => offset,
                None if buf.len() > MAX_WORD_LEN => {
                    return Err(AnalyzerError::WordTooLong {
                        len: buf.len(),
                        max: MAX_WORD_LEN,
                    })
                }
                None => return Ok(None),
            };

            self.untouched = false;
            let mut fragment = buf.split_to(offset + 1);
            fragment.truncate(offset);
            if fragment.is_empty() {
                if self.empty == EmptyTokens::Keep {
                    self.held_empty += 1;
                }
                continue;
            }
            if fragment.len() > MAX_WORD_LEN {
                return Err(AnalyzerError::WordTooLong {
                    len: fragment.len(),
                    max: MAX_WORD_LEN,
                });
            }
            self.held_word = Some(utf8(&fragment)?.to_owned());
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Word>> {
        if let Some(word) = self.decode(buf)? {
            return Ok(Some(word));
        }
        if buf.is_empty() {
            // No word after them: the held empty fragments are trailing.
            self.held_empty = 0;
            if self.untouched && self.empty == EmptyTokens::Keep {
                self.untouched = false;
                return Ok(Some(Some(String::new())));
            }
            return Ok(None);
        }
        // No terminating separator - the rest is the last word
        self.untouched = false;
        let rest = buf.split();
        self.held_word = Some(utf8(&rest)?.to_owned());
        self.decode(buf)
    }
}

/// Reads a whole document and tokenizes it.
pub fn read_words<R: BufRead>(mut reader: R, empty: EmptyTokens) -> Result<Vec<Word>> {
    let mut codec = WordCodec::new(empty);
    let mut buffer = BytesMut::new();
    let mut words = Vec::new();
    loop {
        let raw_buffer = reader.fill_buf()?;
        let amount = raw_buffer.len();
        if amount == 0 {
            break;
        }
        buffer.extend_from_slice(raw_buffer);
        reader.consume(amount);
        while let Some(word) = codec.decode(&mut buffer)? {
            words.push(word);
        }
    }
    while let Some(word) = codec.decode_eof(&mut buffer)? {
        words.push(word);
    }
    debug!("tokenized {} words", words.len());
    Ok(words)
}
