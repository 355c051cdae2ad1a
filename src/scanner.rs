//! Whitespace-delimited token reading for the interactive session.
//!
//! Input arrives as three tokens in fixed order (number, number, operator),
//! which may share a line or span several lines. The scanner therefore works
//! token by token over a buffered stream rather than line by line.

use std::io::BufRead;
use thiserror::Error;

/// Failures produced while scanning input tokens.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The stream ended before the requested token was read.
    #[error("unexpected end of input")]
    Exhausted,
    /// A token was read where a number was expected but did not parse.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// The underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Pulls whitespace-delimited tokens out of a buffered reader.
pub struct Scanner<'a> {
    input: &'a mut dyn BufRead,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a mut dyn BufRead) -> Self {
        Self { input }
    }

    /// Skips leading ASCII whitespace and returns the next maximal run of
    /// non-whitespace bytes. Returns [`ScanError::Exhausted`] at end of
    /// stream.
    pub fn next_token(&mut self) -> Result<String, ScanError> {
        let mut token = Vec::new();
        loop {
            let (used, done) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    // End of stream: a started token is complete, nothing is an error.
                    return if token.is_empty() {
                        Err(ScanError::Exhausted)
                    } else {
                        finish_token(token)
                    };
                }

                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    used += 1;
                    if byte.is_ascii_whitespace() {
                        if !token.is_empty() {
                            done = true;
                            break;
                        }
                    } else {
                        token.push(byte);
                    }
                }
                (used, done)
            };
            self.input.consume(used);
            if done {
                return finish_token(token);
            }
        }
    }

    /// Reads the next token and parses it as a binary64 real.
    pub fn next_number(&mut self) -> Result<f64, ScanError> {
        let token = self.next_token()?;
        token
            .parse::<f64>()
            .map_err(|_| ScanError::InvalidNumber(token))
    }
}

fn finish_token(bytes: Vec<u8>) -> Result<String, ScanError> {
    String::from_utf8(bytes).map_err(|e| {
        ScanError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
