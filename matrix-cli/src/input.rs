use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Result of reading one typed value from the console.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    /// The token could not be parsed; the rest of its line has been discarded.
    Invalid(String),
    /// Input is exhausted.
    Eof,
}

/// Whitespace-separated tokens over a line-oriented reader.
///
/// Tokens may span lines the way `scanf` reads them, and a whole line can be
/// thrown away after bad input.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn next_value<T: FromStr>(&mut self) -> io::Result<Parsed<T>> {
        let Some(token) = self.next_token()? else {
            return Ok(Parsed::Eof);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Parsed::Value(value)),
            Err(_) => {
                self.discard_line();
                Ok(Parsed::Invalid(token))
            }
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Blocks until a fresh line is entered. Returns false at end of input.
    pub fn wait_for_line(&mut self) -> io::Result<bool> {
        self.discard_line();
        let mut line = String::new();
        Ok(self.reader.read_line(&mut line)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_span_lines() {
        let mut r = TokenReader::new("1 2\n\n  3\n".as_bytes());
        assert_eq!(r.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(r.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(r.next_token().unwrap(), None);
    }

    #[test]
    fn test_invalid_value_discards_rest_of_line() {
        let mut r = TokenReader::new("x 5 6\n7\n".as_bytes());
        assert_eq!(r.next_value::<i32>().unwrap(), Parsed::Invalid("x".to_string()));
        assert_eq!(r.next_value::<i32>().unwrap(), Parsed::Value(7));
        assert_eq!(r.next_value::<i32>().unwrap(), Parsed::Eof);
    }

    #[test]
    fn test_wait_for_line() {
        let mut r = TokenReader::new("14 leftover\n\n".as_bytes());
        assert_eq!(r.next_value::<u32>().unwrap(), Parsed::Value(14));
        assert!(r.wait_for_line().unwrap());
        assert!(!r.wait_for_line().unwrap());
    }
}
