use crate::Span;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based scanner over an in-memory source string.
///
/// `position` always indexes the byte held in `current`, `read_position` is
/// `position + 1`, and `current` degrades to a `0` sentinel once the input
/// is exhausted. Calling [`Lexer::next_token`] past end-of-input keeps
/// returning EOF tokens.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    current: u8,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            input: source.into_bytes(),
            position: 0,
            read_position: 0,
            current: 0,
        };
        lexer.read_char();

        lexer
    }

    /// Classifies and returns the next token, advancing the scan cursor.
    ///
    /// There is no way to unget a token; callers needing lookahead must
    /// buffer externally.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position as u32;

        let token = match self.current {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Equals, String::from("=="), Span::new(start, start + 2))
                } else {
                    self.char_token(TokenKind::Assignment)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(
                        TokenKind::NotEquals,
                        String::from("!="),
                        Span::new(start, start + 2),
                    )
                } else {
                    self.char_token(TokenKind::Not)
                }
            }
            b'+' => self.char_token(TokenKind::Plus),
            b'-' => self.char_token(TokenKind::Dash),
            b'/' => self.char_token(TokenKind::Slash),
            b'*' => self.char_token(TokenKind::Star),
            b',' => self.char_token(TokenKind::Comma),
            b';' => self.char_token(TokenKind::Semicolon),
            b'(' => self.char_token(TokenKind::OpenParen),
            b')' => self.char_token(TokenKind::CloseParen),
            b'{' => self.char_token(TokenKind::OpenCurly),
            b'}' => self.char_token(TokenKind::CloseCurly),
            b'<' => self.char_token(TokenKind::Less),
            b'>' => self.char_token(TokenKind::Greater),
            0 => Token::new(TokenKind::EOF, String::new(), Span::new(start, start)),
            _ => {
                // Identifier and number scans return directly: the cursor
                // already sits on the first byte past the literal.
                if is_letter(self.current) {
                    let value = self.read_identifier();
                    let kind = RESERVED_LOOKUP
                        .get(value.as_str())
                        .copied()
                        .unwrap_or(TokenKind::Identifier);

                    return Token::new(kind, value, Span::new(start, self.position as u32));
                } else if is_digit(self.current) {
                    let value = self.read_number();

                    return Token::new(
                        TokenKind::Integer,
                        value,
                        Span::new(start, self.position as u32),
                    );
                } else {
                    self.char_token(TokenKind::Illegal)
                }
            }
        };

        self.read_char();
        token
    }

    fn char_token(&self, kind: TokenKind) -> Token {
        let start = self.position as u32;
        Token::new(kind, (self.current as char).to_string(), Span::new(start, start + 1))
    }

    fn read_char(&mut self) {
        self.current = self.peek_char();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            return 0;
        }

        self.input[self.read_position]
    }

    fn read_identifier(&mut self) -> String {
        let left = self.position;

        while is_letter(self.current) {
            self.read_char();
        }

        String::from_utf8_lossy(&self.input[left..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let left = self.position;

        while is_digit(self.current) {
            self.read_char();
        }

        String::from_utf8_lossy(&self.input[left..self.position]).into_owned()
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.current) {
            self.read_char();
        }
    }
}

fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || byte == b'\n' || byte == b'\r'
}
