//! Turns Hack assembly source text into a flat token stream.

use super::error::AssembleError;
use super::token::{Jump, Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '.' | '$' | ':')
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, AssembleError> {
        let mut tokens = Vec::new();
        loop {
            match self.chars.peek().copied() {
                None => {
                    tokens.push(Token {
                        kind: TokenKind::Eof,
                        line: self.line,
                    });
                    return Ok(tokens);
                }
                Some(' ') | Some('\t') | Some('\r') => {
                    self.chars.next();
                }
                Some('\n') => {
                    self.chars.next();
                    tokens.push(Token {
                        kind: TokenKind::Linefeed,
                        line: self.line,
                    });
                    self.line += 1;
                }
                Some('/') => {
                    self.chars.next();
                    if self.chars.peek() == Some(&'/') {
                        while let Some(&c) = self.chars.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.chars.next();
                        }
                    } else {
                        return Err(AssembleError::Lexical { line: self.line, ch: '/' });
                    }
                }
                Some(c) if c.is_ascii_digit() => {
                    // A run of digits is always a valid integer token: the
                    // comp/dest fields it feeds never exceed one digit, and
                    // load-operand masking (`& 0x7FFF`) happens at emission,
                    // not here, so an arbitrarily long run never fails to
                    // lex — it wraps rather than rejects.
                    let mut value: u32 = 0;
                    while let Some(&d) = self.chars.peek() {
                        if let Some(digit) = d.to_digit(10) {
                            value = value.wrapping_mul(10).wrapping_add(digit);
                            self.chars.next();
                        } else {
                            break;
                        }
                    }
                    tokens.push(Token {
                        kind: TokenKind::Integer(value),
                        line: self.line,
                    });
                }
                Some(c) if is_identifier_start(c) => {
                    let mut text = String::new();
                    while let Some(&d) = self.chars.peek() {
                        if is_identifier_continue(d) {
                            text.push(d);
                            self.chars.next();
                        } else {
                            break;
                        }
                    }
                    let kind = match Jump::from_mnemonic(&text) {
                        Some(jump) => TokenKind::Jump(jump),
                        None => TokenKind::Identifier(text),
                    };
                    tokens.push(Token { kind, line: self.line });
                }
                Some(c) => {
                    let kind = match c {
                        '@' => TokenKind::At,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        '=' => TokenKind::Equals,
                        ';' => TokenKind::Semicolon,
                        '+' => TokenKind::Plus,
                        '-' => TokenKind::Minus,
                        '&' => TokenKind::And,
                        '|' => TokenKind::Or,
                        other => return Err(AssembleError::Lexical { line: self.line, ch: other }),
                    };
                    self.chars.next();
                    tokens.push(Token { kind, line: self.line });
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_a_load_instruction() {
        assert_eq!(
            kinds("@20\n"),
            vec![TokenKind::At, TokenKind::Integer(20), TokenKind::Linefeed, TokenKind::Eof]
        );
    }

    #[test]
    fn tokenizes_a_label() {
        assert_eq!(
            kinds("(LOOP)\n"),
            vec![
                TokenKind::LParen,
                TokenKind::Identifier("LOOP".into()),
                TokenKind::RParen,
                TokenKind::Linefeed,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn jump_mnemonics_are_not_identifiers() {
        assert_eq!(
            kinds("D;JLT\n"),
            vec![
                TokenKind::Identifier("D".into()),
                TokenKind::Semicolon,
                TokenKind::Jump(Jump::Jlt),
                TokenKind::Linefeed,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert_eq!(
            kinds("@1 // comment\n"),
            vec![TokenKind::At, TokenKind::Integer(1), TokenKind::Linefeed, TokenKind::Eof]
        );
    }

    #[test]
    fn integer_literal_past_u16_range_lexes_without_error() {
        assert_eq!(
            kinds("@4000000000\n"),
            vec![TokenKind::At, TokenKind::Integer(4_000_000_000), TokenKind::Linefeed, TokenKind::Eof]
        );
    }

    #[test]
    fn rejects_unexpected_characters() {
        let err = Lexer::new("@1\n#bad\n").tokenize().unwrap_err();
        assert_eq!(err, AssembleError::Lexical { line: 2, ch: '#' });
    }
}
