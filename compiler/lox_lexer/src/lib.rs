//! Lexer for Lox using logos.
//!
//! Turns source text into the token sequence the parser consumes. Scanning
//! never stops on an error: bad characters are reported and skipped, and
//! the output always ends with exactly one `Eof` token.

mod keywords;
mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{Literal, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};

use raw_token::RawToken;

/// Tokens and errors produced by one scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens.
///
/// A token's line is the line its first character sits on. Errors are
/// collected in source order.
pub fn lex(source: &str) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);
    let mut line: u32 = 1;

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => line += 1,
            Ok(RawToken::UnterminatedString) => {
                line += count_newlines(slice);
                output
                    .errors
                    .push(LexError::new(line, LexErrorKind::UnterminatedString));
            }
            Ok(RawToken::String) => {
                let start_line = line;
                line += count_newlines(slice);
                let contents = &slice[1..slice.len() - 1];
                output.tokens.push(Token::new(
                    TokenKind::String,
                    slice,
                    Some(Literal::Str(contents.to_string())),
                    start_line,
                ));
            }
            Ok(RawToken::Number(value)) => {
                output.tokens.push(Token::new(
                    TokenKind::Number,
                    slice,
                    Some(Literal::Number(value)),
                    line,
                ));
            }
            Ok(RawToken::Identifier) => {
                let kind = keywords::lookup(slice).unwrap_or(TokenKind::Identifier);
                output.tokens.push(Token::new(kind, slice, None, line));
            }
            Ok(raw) => {
                if let Some(kind) = convert_punct(raw) {
                    output.tokens.push(Token::new(kind, slice, None, line));
                }
            }
            Err(()) => {
                // One error per offending character.
                for ch in slice.chars() {
                    if ch == '\n' {
                        line += 1;
                        continue;
                    }
                    output
                        .errors
                        .push(LexError::new(line, LexErrorKind::UnexpectedCharacter(ch)));
                }
            }
        }
    }

    output.tokens.push(Token::eof(line));
    output
}

fn count_newlines(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Map fixed-lexeme raw tokens to their kind.
fn convert_punct(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::LineComment
        | RawToken::Newline
        | RawToken::Number(_)
        | RawToken::String
        | RawToken::UnterminatedString
        | RawToken::Identifier => return None,
    };
    Some(kind)
}
