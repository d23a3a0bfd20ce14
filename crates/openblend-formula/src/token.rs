//! Lexer for the formula grammar.
//!
//! Scans expression text into a flat token stream. Byte offsets are kept
//! per token so parse errors can point back into the source text.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::FormulaErrorKind;

/// One lexical token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    EqEq,
    NotEq,
    LParen,
    RParen,
    Comma,
}

impl Token {
    /// Human-readable description used in parse errors.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Number(value) => format!("number `{value}`"),
            Token::Ident(name) => format!("identifier `{name}`"),
            Token::Plus => "`+`".to_string(),
            Token::Minus => "`-`".to_string(),
            Token::Star => "`*`".to_string(),
            Token::StarStar => "`**`".to_string(),
            Token::Slash => "`/`".to_string(),
            Token::SlashSlash => "`//`".to_string(),
            Token::Percent => "`%`".to_string(),
            Token::Less => "`<`".to_string(),
            Token::LessEq => "`<=`".to_string(),
            Token::Greater => "`>`".to_string(),
            Token::GreaterEq => "`>=`".to_string(),
            Token::EqEq => "`==`".to_string(),
            Token::NotEq => "`!=`".to_string(),
            Token::LParen => "`(`".to_string(),
            Token::RParen => "`)`".to_string(),
            Token::Comma => "`,`".to_string(),
        }
    }
}

/// A token plus its byte offset in the source expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Scan `text` into tokens.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned>, FormulaErrorKind> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            tokens.push(lex_number(&mut chars, offset)?);
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let mut name = String::new();
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    name.push(ch);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Spanned {
                token: Token::Ident(name),
                offset,
            });
            continue;
        }

        chars.next();
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => follow(&mut chars, '*', Token::StarStar, Token::Star),
            '/' => follow(&mut chars, '/', Token::SlashSlash, Token::Slash),
            '%' => Token::Percent,
            '<' => follow(&mut chars, '=', Token::LessEq, Token::Less),
            '>' => follow(&mut chars, '=', Token::GreaterEq, Token::Greater),
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '=' => match chars.peek() {
                Some(&(_, '=')) => {
                    chars.next();
                    Token::EqEq
                }
                _ => return Err(FormulaErrorKind::UnexpectedCharacter { found: c, offset }),
            },
            '!' => match chars.peek() {
                Some(&(_, '=')) => {
                    chars.next();
                    Token::NotEq
                }
                _ => return Err(FormulaErrorKind::UnexpectedCharacter { found: c, offset }),
            },
            other => {
                return Err(FormulaErrorKind::UnexpectedCharacter {
                    found: other,
                    offset,
                });
            }
        };
        tokens.push(Spanned { token, offset });
    }

    Ok(tokens)
}

/// Consume `next` if it follows, picking the two-character token.
fn follow(
    chars: &mut Peekable<CharIndices<'_>>,
    next: char,
    matched: Token,
    single: Token,
) -> Token {
    if let Some(&(_, ch)) = chars.peek() {
        if ch == next {
            chars.next();
            return matched;
        }
    }
    single
}

/// Scan a numeric literal: digits, optional fraction, optional exponent.
fn lex_number(
    chars: &mut Peekable<CharIndices<'_>>,
    offset: usize,
) -> Result<Spanned, FormulaErrorKind> {
    let mut literal = String::new();
    let mut saw_digit = false;
    let mut saw_dot = false;

    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() {
            saw_digit = true;
            literal.push(c);
            chars.next();
        } else if c == '.' && !saw_dot {
            saw_dot = true;
            literal.push(c);
            chars.next();
        } else {
            break;
        }
    }

    if !saw_digit {
        return Err(FormulaErrorKind::MalformedNumber { literal, offset });
    }

    if let Some(&(_, c)) = chars.peek() {
        if c == 'e' || c == 'E' {
            literal.push(c);
            chars.next();
            if let Some(&(_, sign)) = chars.peek() {
                if sign == '+' || sign == '-' {
                    literal.push(sign);
                    chars.next();
                }
            }
            let mut exponent_digits = false;
            while let Some(&(_, d)) = chars.peek() {
                if d.is_ascii_digit() {
                    exponent_digits = true;
                    literal.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if !exponent_digits {
                return Err(FormulaErrorKind::MalformedNumber { literal, offset });
            }
        }
    }

    match literal.parse::<f64>() {
        Ok(value) => Ok(Spanned {
            token: Token::Number(value),
            offset,
        }),
        Err(_) => Err(FormulaErrorKind::MalformedNumber { literal, offset }),
    }
}
