use crate::errors::{Tl13Error, Tl13Result};
use crate::token::Token;
use crate::LineNumber;
use lazy_static::lazy_static;
use regex::Regex;
use std::{iter::Peekable, str::Chars};

lazy_static! {
    // TL13 numeric literals: zero, or a nonzero digit followed by digits.
    static ref NUMBER_RE: Regex = Regex::new(r"^(0|[1-9][0-9]*)$").unwrap();
}

pub fn scan(state: &mut LineNumber, file_content: &str) -> Tl13Result<Vec<(Token, usize)>> {
    let mut chars = file_content.chars().peekable();
    let mut lexeme: Vec<(Token, usize)> = vec![];

    'lexer: loop {
        let c = match chars.peek() {
            Some(c) => *c,
            None => break 'lexer,
        };
        if c == '{' {
            comment(&mut chars, state)?;
        } else if c.is_whitespace() {
            whitespace(&mut chars, state);
        } else if c.is_alphabetic() || c == '_' {
            let token = identifier(&mut chars);
            lexeme.push((token, state.line));
        } else if c.is_ascii_digit() {
            let token = number(&mut chars, state)?;
            lexeme.push((token, state.line));
        } else {
            let line = state.line;
            chars.next();
            let token = match c {
                ';' => Token::Semicolon,
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Multiply,
                '=' => Token::Equal,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ':' => {
                    if chars.peek() == Some(&'=') {
                        chars.next(); // consume the '=' character
                        Token::Assign
                    } else {
                        Token::Colon
                    }
                }
                '!' => {
                    if chars.peek() == Some(&'=') {
                        chars.next(); // consume the '=' character
                        Token::NotEqual
                    } else {
                        return Err(Tl13Error::UnknownToken { token: '!', line });
                    }
                }
                '<' => {
                    if chars.peek() == Some(&'=') {
                        chars.next(); // consume the '=' character
                        Token::LessThanEqual
                    } else {
                        Token::LessThan
                    }
                }
                '>' => {
                    if chars.peek() == Some(&'=') {
                        chars.next(); // consume the '=' character
                        Token::GreaterThanEqual
                    } else {
                        Token::GreaterThan
                    }
                }
                _ => {
                    return Err(Tl13Error::UnknownToken { token: c, line });
                }
            };
            lexeme.push((token, line));
        }
    }
    Ok(lexeme)
}

fn comment(chars: &mut Peekable<Chars<'_>>, state: &mut LineNumber) -> Tl13Result<()> {
    let start_line = state.line;
    chars.next(); // consume the opening curly brace
    for c in chars.by_ref() {
        if c == '\n' {
            state.line += 1;
        }
        if c == '}' {
            return Ok(());
        }
    }
    Err(Tl13Error::UnterminatedComment { line: start_line })
}

fn whitespace(chars: &mut Peekable<Chars<'_>>, state: &mut LineNumber) {
    while let Some(c) = chars.peek() {
        if !c.is_whitespace() {
            break;
        }
        if *c == '\n' {
            state.line += 1;
        }
        chars.next();
    }
}

fn identifier(chars: &mut Peekable<Chars<'_>>) -> Token {
    let mut idt = String::new();
    while let Some(c) = chars.peek() {
        if c.is_alphanumeric() || *c == '_' {
            idt.push(*c);
            chars.next();
        } else {
            break;
        }
    }

    match idt.as_str() {
        "if" => Token::If,
        "then" => Token::Then,
        "else" => Token::Else,
        "while" => Token::While,
        "do" => Token::Do,
        "begin" => Token::Begin,
        "end" => Token::End,
        "int" => Token::Int,
        "bool" => Token::Bool,
        "true" => Token::True,
        "false" => Token::False,
        "div" => Token::Div,
        "mod" => Token::Mod,
        "writeint" | "writeInt" => Token::WriteInt,
        "readint" | "readInt" => Token::ReadInt,
        _ => Token::Ident(idt),
    }
}

fn number(chars: &mut Peekable<Chars<'_>>, state: &mut LineNumber) -> Tl13Result<Token> {
    let mut num = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            num.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    if !NUMBER_RE.is_match(&num) {
        return Err(Tl13Error::InvalidNumber {
            number: num,
            line: state.line,
        });
    }
    match num.parse::<i64>() {
        Ok(val) => Ok(Token::Number(val)),
        Err(_) => Err(Tl13Error::InvalidNumber {
            number: num,
            line: state.line,
        }),
    }
}
