/*
*                    tl13c -- TL13 compiler.
*
* program     = { declaration } { statement } ;
* declaration = ident ":" ( "int" | "bool" ) ";" ;
* statement   = ident ":=" expression ";"
*             | "if" expression "then" block [ "else" block ]
*             | "while" expression "do" block
*             | "writeInt" "(" expression ")" ";"
*             | block ;
* block       = "begin" { statement } "end" ;
* expression  = sum [ ( "=" | "!=" | "<" | ">" | "<=" | ">=" ) sum ] ;
* sum         = term { ( "+" | "-" ) term } ;
* term        = factor { ( "*" | "div" | "mod" ) factor } ;
* factor      = number | "true" | "false" | ident | "readInt" "(" ")" ;
*/

use crate::ast::{ExpressionNode, Node};
use crate::block::Block;
use crate::decl::VarDecl;
use crate::errors::{Tl13Error, Tl13Result};
use crate::expression::{BinOp, BinaryOperator};
use crate::io::{ReadInt, WriteInt};
use crate::program::Program;
use crate::statement::{AssignStmt, IfStmt, WhileStatement};
use crate::token::Token;
use crate::types::{Boolean, Ident, Number, Type};
use std::slice::Iter;

pub struct Parser<'a> {
    current_token: Token,
    line_number: usize,
    iter: Iter<'a, (Token, usize)>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        let mut parser = Self {
            current_token: Token::Null,
            line_number: 1,
            iter: tokens.iter(),
        };
        parser.next();
        parser
    }

    fn next(&mut self) {
        match self.iter.next() {
            Some((element, line)) => {
                self.current_token = element.clone();
                self.line_number = *line;
            }
            None => {
                self.current_token = Token::Null;
            }
        }
    }

    // One token of lookahead past the current one; needed to tell a
    // declaration (ident ':') from an assignment (ident ':=').
    fn peek(&self) -> Token {
        self.iter
            .clone()
            .next()
            .map(|(token, _)| token.clone())
            .unwrap_or(Token::Null)
    }

    fn expect(&mut self, expected: Token) -> Tl13Result<()> {
        if expected != self.current_token {
            return Err(Tl13Error::SyntaxError {
                expected: expected.to_string(),
                found: self.current_token.to_string(),
                line: self.line_number,
            });
        }
        self.next();
        Ok(())
    }

    fn expect_ident(&mut self) -> Tl13Result<String> {
        match self.current_token.clone() {
            Token::Ident(name) => {
                self.next();
                Ok(name)
            }
            other => Err(Tl13Error::syntax_error(
                "identifier",
                other.to_string(),
                self.line_number,
            )),
        }
    }

    /// Parse a whole program: the declaration section followed by the
    /// statement section.
    pub fn parse(&mut self) -> Tl13Result<Option<Box<dyn Node>>> {
        let declarations = self.parse_declarations()?;
        let mut statements: Vec<Box<dyn Node>> = Vec::new();
        while self.current_token != Token::Null {
            statements.push(self.parse_statement()?);
        }
        Ok(Some(Box::new(Program::new(declarations, statements))))
    }

    fn parse_declarations(&mut self) -> Tl13Result<Vec<VarDecl>> {
        let mut declarations = Vec::new();
        while matches!(self.current_token, Token::Ident(_)) && self.peek() == Token::Colon {
            let name = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let var_type = match self.current_token {
                Token::Int => Type::Int,
                Token::Bool => Type::Bool,
                _ => {
                    return Err(Tl13Error::syntax_error(
                        "int or bool",
                        self.current_token.to_string(),
                        self.line_number,
                    ))
                }
            };
            self.next();
            self.expect(Token::Semicolon)?;
            declarations.push(VarDecl::new(name, var_type));
        }
        Ok(declarations)
    }

    fn parse_statement(&mut self) -> Tl13Result<Box<dyn Node>> {
        match self.current_token.clone() {
            Token::Ident(_) => {
                let name = self.expect_ident()?;
                self.expect(Token::Assign)?;
                let expr = self.parse_expression()?;
                self.expect(Token::Semicolon)?;
                Ok(Box::new(AssignStmt::new(name, Some(expr))))
            }
            Token::If => {
                self.expect(Token::If)?;
                let condition = self.parse_expression()?;
                self.expect(Token::Then)?;
                let then_branch = self.parse_block()?;
                let else_branch = if self.current_token == Token::Else {
                    self.expect(Token::Else)?;
                    Some(self.parse_block()?)
                } else {
                    None
                };
                Ok(Box::new(IfStmt::new(
                    Some(condition),
                    Some(then_branch),
                    else_branch,
                )))
            }
            Token::While => {
                self.expect(Token::While)?;
                let condition = self.parse_expression()?;
                self.expect(Token::Do)?;
                let body = self.parse_block()?;
                Ok(Box::new(WhileStatement::new(Some(condition), Some(body))))
            }
            Token::WriteInt => {
                self.expect(Token::WriteInt)?;
                self.expect(Token::LParen)?;
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                self.expect(Token::Semicolon)?;
                Ok(Box::new(WriteInt::new(Some(expr))))
            }
            Token::Begin => self.parse_block(),
            other => Err(Tl13Error::UnexpectedToken {
                token: other.to_string(),
                line: self.line_number,
            }),
        }
    }

    fn parse_block(&mut self) -> Tl13Result<Box<dyn Node>> {
        self.expect(Token::Begin)?;
        let mut statements: Vec<Box<dyn Node>> = Vec::new();
        while self.current_token != Token::End && self.current_token != Token::Null {
            statements.push(self.parse_statement()?);
        }
        self.expect(Token::End)?;
        Ok(Box::new(Block::new(statements)))
    }

    fn parse_expression(&mut self) -> Tl13Result<Box<dyn ExpressionNode>> {
        let left = self.parse_sum()?;
        let operator = match self.current_token {
            Token::Equal => Some(BinaryOperator::Equal),
            Token::NotEqual => Some(BinaryOperator::NotEqual),
            Token::LessThan => Some(BinaryOperator::LessThan),
            Token::GreaterThan => Some(BinaryOperator::GreaterThan),
            Token::LessThanEqual => Some(BinaryOperator::LessThanEqual),
            Token::GreaterThanEqual => Some(BinaryOperator::GreaterThanEqual),
            _ => None,
        };
        match operator {
            Some(operator) => {
                self.next();
                let right = self.parse_sum()?;
                Ok(Box::new(BinOp::new(Some(left), Some(right), operator)))
            }
            None => Ok(left),
        }
    }

    fn parse_sum(&mut self) -> Tl13Result<Box<dyn ExpressionNode>> {
        let mut left = self.parse_term()?;
        loop {
            let operator = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.next();
            let right = self.parse_term()?;
            left = Box::new(BinOp::new(Some(left), Some(right), operator));
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Tl13Result<Box<dyn ExpressionNode>> {
        let mut left = self.parse_factor()?;
        loop {
            let operator = match self.current_token {
                Token::Multiply => BinaryOperator::Mul,
                Token::Div => BinaryOperator::Div,
                Token::Mod => BinaryOperator::Mod,
                _ => break,
            };
            self.next();
            let right = self.parse_factor()?;
            left = Box::new(BinOp::new(Some(left), Some(right), operator));
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Tl13Result<Box<dyn ExpressionNode>> {
        match self.current_token.clone() {
            Token::Number(value) => {
                self.next();
                Ok(Box::new(Number::new(value)))
            }
            Token::True => {
                self.next();
                Ok(Box::new(Boolean::new(true)))
            }
            Token::False => {
                self.next();
                Ok(Box::new(Boolean::new(false)))
            }
            Token::Ident(name) => {
                self.next();
                Ok(Box::new(Ident::new(name)))
            }
            Token::ReadInt => {
                self.next();
                self.expect(Token::LParen)?;
                self.expect(Token::RParen)?;
                Ok(Box::new(ReadInt::new()))
            }
            other => Err(Tl13Error::syntax_error(
                "expression",
                other.to_string(),
                self.line_number,
            )),
        }
    }
}
