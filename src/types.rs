use crate::ast::{indent, ExpressionNode, Node};
use crate::errors::Tl13Result;
use crate::visiters::ASTVisitor;
use std::fmt;

/// The two TL13 variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
        }
    }
}

pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Node for Ident {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_ident(self).map(|_| ())
    }

    fn print(&self, depth: usize) {
        println!("{}Identifier ({})", indent(depth), self.name);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for Ident {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)> {
        visitor.visit_ident(self)
    }
}

pub struct Number {
    pub value: i64,
}

impl Number {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Node for Number {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_number(self).map(|_| ())
    }

    fn print(&self, depth: usize) {
        println!("{}Number ({})", indent(depth), self.value);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for Number {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)> {
        visitor.visit_number(self)
    }
}

pub struct Boolean {
    pub value: bool,
}

impl Boolean {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl Node for Boolean {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_boolean(self).map(|_| ())
    }

    fn print(&self, depth: usize) {
        println!("{}Boolean ({})", indent(depth), self.value);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for Boolean {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)> {
        visitor.visit_boolean(self)
    }
}
