use crate::ast::{indent, ExpressionNode, Node};
use crate::errors::Tl13Result;
use crate::types::Type;
use crate::visiters::ASTVisitor;

/// The closed TL13 operator set. Arithmetic operators take int operands
/// and produce int; relational operators take int operands and produce
/// bool. There is no "unknown operator" at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
}

impl BinaryOperator {
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Sub
                | BinaryOperator::Mul
                | BinaryOperator::Div
                | BinaryOperator::Mod
        )
    }

    pub fn is_relational(&self) -> bool {
        !self.is_arithmetic()
    }

    /// The operator as written in TL13 source, for diagnostics and the
    /// tree dump.
    pub fn tl13_symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "div",
            BinaryOperator::Mod => "mod",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThanEqual => ">=",
        }
    }

    /// The equivalent C operator emitted into the generated program.
    pub fn c_symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThanEqual => ">=",
        }
    }
}

pub struct BinOp {
    pub left: Option<Box<dyn ExpressionNode>>,
    pub operator: BinaryOperator,
    pub right: Option<Box<dyn ExpressionNode>>,
}

impl BinOp {
    pub fn new(
        left: Option<Box<dyn ExpressionNode>>,
        right: Option<Box<dyn ExpressionNode>>,
        operator: BinaryOperator,
    ) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }
}

impl Node for BinOp {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_binary_operation(self).map(|_| ())
    }

    fn print(&self, depth: usize) {
        println!("{}BinaryOp ({})", indent(depth), self.operator.tl13_symbol());
        if let Some(left) = &self.left {
            left.print(depth + 1);
        }
        if let Some(right) = &self.right {
            right.print(depth + 1);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for BinOp {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)> {
        visitor.visit_binary_operation(self)
    }
}
