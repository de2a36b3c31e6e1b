use crate::ast::{indent, ExpressionNode, Node};
use crate::errors::Tl13Result;
use crate::types::Type;
use crate::visiters::ASTVisitor;

pub struct WriteInt {
    pub expr: Option<Box<dyn ExpressionNode>>,
}

impl WriteInt {
    pub fn new(expr: Option<Box<dyn ExpressionNode>>) -> Self {
        Self { expr }
    }
}

impl Node for WriteInt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_write_int(self)
    }

    fn print(&self, depth: usize) {
        println!("{}WriteInt", indent(depth));
        if let Some(expr) = &self.expr {
            expr.print(depth + 1);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// readInt() is an expression of type int. It only produces output when it
/// is the direct right-hand side of an assignment, where the generator
/// emits the guarded scanf statement.
pub struct ReadInt;

impl ReadInt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadInt {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for ReadInt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_read_int(self).map(|_| ())
    }

    fn print(&self, depth: usize) {
        println!("{}ReadInt", indent(depth));
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for ReadInt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)> {
        visitor.visit_read_int(self)
    }
}
