use crate::errors::Tl13Result;
use crate::types::Type;
use crate::visiters::ASTVisitor;
use std::any::Any;

/// Indentation step used by the diagnostic tree dump.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

pub trait Node {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()>;
    fn print(&self, depth: usize);
    fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dyn Node")
    }
}

/// Expression nodes render to a C fragment and carry the inferred TL13
/// type; type checking and emission happen in the same visit.
pub trait ExpressionNode: Node {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<(String, Type)>;
}
