use crate::ast::{indent, Node};
use crate::errors::Tl13Result;
use crate::types::Type;
use crate::visiters::ASTVisitor;

/// One declared variable. The emitted C declaration is always a
/// zero-initialized int; the symbol table keeps the TL13 type.
pub struct VarDecl {
    pub name: String,
    pub var_type: Type,
}

impl VarDecl {
    pub fn new(name: String, var_type: Type) -> Self {
        Self { name, var_type }
    }
}

impl Node for VarDecl {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_var_decl(self)
    }

    fn print(&self, depth: usize) {
        println!("{}Declaration ({} : {})", indent(depth), self.name, self.var_type);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
