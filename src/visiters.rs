use crate::block::Block;
use crate::decl::VarDecl;
use crate::expression::BinOp;
use crate::io::ReadInt;
use crate::io::WriteInt;
use crate::program::Program;
use crate::statement::AssignStmt;
use crate::statement::IfStmt;
use crate::statement::WhileStatement;
use crate::types::Boolean;
use crate::types::Ident;
use crate::types::Number;
use crate::types::Type;
use crate::errors::Tl13Result;

/// Expression visits return the rendered C fragment together with the
/// inferred TL13 type; statement visits write into the generator's output.
pub trait ASTVisitor {
    fn visit_ident(&mut self, ident: &Ident) -> Tl13Result<(String, Type)>;
    fn visit_number(&mut self, number: &Number) -> Tl13Result<(String, Type)>;
    fn visit_boolean(&mut self, boolean: &Boolean) -> Tl13Result<(String, Type)>;
    fn visit_read_int(&mut self, read_int: &ReadInt) -> Tl13Result<(String, Type)>;
    fn visit_binary_operation(&mut self, binary_operation: &BinOp) -> Tl13Result<(String, Type)>;
    fn visit_assign(&mut self, stmt: &AssignStmt) -> Tl13Result<()>;
    fn visit_if(&mut self, stmt: &IfStmt) -> Tl13Result<()>;
    fn visit_while_statement(&mut self, while_statement: &WhileStatement) -> Tl13Result<()>;
    fn visit_write_int(&mut self, stmt: &WriteInt) -> Tl13Result<()>;
    fn visit_var_decl(&mut self, decl: &VarDecl) -> Tl13Result<()>;
    fn visit_block(&mut self, block: &Block) -> Tl13Result<()>;
    fn visit_program(&mut self, program: &Program) -> Tl13Result<()>;
}
