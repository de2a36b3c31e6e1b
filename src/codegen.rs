use crate::{
    ast::{ExpressionNode, Node},
    block::Block,
    config::c::{get_renamed_identifier, rename_identifier},
    config::emission::{INDENT, POSTAMBLE, PREAMBLE},
    decl::VarDecl,
    errors::{Tl13Error, Tl13Result},
    expression::BinOp,
    io::{ReadInt, WriteInt},
    program::Program,
    statement::{AssignStmt, IfStmt, WhileStatement},
    symboltable::{Symbol, SymbolTable},
    types::{Boolean, Ident, Number, Type},
    visiters::ASTVisitor,
};
use std::collections::HashMap;

/// Single-pass TL13-to-C translator. Walks the tree once; type inference,
/// symbol-table updates and emission are interleaved per node, so the
/// output stream reflects traversal order exactly (auto-declarations land
/// at the point of first reference, not hoisted).
pub struct CCodeGenerator {
    symbol_table: SymbolTable,
    output: String,
    diagnostics: Vec<String>,
    mapped_identifiers: HashMap<String, String>,
    indent: usize,
}

impl CCodeGenerator {
    pub fn new(table: SymbolTable) -> Self {
        Self {
            symbol_table: table,
            output: String::with_capacity(4096),
            diagnostics: Vec::new(),
            mapped_identifiers: HashMap::new(),
            indent: 0,
        }
    }

    pub fn generate_code(&mut self, ast: Option<Box<dyn Node>>) -> Tl13Result<()> {
        ast.ok_or_else(|| Tl13Error::codegen_error("No AST provided for code generation"))?
            .accept(self)
    }

    /// Everything emitted so far; valid (and useful) even after a fatal
    /// error, since emission is not transactional.
    pub fn get_output(&self) -> String {
        self.output.clone()
    }

    /// Warnings and reported non-fatal errors, in emission order.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    fn emit_expression(&mut self, expr: &dyn ExpressionNode) -> Tl13Result<(String, Type)> {
        ExpressionNode::accept(expr, self)
    }

    fn emit_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn warn(&mut self, message: String) {
        self.diagnostics.push(message);
    }

    // Implicit declaration of an undeclared name: defaults to int and
    // emits the compensating zero-init at the current output point.
    fn auto_declare(&mut self, name: &str) {
        let renamed = rename_identifier(name, &mut self.mapped_identifiers);
        self.emit_line(&format!("int {} = 0;", renamed));
        self.symbol_table.declare(name, Symbol::new(Type::Int));
    }

    fn lookup(&self, name: &str) -> Tl13Result<Symbol> {
        self.symbol_table
            .get(name)
            .cloned()
            .ok_or_else(|| Tl13Error::codegen_error(format!("no symbol entry for {}", name)))
    }
}

impl ASTVisitor for CCodeGenerator {
    fn visit_ident(&mut self, ident: &Ident) -> Tl13Result<(String, Type)> {
        if !self.symbol_table.contains(&ident.name) {
            self.warn(format!(
                "warning: using undeclared variable {}; defaulting to int.",
                ident.name
            ));
            self.auto_declare(&ident.name);
        }
        let symbol = self.lookup(&ident.name)?;
        if !symbol.initialized {
            self.warn(format!(
                "warning: variable {} used before initialization.",
                ident.name
            ));
        }
        let renamed = get_renamed_identifier(&ident.name, &self.mapped_identifiers);
        Ok((renamed, symbol.var_type))
    }

    fn visit_number(&mut self, number: &Number) -> Tl13Result<(String, Type)> {
        Ok((number.value.to_string(), Type::Int))
    }

    fn visit_boolean(&mut self, boolean: &Boolean) -> Tl13Result<(String, Type)> {
        let literal = if boolean.value { "true" } else { "false" };
        Ok((literal.to_string(), Type::Bool))
    }

    fn visit_read_int(&mut self, _read_int: &ReadInt) -> Tl13Result<(String, Type)> {
        // Renders only through an enclosing assignment; a bare read has
        // type int and no emission of its own.
        Ok((String::new(), Type::Int))
    }

    fn visit_binary_operation(&mut self, binop: &BinOp) -> Tl13Result<(String, Type)> {
        let left = binop
            .left
            .as_ref()
            .ok_or_else(|| Tl13Error::codegen_error("binary operation missing left operand"))?;
        let right = binop
            .right
            .as_ref()
            .ok_or_else(|| Tl13Error::codegen_error("binary operation missing right operand"))?;
        let (left_code, left_type) = self.emit_expression(left.as_ref())?;
        let (right_code, right_type) = self.emit_expression(right.as_ref())?;

        if left_type != Type::Int || right_type != Type::Int {
            let found = if left_type != Type::Int {
                left_type
            } else {
                right_type
            };
            let context = if binop.operator.is_arithmetic() {
                format!("operator {}", binop.operator.tl13_symbol())
            } else {
                format!("comparison {}", binop.operator.tl13_symbol())
            };
            return Err(Tl13Error::type_mismatch("int", found.to_string(), context));
        }

        let result_type = if binop.operator.is_arithmetic() {
            Type::Int
        } else {
            Type::Bool
        };
        let code = format!("{} {} {}", left_code, binop.operator.c_symbol(), right_code);
        Ok((code, result_type))
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) -> Tl13Result<()> {
        // Shape errors are reported and the statement is skipped; the
        // rest of the program still translates.
        if stmt.identifier.is_empty() {
            self.warn("error: assignment without a target variable; statement skipped.".to_string());
            return Ok(());
        }
        let expr = match &stmt.expr {
            Some(expr) => expr,
            None => {
                self.warn(format!(
                    "error: assignment to {} has no right-hand side; statement skipped.",
                    stmt.identifier
                ));
                return Ok(());
            }
        };

        if !self.symbol_table.contains(&stmt.identifier) {
            self.warn(format!(
                "warning: undeclared variable {}; defaulting to int.",
                stmt.identifier
            ));
            self.auto_declare(&stmt.identifier);
        }
        let target = self.lookup(&stmt.identifier)?;

        let (rhs_code, rhs_type) = self.emit_expression(expr.as_ref())?;
        if rhs_type != target.var_type {
            return Err(Tl13Error::type_mismatch(
                target.var_type.to_string(),
                rhs_type.to_string(),
                format!("assignment to {}", stmt.identifier),
            ));
        }
        self.symbol_table.mark_initialized(&stmt.identifier);

        let target_name = get_renamed_identifier(&stmt.identifier, &self.mapped_identifiers);
        if expr.as_ref().as_any().downcast_ref::<ReadInt>().is_some() {
            // The generated program, not the translator, checks the read
            // at its own runtime.
            self.emit_line(&format!(
                "if (scanf(\"%d\", &{}) != 1) {{ fprintf(stderr, \"type mismatch error: non-integer input for {}.\\n\"); exit(1); }}",
                target_name, stmt.identifier
            ));
        } else {
            self.emit_line(&format!("{} = {};", target_name, rhs_code));
        }
        Ok(())
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> Tl13Result<()> {
        let condition = stmt
            .condition
            .as_ref()
            .ok_or_else(|| Tl13Error::codegen_error("if statement missing condition"))?;
        let (cond_code, cond_type) = self.emit_expression(condition.as_ref())?;
        if cond_type != Type::Bool {
            return Err(Tl13Error::type_mismatch(
                "bool",
                cond_type.to_string(),
                "if condition",
            ));
        }
        self.emit_line(&format!("if ({}) {{", cond_code));
        self.indent += 1;
        if let Some(then_branch) = &stmt.then_branch {
            then_branch.accept(self)?;
        }
        self.indent -= 1;
        if let Some(else_branch) = &stmt.else_branch {
            self.emit_line("} else {");
            self.indent += 1;
            else_branch.accept(self)?;
            self.indent -= 1;
        }
        self.emit_line("}");
        Ok(())
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) -> Tl13Result<()> {
        let condition = stmt
            .condition
            .as_ref()
            .ok_or_else(|| Tl13Error::codegen_error("while statement missing condition"))?;
        let (cond_code, cond_type) = self.emit_expression(condition.as_ref())?;
        if cond_type != Type::Bool {
            return Err(Tl13Error::type_mismatch(
                "bool",
                cond_type.to_string(),
                "while condition",
            ));
        }
        // The body is emitted once; iteration belongs to the generated
        // program's own control flow.
        self.emit_line(&format!("while ({}) {{", cond_code));
        self.indent += 1;
        if let Some(body) = &stmt.body {
            body.accept(self)?;
        }
        self.indent -= 1;
        self.emit_line("}");
        Ok(())
    }

    fn visit_write_int(&mut self, stmt: &WriteInt) -> Tl13Result<()> {
        let expr = stmt
            .expr
            .as_ref()
            .ok_or_else(|| Tl13Error::codegen_error("writeInt missing expression"))?;
        let (code, expr_type) = self.emit_expression(expr.as_ref())?;
        if expr_type != Type::Int {
            return Err(Tl13Error::type_mismatch(
                "int",
                expr_type.to_string(),
                "writeInt",
            ));
        }
        self.emit_line(&format!("printf(\"%d\\n\", {});", code));
        Ok(())
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> Tl13Result<()> {
        // Every declared variable lowers to a zero-initialized C int;
        // bool is tracked in the symbol table only. A redeclared name
        // keeps its first entry.
        let renamed = rename_identifier(&decl.name, &mut self.mapped_identifiers);
        self.emit_line(&format!("int {} = 0;", renamed));
        self.symbol_table
            .declare(&decl.name, Symbol::new(decl.var_type));
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Tl13Result<()> {
        for statement in &block.statements {
            statement.accept(self)?;
        }
        Ok(())
    }

    fn visit_program(&mut self, program: &Program) -> Tl13Result<()> {
        self.output.push_str(PREAMBLE);
        self.indent += 1;
        for declaration in &program.declarations {
            self.visit_var_decl(declaration)?;
        }
        for statement in &program.statements {
            statement.accept(self)?;
        }
        self.emit_line("return 0;");
        self.indent -= 1;
        self.output.push_str(POSTAMBLE);
        Ok(())
    }
}
