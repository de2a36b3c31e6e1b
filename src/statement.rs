use crate::ast::{indent, ExpressionNode, Node};
use crate::errors::Tl13Result;
use crate::visiters::ASTVisitor;

pub struct AssignStmt {
    pub identifier: String,
    pub expr: Option<Box<dyn ExpressionNode>>,
}

impl AssignStmt {
    pub fn new(identifier: String, expr: Option<Box<dyn ExpressionNode>>) -> Self {
        Self { identifier, expr }
    }
}

impl Node for AssignStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_assign(self)
    }

    fn print(&self, depth: usize) {
        println!("{}Assignment ({})", indent(depth), self.identifier);
        if let Some(expr) = &self.expr {
            expr.print(depth + 1);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub struct IfStmt {
    pub condition: Option<Box<dyn ExpressionNode>>,
    pub then_branch: Option<Box<dyn Node>>,
    pub else_branch: Option<Box<dyn Node>>,
}

impl IfStmt {
    pub fn new(
        condition: Option<Box<dyn ExpressionNode>>,
        then_branch: Option<Box<dyn Node>>,
        else_branch: Option<Box<dyn Node>>,
    ) -> Self {
        Self {
            condition,
            then_branch,
            else_branch,
        }
    }
}

impl Node for IfStmt {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_if(self)
    }

    fn print(&self, depth: usize) {
        let label = if self.else_branch.is_some() { "IfElse" } else { "If" };
        println!("{}{}", indent(depth), label);
        if let Some(condition) = &self.condition {
            condition.print(depth + 1);
        }
        if let Some(then_branch) = &self.then_branch {
            then_branch.print(depth + 1);
        }
        if let Some(else_branch) = &self.else_branch {
            else_branch.print(depth + 1);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub struct WhileStatement {
    pub condition: Option<Box<dyn ExpressionNode>>,
    pub body: Option<Box<dyn Node>>,
}

impl WhileStatement {
    pub fn new(condition: Option<Box<dyn ExpressionNode>>, body: Option<Box<dyn Node>>) -> Self {
        Self { condition, body }
    }
}

impl Node for WhileStatement {
    fn accept(&self, visitor: &mut dyn ASTVisitor) -> Tl13Result<()> {
        visitor.visit_while_statement(self)
    }

    fn print(&self, depth: usize) {
        println!("{}While", indent(depth));
        if let Some(condition) = &self.condition {
            condition.print(depth + 1);
        }
        if let Some(body) = &self.body {
            body.print(depth + 1);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
