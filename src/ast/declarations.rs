use crate::ast::expressions::Expr;
use crate::ast::types::Type;

/// Top-level aggregate for one source file: imports first, then the other
/// declarations, both in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub uses: Vec<UseDecl>,
    pub declarations: Vec<Declaration>,
}

/// A dotted import path, `use a::b::c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseDecl {
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(Function),
    TypeAlias(TypeAlias),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    /// Always `None` for now.
    /// TODO parse function bodies once statement parsing lands
    pub body: Option<FunctionBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody {
    pub statements: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub ty: Type,
}
