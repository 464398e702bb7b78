//! Defines the AST for SQL expressions.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// `*` or `alias.*`.
    Wildcard(Option<String>),

    /// A named placeholder, e.g. `:created_at_0`, resolved against the
    /// parameters bound on the query.
    Parameter(String),

    /// A binary operation, e.g., `column = 'value'` or `a OR b`.
    BinaryOp(Box<BinaryOp>),

    /// `expr IS NULL` / `expr IS NOT NULL`.
    IsNull { expr: Box<Expr>, negated: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'o' in 'o.created_at'
    pub name: String,              // e.g., the 'created_at' in 'o.created_at'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,   // =
    Lt,   // <
    LtEq, // <=
    Gt,   // >
    GtEq, // >=

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }

    pub const fn is_logical(&self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn and(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::And, other)
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::Or, other)
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    fn is_logical(&self) -> bool {
        matches!(self, Expr::BinaryOp(op) if op.op.is_logical())
    }
}

/// Query-language form of the expression: unquoted identifiers, named
/// placeholders. Nested AND/OR groups are parenthesised.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{ident}"),
            Expr::Wildcard(Some(qualifier)) => write!(f, "{qualifier}.*"),
            Expr::Wildcard(None) => f.write_str("*"),
            Expr::Parameter(name) => write!(f, ":{name}"),
            Expr::BinaryOp(op) => write!(f, "{op}"),
            Expr::IsNull { expr, negated } => {
                let not = if *negated { " NOT" } else { "" };
                write!(f, "{expr} IS{not} NULL")
            }
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = |expr: &Expr| {
            if self.op.is_logical() && expr.is_logical() {
                format!("({expr})")
            } else {
                expr.to_string()
            }
        };
        write!(
            f,
            "{} {} {}",
            operand(&self.left),
            self.op.as_str(),
            operand(&self.right)
        )
    }
}
