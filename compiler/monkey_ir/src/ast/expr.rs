//! Expression nodes.

use std::fmt;
use std::mem;
use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

use super::{write_joined, Block, InfixOp, PrefixOp};

/// A bound name, as written in the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: Rc<str>,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier { name: Rc::from(name) }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `fn(<params>) { <body> }`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: Block,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_joined(f, &self.params, ", ")?;
        write!(f, ") {}", self.body)
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Identifier(Identifier),
    Integer(i64),
    Boolean(bool),
    /// String literal contents (no escape processing).
    String(Rc<str>),
    Array(Vec<Expr>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expr, Expr)>),
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// Shared so function values can reference the body without a copy.
    Function(Rc<FunctionLiteral>),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
}

/// Children are moved out and dropped on a grown stack, so freeing a deeply
/// nested tree does not recurse past the end of the host stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut exprs = Vec::new();
        let mut blocks = Vec::new();
        match self {
            Expr::Identifier(_)
            | Expr::Integer(_)
            | Expr::Boolean(_)
            | Expr::String(_)
            | Expr::Function(_) => return,
            Expr::Array(items) => exprs = mem::take(items),
            Expr::Hash(pairs) => {
                exprs.extend(mem::take(pairs).into_iter().flat_map(|(k, v)| [k, v]));
            }
            Expr::Prefix { operand, .. } => exprs.push(take_boxed(operand)),
            Expr::Infix { left, right, .. } => {
                exprs.push(take_boxed(left));
                exprs.push(take_boxed(right));
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                exprs.push(take_boxed(condition));
                blocks.push(mem::take(consequence));
                blocks.extend(alternative.take());
            }
            Expr::Call { callee, args } => {
                exprs.push(take_boxed(callee));
                exprs.append(args);
            }
            Expr::Index { collection, index } => {
                exprs.push(take_boxed(collection));
                exprs.push(take_boxed(index));
            }
        }
        ensure_sufficient_stack(move || drop((exprs, blocks)));
    }
}

/// Swap a leaf into `slot` and return the previous child.
fn take_boxed(slot: &mut Box<Expr>) -> Expr {
    mem::replace(&mut **slot, Expr::Integer(0))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_inner(f))
    }
}

impl Expr {
    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{ident}"),
            Expr::Integer(value) => write!(f, "{value}"),
            Expr::Boolean(value) => write!(f, "{value}"),
            Expr::String(value) => f.write_str(value),
            Expr::Array(items) => {
                f.write_str("[")?;
                write_joined(f, items, ", ")?;
                f.write_str("]")
            }
            Expr::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("}")
            }
            Expr::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Expr::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Expr::Function(literal) => write!(f, "{literal}"),
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_joined(f, args, ", ")?;
                f.write_str(")")
            }
            Expr::Index { collection, index } => write!(f, "({collection}[{index}])"),
        }
    }
}
