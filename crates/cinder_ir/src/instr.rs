use crate::{BlockId, Operand, TempId};

/// A single IR instruction (at most one operation, result in a temp).
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
  /// Copy/move a value to a new temporary.
  /// `dest = source`
  Copy { dest: TempId, source: Operand },

  /// Binary operation: `dest = left op right`
  BinOp {
    dest: TempId,
    op: BinaryOp,
    left: Operand,
    right: Operand,
  },

  /// Unary operation: `dest = op operand`
  UnaryOp {
    dest: TempId,
    op: UnaryOp,
    operand: Operand,
  },

  /// Function call by symbol name: `dest = callee(args...)`
  Call {
    dest: Option<TempId>,
    callee: String,
    args: Vec<Operand>,
  },

  /// Value-merge node at a control-flow join: evaluates to the operand
  /// paired with whichever predecessor control arrived from. Must sit at
  /// the start of its block, and once the owning function is complete its
  /// pair count must equal the block's in-degree.
  Phi {
    dest: TempId,
    incoming: Vec<(BlockId, Operand)>,
  },

  /// No-operation (placeholder).
  Nop,
}

impl Instr {
  /// Temporary written by this instruction, if any.
  pub fn dest(&self) -> Option<TempId> {
    match self {
      Instr::Copy { dest, .. }
      | Instr::BinOp { dest, .. }
      | Instr::UnaryOp { dest, .. }
      | Instr::Phi { dest, .. } => Some(*dest),
      Instr::Call { dest, .. } => *dest,
      Instr::Nop => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Eq,
  Ne,
  Lt,
  Le,
  Gt,
  Ge,
}

impl BinaryOp {
  pub fn symbol(&self) -> &'static str {
    match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
      BinaryOp::Eq => "==",
      BinaryOp::Ne => "!=",
      BinaryOp::Lt => "<",
      BinaryOp::Le => "<=",
      BinaryOp::Gt => ">",
      BinaryOp::Ge => ">=",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
  Neg,
  Not,
}

impl UnaryOp {
  pub fn symbol(&self) -> &'static str {
    match self {
      UnaryOp::Neg => "-",
      UnaryOp::Not => "!",
    }
  }
}
