use crate::{BlockId, Instr, Operand};

/// A basic block: a sequence of instructions ending with a terminator.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
  /// Unique label for this block (for debugging and dumps).
  pub label: String,
  /// Instructions in this block (executed sequentially).
  pub instructions: Vec<Instr>,
  /// How this block exits. `None` only while the block is under
  /// construction; every block of a finished function must be terminated.
  pub terminator: Option<Terminator>,
}

impl Block {
  pub fn new(label: String) -> Self {
    Self {
      label,
      instructions: Vec::new(),
      terminator: None,
    }
  }
}

/// Block terminator: how control exits a basic block.
#[derive(Debug, Clone, PartialEq)]
pub enum Terminator {
  /// Unconditional jump to a target block.
  Goto(BlockId),

  /// Conditional branch: if condition is true, go to then_block, else else_block.
  Branch {
    condition: Operand,
    then_block: BlockId,
    else_block: BlockId,
  },

  /// Return from the function with an optional value.
  Return(Option<Operand>),

  /// Diverging trap; control never leaves this block.
  Unreachable,
}

impl Terminator {
  /// Out-edges of a block ending in this terminator. Together with
  /// [`crate::Function::predecessor_map`] this keeps the edge relation
  /// derivable from terminators alone, with no stored back-pointers.
  pub fn successors(&self) -> Vec<BlockId> {
    match self {
      Terminator::Goto(target) => vec![*target],
      Terminator::Branch {
        then_block,
        else_block,
        ..
      } => vec![*then_block, *else_block],
      Terminator::Return(_) | Terminator::Unreachable => Vec::new(),
    }
  }
}
