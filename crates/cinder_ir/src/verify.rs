use std::collections::HashMap;

use crate::{Block, BlockId, Function, Instr, Operand, TempId, Terminator, Type};

/// Errors found during IR verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
  /// A block has no terminator set.
  MissingTerminator { function: String, block: String },

  /// Reference to a non-existent block.
  InvalidBlockRef {
    function: String,
    block: String,
    target: BlockId,
  },

  /// Reference to a non-existent temp.
  InvalidTempRef {
    function: String,
    block: String,
    temp: TempId,
  },

  /// Branch condition is not a boolean type.
  NonBoolBranchCondition {
    function: String,
    block: String,
    actual_type: Type,
  },

  /// Return value type doesn't match the function signature.
  ReturnTypeMismatch {
    function: String,
    block: String,
    expected: Type,
    actual: Type,
  },

  /// Missing return value when the function expects one.
  MissingReturnValue {
    function: String,
    block: String,
    expected: Type,
  },

  /// Unexpected return value when the function returns void.
  UnexpectedReturnValue { function: String, block: String },

  /// A phi is not the first instruction of its block.
  MisplacedPhi { function: String, block: String },

  /// Phi pair count differs from the in-degree of its block.
  PhiIncomingMismatch {
    function: String,
    block: String,
    incoming: usize,
    predecessors: usize,
  },

  /// Phi lists an incoming block that is not a predecessor.
  PhiForeignPredecessor {
    function: String,
    block: String,
    incoming: BlockId,
  },
}

/// IR verification result.
pub type VerifyResult = Result<(), Vec<VerifyError>>;

/// Verifier for a single function.
pub struct Verifier<'a> {
  func: &'a Function,
  predecessors: HashMap<BlockId, Vec<BlockId>>,
  errors: Vec<VerifyError>,
}

impl<'a> Verifier<'a> {
  pub fn new(func: &'a Function) -> Self {
    Self {
      func,
      predecessors: func.predecessor_map(),
      errors: Vec::new(),
    }
  }

  /// Verify the function.
  pub fn verify(mut self) -> VerifyResult {
    for (id, block) in self.func.blocks.iter() {
      self.verify_block(id, block);
    }

    if self.errors.is_empty() {
      Ok(())
    } else {
      Err(self.errors)
    }
  }

  fn verify_block(
    &mut self,
    id: BlockId,
    block: &Block,
  ) {
    for (position, instr) in block.instructions.iter().enumerate() {
      self.verify_instr(id, block, position, instr);
    }

    match &block.terminator {
      Some(terminator) => self.verify_terminator(block, terminator),
      None => {
        self.errors.push(VerifyError::MissingTerminator {
          function: self.func.name.clone(),
          block: block.label.clone(),
        });
      },
    }
  }

  fn verify_instr(
    &mut self,
    id: BlockId,
    block: &Block,
    position: usize,
    instr: &Instr,
  ) {
    if let Some(dest) = instr.dest() {
      self.check_temp_exists(block, dest);
    }

    match instr {
      Instr::Copy { source, .. } => {
        self.check_operand(block, source);
      },
      Instr::BinOp { left, right, .. } => {
        self.check_operand(block, left);
        self.check_operand(block, right);
      },
      Instr::UnaryOp { operand, .. } => {
        self.check_operand(block, operand);
      },
      Instr::Call { args, .. } => {
        for arg in args {
          self.check_operand(block, arg);
        }
      },
      Instr::Phi { incoming, .. } => {
        if position != 0 {
          self.errors.push(VerifyError::MisplacedPhi {
            function: self.func.name.clone(),
            block: block.label.clone(),
          });
        }
        self.verify_phi(id, block, incoming);
      },
      Instr::Nop => {},
    }
  }

  /// A complete phi has exactly one pair per in-edge, and every listed
  /// block really is a predecessor.
  fn verify_phi(
    &mut self,
    id: BlockId,
    block: &Block,
    incoming: &[(BlockId, Operand)],
  ) {
    let predecessors = self.predecessors.get(&id).cloned().unwrap_or_default();

    if incoming.len() != predecessors.len() {
      self.errors.push(VerifyError::PhiIncomingMismatch {
        function: self.func.name.clone(),
        block: block.label.clone(),
        incoming: incoming.len(),
        predecessors: predecessors.len(),
      });
    }

    for (source, value) in incoming {
      self.check_block_exists(block, *source);
      self.check_operand(block, value);

      if !predecessors.contains(source) {
        self.errors.push(VerifyError::PhiForeignPredecessor {
          function: self.func.name.clone(),
          block: block.label.clone(),
          incoming: *source,
        });
      }
    }
  }

  fn verify_terminator(
    &mut self,
    block: &Block,
    terminator: &Terminator,
  ) {
    match terminator {
      Terminator::Goto(target) => {
        self.check_block_exists(block, *target);
      },
      Terminator::Branch {
        condition,
        then_block,
        else_block,
      } => {
        self.check_operand(block, condition);
        self.check_block_exists(block, *then_block);
        self.check_block_exists(block, *else_block);

        if let Some(condition_ty) = self.operand_type(condition) {
          if condition_ty != Type::Bool {
            self.errors.push(VerifyError::NonBoolBranchCondition {
              function: self.func.name.clone(),
              block: block.label.clone(),
              actual_type: condition_ty,
            });
          }
        }
      },
      Terminator::Return(value) => {
        let expected = self.func.return_type;

        match value {
          Some(value) => {
            self.check_operand(block, value);

            if expected.is_void() {
              self.errors.push(VerifyError::UnexpectedReturnValue {
                function: self.func.name.clone(),
                block: block.label.clone(),
              });
            } else if let Some(actual) = self.operand_type(value) {
              if actual != expected {
                self.errors.push(VerifyError::ReturnTypeMismatch {
                  function: self.func.name.clone(),
                  block: block.label.clone(),
                  expected,
                  actual,
                });
              }
            }
          },
          None => {
            if !expected.is_void() {
              self.errors.push(VerifyError::MissingReturnValue {
                function: self.func.name.clone(),
                block: block.label.clone(),
                expected,
              });
            }
          },
        }
      },
      Terminator::Unreachable => {
        // Valid for diverging code paths
      },
    }
  }

  fn check_operand(
    &mut self,
    block: &Block,
    operand: &Operand,
  ) {
    if let Operand::Temp(temp) = operand {
      self.check_temp_exists(block, *temp);
    }
  }

  fn check_block_exists(
    &mut self,
    block: &Block,
    target: BlockId,
  ) {
    if target.index() >= self.func.blocks.len() as u32 {
      self.errors.push(VerifyError::InvalidBlockRef {
        function: self.func.name.clone(),
        block: block.label.clone(),
        target,
      });
    }
  }

  fn check_temp_exists(
    &mut self,
    block: &Block,
    temp: TempId,
  ) {
    if temp.index() >= self.func.temps.len() as u32 {
      self.errors.push(VerifyError::InvalidTempRef {
        function: self.func.name.clone(),
        block: block.label.clone(),
        temp,
      });
    }
  }

  fn operand_type(
    &self,
    operand: &Operand,
  ) -> Option<Type> {
    match operand {
      Operand::Temp(temp) => {
        if temp.index() < self.func.temps.len() as u32 {
          Some(self.func.temp_type(*temp))
        } else {
          None
        }
      },
      Operand::Const(value) => Some(value.ty()),
    }
  }
}

/// Verify a single function.
pub fn verify_function(func: &Function) -> VerifyResult {
  Verifier::new(func).verify()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ConstValue, FunctionBuilder, Instr, Operand, Terminator, Type};

  fn int(value: i64) -> Operand {
    Operand::Const(ConstValue::Int(value, Type::I32))
  }

  #[test]
  fn accepts_well_formed_function() {
    let mut builder = FunctionBuilder::new("f", &[Type::I32], Type::I32);
    let param = builder.params()[0];
    builder.terminate(Terminator::Return(Some(Operand::Temp(param))));

    assert_eq!(verify_function(&builder.finish()), Ok(()));
  }

  #[test]
  fn reports_missing_terminator() {
    let builder = FunctionBuilder::new("f", &[], Type::Void);
    let func = builder.finish();

    let errors = verify_function(&func).unwrap_err();
    assert_eq!(
      errors,
      vec![VerifyError::MissingTerminator {
        function: "f".to_string(),
        block: "entry_0".to_string(),
      }]
    );
  }

  #[test]
  fn reports_return_type_mismatch() {
    let mut builder = FunctionBuilder::new("f", &[], Type::I32);
    builder.terminate(Terminator::Return(Some(Operand::Const(ConstValue::Bool(true)))));

    let errors = verify_function(&builder.finish()).unwrap_err();
    assert!(matches!(errors[0], VerifyError::ReturnTypeMismatch { .. }));
  }

  #[test]
  fn reports_phi_arity_mismatch() {
    // entry branches to two blocks that both jump to a join; the join's
    // phi only lists one of them.
    let mut builder = FunctionBuilder::new("f", &[Type::Bool], Type::I32);
    let param = builder.params()[0];
    let left = builder.create_block("left");
    let right = builder.create_block("right");
    let join = builder.create_block("join");

    builder.terminate(Terminator::Branch {
      condition: Operand::Temp(param),
      then_block: left,
      else_block: right,
    });

    builder.switch_to_block(left);
    builder.terminate(Terminator::Goto(join));
    builder.switch_to_block(right);
    builder.terminate(Terminator::Goto(join));

    builder.switch_to_block(join);
    let dest = builder.alloc_temp(Type::I32);
    builder.emit(Instr::Phi {
      dest,
      incoming: vec![(left, int(1))],
    });
    builder.terminate(Terminator::Return(Some(Operand::Temp(dest))));

    let errors = verify_function(&builder.finish()).unwrap_err();
    assert!(errors.iter().any(|error| matches!(
      error,
      VerifyError::PhiIncomingMismatch {
        incoming: 1,
        predecessors: 2,
        ..
      }
    )));
  }

  #[test]
  fn reports_foreign_phi_predecessor() {
    // The phi claims a value from the entry block, which never jumps to
    // the join.
    let mut builder = FunctionBuilder::new("f", &[], Type::I32);
    let entry = builder.current_block();
    let pre = builder.create_block("pre");
    let join = builder.create_block("join");

    builder.terminate(Terminator::Goto(pre));
    builder.switch_to_block(pre);
    builder.terminate(Terminator::Goto(join));

    builder.switch_to_block(join);
    let dest = builder.alloc_temp(Type::I32);
    builder.emit(Instr::Phi {
      dest,
      incoming: vec![(entry, int(7))],
    });
    builder.terminate(Terminator::Return(Some(Operand::Temp(dest))));

    let errors = verify_function(&builder.finish()).unwrap_err();
    assert!(errors
      .iter()
      .any(|error| matches!(error, VerifyError::PhiForeignPredecessor { .. })));
  }
}
