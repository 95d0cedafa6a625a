use cinder_ir::{BlockId, Function, Instr, Operand, Terminator};

use crate::pass::{FunctionPass, PassError};

/// Rewrites a function so it has at most one `Return`-terminated block
/// and at most one `Unreachable`-terminated block.
///
/// Every former exit block keeps its instructions and jumps into a fresh
/// common block instead of exiting itself. For a non-void function the
/// common return block starts with a phi collecting each former return
/// site's value, so every execution path still produces the value it
/// produced before. Blocks ending in any other terminator are untouched,
/// and a function that is already canonical is reported unchanged.
pub struct MergeReturnPass;

/// Exit blocks of a function, partitioned by terminator kind, in block
/// order.
struct ExitBlocks {
  return_blocks: Vec<BlockId>,
  unreachable_blocks: Vec<BlockId>,
}

/// Inspect each block's terminator exactly once. A block with no
/// terminator means the input function is malformed.
fn collect_exit_blocks(func: &Function) -> Result<ExitBlocks, PassError> {
  let mut return_blocks = Vec::new();
  let mut unreachable_blocks = Vec::new();

  for (id, block) in func.blocks.iter() {
    let Some(terminator) = &block.terminator else {
      return Err(PassError::MissingTerminator {
        function: func.name.clone(),
        block: block.label.clone(),
      });
    };

    match terminator {
      Terminator::Return(_) => return_blocks.push(id),
      Terminator::Unreachable => unreachable_blocks.push(id),
      Terminator::Goto(_) | Terminator::Branch { .. } => {},
    }
  }

  Ok(ExitBlocks {
    return_blocks,
    unreachable_blocks,
  })
}

/// Read every return block's operand before anything is rewritten, so a
/// malformed function is never left half-mutated. For a void function
/// the result stays empty.
fn collect_return_values(
  func: &Function,
  return_blocks: &[BlockId],
) -> Result<Vec<(BlockId, Operand)>, PassError> {
  let mut incoming = Vec::with_capacity(return_blocks.len());

  if func.return_type.is_void() {
    return Ok(incoming);
  }

  for &block in return_blocks {
    match &func.blocks.get(&block).terminator {
      Some(Terminator::Return(Some(value))) => incoming.push((block, value.clone())),
      Some(Terminator::Return(None)) => {
        return Err(PassError::MissingReturnValue {
          function: func.name.clone(),
          block: func.blocks.get(&block).label.clone(),
          expected: func.return_type,
        });
      },
      _ => unreachable!("classifier only collects return-terminated blocks"),
    }
  }

  Ok(incoming)
}

/// Redirect every unreachable block into one fresh block that traps for
/// all of them.
fn merge_unreachable_blocks(
  func: &mut Function,
  unreachable_blocks: &[BlockId],
) {
  let common = func.add_block("common_unreachable");
  func.blocks.get_mut(&common).terminator = Some(Terminator::Unreachable);

  for &block in unreachable_blocks {
    func.blocks.get_mut(&block).terminator = Some(Terminator::Goto(common));
  }
}

/// Redirect every return block into one fresh block holding the single
/// remaining `Return`. `incoming` carries each former return site's
/// value; it is empty exactly when the function is void.
fn merge_return_blocks(
  func: &mut Function,
  return_blocks: &[BlockId],
  incoming: Vec<(BlockId, Operand)>,
) {
  let common = func.add_block("common_return");

  if func.return_type.is_void() {
    func.blocks.get_mut(&common).terminator = Some(Terminator::Return(None));
  } else {
    let dest = func.add_temp(func.return_type);
    let common_block = func.blocks.get_mut(&common);
    common_block.instructions.push(Instr::Phi { dest, incoming });
    common_block.terminator = Some(Terminator::Return(Some(Operand::Temp(dest))));
  }

  for &block in return_blocks {
    func.blocks.get_mut(&block).terminator = Some(Terminator::Goto(common));
  }
}

impl FunctionPass for MergeReturnPass {
  fn name(&self) -> &'static str {
    "merge-return"
  }

  fn run(
    &mut self,
    func: &mut Function,
  ) -> Result<bool, PassError> {
    let exits = collect_exit_blocks(func)?;

    // Already canonical: nothing to allocate, nothing to invalidate.
    if exits.return_blocks.len() <= 1 && exits.unreachable_blocks.len() <= 1 {
      return Ok(false);
    }

    // Validate up front, before either merger touches the graph.
    let incoming = if exits.return_blocks.len() > 1 {
      collect_return_values(func, &exits.return_blocks)?
    } else {
      Vec::new()
    };

    if exits.unreachable_blocks.len() > 1 {
      merge_unreachable_blocks(func, &exits.unreachable_blocks);
    }

    if exits.return_blocks.len() > 1 {
      merge_return_blocks(func, &exits.return_blocks, incoming);
    }

    Ok(true)
  }
}
