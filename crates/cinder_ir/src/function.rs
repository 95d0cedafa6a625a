use std::collections::HashMap;

use crate::{Block, BlockId, Store, TempId, Type};

/// Metadata for a temporary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempData {
  /// Type of the temporary value.
  pub ty: Type,
}

/// A single function in IR form: an ordered collection of basic blocks
/// forming a CFG, plus the temps its instructions define.
#[derive(Debug, Clone)]
pub struct Function {
  /// Symbol name.
  pub name: String,
  /// Parameter temps, in order. Parameters occupy the first temp ids.
  pub params: Vec<TempId>,
  /// Return type.
  pub return_type: Type,
  /// Temporary values (SSA-like).
  pub temps: Store<TempData>,
  /// Basic blocks forming the CFG, in allocation order.
  pub blocks: Store<Block>,
  /// Entry block ID.
  pub entry_block: BlockId,
}

impl Function {
  pub fn temp_type(
    &self,
    temp: TempId,
  ) -> Type {
    self.temps.get(&temp).ty
  }

  /// Allocate a fresh temporary of the given type.
  pub fn add_temp(
    &mut self,
    ty: Type,
  ) -> TempId {
    self.temps.alloc(TempData { ty })
  }

  /// Append a new empty block with a collision-free label.
  ///
  /// Labels are `prefix_N` where `N` is the block count so far; blocks
  /// are never removed, so the suffix is unique within the function.
  pub fn add_block(
    &mut self,
    prefix: &str,
  ) -> BlockId {
    let label = format!("{}_{}", prefix, self.blocks.len());
    self.blocks.alloc(Block::new(label))
  }

  /// Predecessor relation of the CFG, computed from the terminators.
  ///
  /// Edges live in terminators only; redirecting an edge is a single
  /// terminator update and this map is rebuilt on demand. Blocks without
  /// in-edges (e.g. the entry block) have no entry in the map.
  pub fn predecessor_map(&self) -> HashMap<BlockId, Vec<BlockId>> {
    let mut predecessors: HashMap<BlockId, Vec<BlockId>> = HashMap::new();

    for (id, block) in self.blocks.iter() {
      if let Some(terminator) = &block.terminator {
        for successor in terminator.successors() {
          predecessors.entry(successor).or_default().push(id);
        }
      }
    }

    predecessors
  }

  /// Number of in-edges of a block.
  pub fn in_degree(
    &self,
    block: BlockId,
  ) -> usize {
    self
      .predecessor_map()
      .get(&block)
      .map_or(0, |predecessors| predecessors.len())
  }
}
