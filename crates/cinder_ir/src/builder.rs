use crate::{Block, BlockId, Function, Instr, Store, TempData, TempId, Terminator, Type};

/// Builder for constructing a single function's CFG.
pub struct FunctionBuilder {
  name: String,
  params: Vec<TempId>,
  return_type: Type,

  temps: Store<TempData>,
  blocks: Store<Block>,

  /// Currently active block being built.
  current_block: Option<BlockId>,

  /// Counter for generating unique block labels.
  block_counter: u32,
}

impl FunctionBuilder {
  pub fn new(
    name: &str,
    param_types: &[Type],
    return_type: Type,
  ) -> Self {
    let mut builder = Self {
      name: name.to_string(),
      params: Vec::new(),
      return_type,
      temps: Store::new(),
      blocks: Store::new(),
      current_block: None,
      block_counter: 0,
    };

    // Parameters occupy the first temp ids, in order.
    for &ty in param_types {
      let temp = builder.temps.alloc(TempData { ty });
      builder.params.push(temp);
    }

    // Create entry block
    let entry = builder.create_block("entry");
    builder.switch_to_block(entry);

    builder
  }

  /// Create a new basic block with a label.
  pub fn create_block(
    &mut self,
    prefix: &str,
  ) -> BlockId {
    let label = format!("{}_{}", prefix, self.block_counter);
    self.block_counter += 1;
    self.blocks.alloc(Block::new(label))
  }

  /// Switch to building a different block.
  pub fn switch_to_block(
    &mut self,
    block: BlockId,
  ) {
    self.current_block = Some(block);
  }

  /// Get the current block ID.
  pub fn current_block(&self) -> BlockId {
    self.current_block.expect("no current block")
  }

  /// Parameter temps, in declaration order.
  pub fn params(&self) -> &[TempId] {
    &self.params
  }

  /// Allocate a new temporary.
  pub fn alloc_temp(
    &mut self,
    ty: Type,
  ) -> TempId {
    self.temps.alloc(TempData { ty })
  }

  /// Get the type of a temporary.
  pub fn temp_type(
    &self,
    temp: TempId,
  ) -> Type {
    self.temps.get(&temp).ty
  }

  /// Get the return type.
  pub fn return_type(&self) -> Type {
    self.return_type
  }

  /// Emit an instruction to the current block.
  pub fn emit(
    &mut self,
    instr: Instr,
  ) {
    let block = self.blocks.get_mut(&self.current_block());
    block.instructions.push(instr);
  }

  /// Set the terminator for the current block.
  pub fn terminate(
    &mut self,
    term: Terminator,
  ) {
    let block = self.blocks.get_mut(&self.current_block());
    block.terminator = Some(term);
  }

  /// Check if the current block is terminated.
  pub fn is_terminated(&self) -> bool {
    let block = self.blocks.get(&self.current_block());
    block.terminator.is_some()
  }

  /// Finish building and return the completed function.
  pub fn finish(self) -> Function {
    Function {
      name: self.name,
      params: self.params,
      return_type: self.return_type,
      temps: self.temps,
      blocks: self.blocks,
      entry_block: BlockId::new(0), // Entry is always first
    }
  }
}
