//! A small CFG-based intermediate representation.
//!
//! Functions are ordered collections of basic blocks; every block ends in
//! exactly one [`Terminator`]. Blocks and temps live in append-only
//! [`Store`] arenas and are addressed by typed ids, so transforms can
//! rewrite edges by replacing terminators without any pointer fixups.

pub mod block;
pub mod builder;
pub mod display;
pub mod function;
pub mod instr;
pub mod module;
pub mod operand;
pub mod store;
pub mod types;
pub mod verify;

pub use block::{Block, Terminator};
pub use builder::FunctionBuilder;
pub use function::{Function, TempData};
pub use instr::{BinaryOp, Instr, UnaryOp};
pub use module::Module;
pub use operand::{ConstValue, Operand};
pub use store::{Id, Store};
pub use types::Type;
pub use verify::{VerifyError, verify_function};

/// Unique identifier for a temporary value within a function.
pub type TempId = Id<TempData>;

/// Unique identifier for a basic block within a function.
pub type BlockId = Id<Block>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_hands_out_sequential_ids() {
    let mut store: Store<TempData> = Store::new();

    let a = store.alloc(TempData { ty: Type::I32 });
    let b = store.alloc(TempData { ty: Type::Bool });

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(store.get(&b).ty, Type::Bool);
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn terminator_successors() {
    let target = BlockId::new(1);
    assert_eq!(Terminator::Goto(target).successors(), vec![target]);

    let branch = Terminator::Branch {
      condition: Operand::Const(ConstValue::Bool(true)),
      then_block: BlockId::new(2),
      else_block: BlockId::new(3),
    };
    assert_eq!(branch.successors(), vec![BlockId::new(2), BlockId::new(3)]);

    assert_eq!(Terminator::Return(None).successors(), Vec::<BlockId>::new());
    assert_eq!(Terminator::Unreachable.successors(), Vec::<BlockId>::new());
  }

  #[test]
  fn predecessor_map_tracks_edges() {
    let mut builder = FunctionBuilder::new("f", &[Type::Bool], Type::Void);
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
    builder.terminate(Terminator::Return(None));

    let func = builder.finish();
    let predecessors = func.predecessor_map();

    assert_eq!(predecessors[&join], vec![left, right]);
    assert_eq!(func.in_degree(join), 2);
    assert_eq!(func.in_degree(func.entry_block), 0);
  }
}
