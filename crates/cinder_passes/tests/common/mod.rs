#![allow(dead_code)]

use cinder_ir::display::print_function;
use cinder_ir::{BinaryOp, ConstValue, Function, FunctionBuilder, Instr, Operand, Terminator, Type};

fn int(value: i64) -> Operand {
  Operand::Const(ConstValue::Int(value, Type::I32))
}

/// `fn pick(t0: i32): i32` with three blocks returning the constants
/// 1, 2 and 3 and no unreachable blocks.
pub fn three_way_return() -> Function {
  let mut builder = FunctionBuilder::new("pick", &[Type::I32], Type::I32);
  let param = builder.params()[0];

  let ret_one = builder.create_block("ret_one");
  let rest = builder.create_block("rest");
  let ret_two = builder.create_block("ret_two");
  let ret_three = builder.create_block("ret_three");

  let negative = builder.alloc_temp(Type::Bool);
  builder.emit(Instr::BinOp {
    dest: negative,
    op: BinaryOp::Lt,
    left: Operand::Temp(param),
    right: int(0),
  });
  builder.terminate(Terminator::Branch {
    condition: Operand::Temp(negative),
    then_block: ret_one,
    else_block: rest,
  });

  builder.switch_to_block(ret_one);
  builder.terminate(Terminator::Return(Some(int(1))));

  builder.switch_to_block(rest);
  let large = builder.alloc_temp(Type::Bool);
  builder.emit(Instr::BinOp {
    dest: large,
    op: BinaryOp::Gt,
    left: Operand::Temp(param),
    right: int(100),
  });
  builder.terminate(Terminator::Branch {
    condition: Operand::Temp(large),
    then_block: ret_two,
    else_block: ret_three,
  });

  builder.switch_to_block(ret_two);
  builder.terminate(Terminator::Return(Some(int(2))));

  builder.switch_to_block(ret_three);
  builder.terminate(Terminator::Return(Some(int(3))));

  builder.finish()
}

/// `fn halt(t0: bool): void` with two unreachable blocks and one return
/// block.
pub fn void_with_unreachables() -> Function {
  let mut builder = FunctionBuilder::new("halt", &[Type::Bool], Type::Void);
  let param = builder.params()[0];

  let trap_a = builder.create_block("trap_a");
  let rest = builder.create_block("rest");
  let trap_b = builder.create_block("trap_b");
  let done = builder.create_block("done");

  builder.terminate(Terminator::Branch {
    condition: Operand::Temp(param),
    then_block: trap_a,
    else_block: rest,
  });

  builder.switch_to_block(trap_a);
  builder.terminate(Terminator::Unreachable);

  builder.switch_to_block(rest);
  builder.terminate(Terminator::Branch {
    condition: Operand::Temp(param),
    then_block: trap_b,
    else_block: done,
  });

  builder.switch_to_block(trap_b);
  builder.terminate(Terminator::Unreachable);

  builder.switch_to_block(done);
  builder.terminate(Terminator::Return(None));

  builder.finish()
}

/// `fn id(t0: i32): i32` with a single return block and no unreachable
/// blocks: already canonical.
pub fn single_return() -> Function {
  let mut builder = FunctionBuilder::new("id", &[Type::I32], Type::I32);
  let param = builder.params()[0];
  builder.terminate(Terminator::Return(Some(Operand::Temp(param))));
  builder.finish()
}

/// Format a function for stable comparison.
pub fn format_function(func: &Function) -> String {
  print_function(func)
}
