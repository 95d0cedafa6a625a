use std::fmt::Write;

use crate::{Block, Function, Instr, Module, Terminator};

/// Pretty printer for IR functions and modules. The output is stable for
/// a given function and is what the golden tests snapshot.
pub struct IrPrinter<'a> {
  func: &'a Function,
  output: String,
}

impl<'a> IrPrinter<'a> {
  pub fn new(func: &'a Function) -> Self {
    Self {
      func,
      output: String::new(),
    }
  }

  pub fn print(mut self) -> String {
    let params: Vec<_> = self
      .func
      .params
      .iter()
      .map(|param| format!("t{}: {}", param.index(), self.func.temp_type(*param)))
      .collect();

    writeln!(
      self.output,
      "fn {}({}): {} {{",
      self.func.name,
      params.join(", "),
      self.func.return_type
    )
    .unwrap();

    for block in self.func.blocks.get_all() {
      writeln!(self.output).unwrap();
      self.print_block(block);
    }

    writeln!(self.output, "}}\n").unwrap();

    self.output
  }

  fn print_block(
    &mut self,
    block: &Block,
  ) {
    writeln!(self.output, "  {}:", block.label).unwrap();

    for instr in &block.instructions {
      write!(self.output, "    ").unwrap();
      self.print_instr(instr);
    }

    write!(self.output, "    ").unwrap();
    match &block.terminator {
      Some(terminator) => self.print_terminator(terminator),
      None => writeln!(self.output, "<no terminator>").unwrap(),
    }
  }

  fn print_instr(
    &mut self,
    instr: &Instr,
  ) {
    match instr {
      Instr::Copy { dest, source } => {
        writeln!(self.output, "t{} = copy {}", dest.index(), source).unwrap();
      },
      Instr::BinOp {
        dest,
        op,
        left,
        right,
      } => {
        writeln!(self.output, "t{} = {} {} {}", dest.index(), left, op.symbol(), right).unwrap();
      },
      Instr::UnaryOp { dest, op, operand } => {
        writeln!(self.output, "t{} = {}{}", dest.index(), op.symbol(), operand).unwrap();
      },
      Instr::Call { dest, callee, args } => {
        let args: Vec<_> = args.iter().map(|arg| arg.to_string()).collect();
        match dest {
          Some(dest) => {
            writeln!(self.output, "t{} = call {}({})", dest.index(), callee, args.join(", ")).unwrap()
          },
          None => writeln!(self.output, "call {}({})", callee, args.join(", ")).unwrap(),
        }
      },
      Instr::Phi { dest, incoming } => {
        let pairs: Vec<_> = incoming
          .iter()
          .map(|(block, value)| format!("{}: {}", self.block_label(*block), value))
          .collect();
        writeln!(self.output, "t{} = phi [{}]", dest.index(), pairs.join(", ")).unwrap();
      },
      Instr::Nop => {
        writeln!(self.output, "nop").unwrap();
      },
    }
  }

  fn print_terminator(
    &mut self,
    terminator: &Terminator,
  ) {
    match terminator {
      Terminator::Goto(target) => {
        let target = self.block_label(*target);
        writeln!(self.output, "goto {}", target).unwrap();
      },
      Terminator::Branch {
        condition,
        then_block,
        else_block,
      } => {
        let then_label = self.block_label(*then_block);
        let else_label = self.block_label(*else_block);
        writeln!(self.output, "branch {}, {}, {}", condition, then_label, else_label).unwrap();
      },
      Terminator::Return(None) => {
        writeln!(self.output, "return").unwrap();
      },
      Terminator::Return(Some(value)) => {
        writeln!(self.output, "return {}", value).unwrap();
      },
      Terminator::Unreachable => {
        writeln!(self.output, "unreachable").unwrap();
      },
    }
  }

  fn block_label(
    &self,
    block: crate::BlockId,
  ) -> String {
    self.func.blocks.get(&block).label.clone()
  }
}

/// Format a single function for dumps and snapshots.
pub fn print_function(func: &Function) -> String {
  IrPrinter::new(func).print()
}

/// Format every function of a module, in definition order.
pub fn print_module(module: &Module) -> String {
  module.functions.iter().map(print_function).collect()
}
