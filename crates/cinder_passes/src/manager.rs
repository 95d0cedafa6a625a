use cinder_config::{CinderConfig, DebugTrace};
use cinder_ir::Module;
use cinder_log::{log_dbg, phase_log, trace_dbg};

use crate::pass::{FunctionPass, PassError};
use crate::registry::PassRegistry;

/// Runs a pipeline of function passes over a module.
pub struct PassManager {
  passes: Vec<Box<dyn FunctionPass>>,
}

/// A pipeline named a pass the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPass(pub String);

impl std::fmt::Display for UnknownPass {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "unknown pass '{}'", self.0)
  }
}

impl std::error::Error for UnknownPass {}

impl PassManager {
  pub fn new() -> Self {
    Self { passes: Vec::new() }
  }

  /// Build a manager from pipeline names, resolved against an explicit
  /// registry.
  pub fn from_names(
    registry: &PassRegistry,
    names: &[&str],
  ) -> Result<Self, UnknownPass> {
    let mut passes = Vec::with_capacity(names.len());

    for name in names {
      let pass = registry
        .create(name)
        .ok_or_else(|| UnknownPass(name.to_string()))?;
      passes.push(pass);
    }

    Ok(Self { passes })
  }

  pub fn add_pass(
    &mut self,
    pass: Box<dyn FunctionPass>,
  ) {
    self.passes.push(pass);
  }

  /// Run every pass over every function of the module, in pipeline
  /// order. Returns whether any function's CFG changed, the host's
  /// signal to invalidate cached analyses.
  pub fn run(
    &mut self,
    module: &mut Module,
    config: &CinderConfig,
  ) -> Result<bool, PassError> {
    let mut changed = false;

    phase_log!(config, "Running {} passes", self.passes.len());

    for pass in &mut self.passes {
      for func in &mut module.functions {
        let pass_changed = pass.run(func)?;
        trace_dbg!(
          config,
          DebugTrace::Passes,
          "{} on {}: changed={}",
          pass.name(),
          func.name,
          pass_changed
        );
        changed |= pass_changed;
      }
    }

    log_dbg!(config, "pipeline done, changed={}", changed);

    Ok(changed)
  }
}

impl Default for PassManager {
  fn default() -> Self {
    Self::new()
  }
}

// `dyn FunctionPass` has no `Debug`, so list the pipeline by name.
impl std::fmt::Debug for PassManager {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    let names: Vec<_> = self.passes.iter().map(|pass| pass.name()).collect();
    f.debug_struct("PassManager").field("passes", &names).finish()
  }
}
