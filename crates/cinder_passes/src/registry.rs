use std::collections::HashMap;

use crate::merge_return::MergeReturnPass;
use crate::pass::FunctionPass;

/// Factory producing a fresh instance of a registered pass.
pub type PassFactory = fn() -> Box<dyn FunctionPass>;

/// Explicit mapping from pipeline name to pass constructor.
///
/// Populated by an explicit call ([`default_registry`] or
/// [`PassRegistry::register`]); there is no load-time registration side
/// effect anywhere in the crate.
#[derive(Default)]
pub struct PassRegistry {
  factories: HashMap<&'static str, PassFactory>,
}

impl PassRegistry {
  pub fn new() -> Self {
    Self {
      factories: HashMap::new(),
    }
  }

  pub fn register(
    &mut self,
    name: &'static str,
    factory: PassFactory,
  ) {
    self.factories.insert(name, factory);
  }

  /// Create a pass by its pipeline name.
  pub fn create(
    &self,
    name: &str,
  ) -> Option<Box<dyn FunctionPass>> {
    self.factories.get(name).map(|factory| factory())
  }

  /// Registered names, sorted for stable listings.
  pub fn names(&self) -> Vec<&'static str> {
    let mut names: Vec<_> = self.factories.keys().copied().collect();
    names.sort_unstable();
    names
  }
}

/// Registry with all built-in passes installed.
pub fn default_registry() -> PassRegistry {
  let mut registry = PassRegistry::new();
  registry.register("merge-return", || Box::new(MergeReturnPass));
  registry
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn creates_builtin_pass_by_name() {
    let registry = default_registry();

    let pass = registry.create("merge-return").unwrap();
    assert_eq!(pass.name(), "merge-return");
  }

  #[test]
  fn unknown_name_yields_none() {
    let registry = default_registry();
    assert!(registry.create("no-such-pass").is_none());
  }

  #[test]
  fn names_are_sorted() {
    let registry = default_registry();
    assert_eq!(registry.names(), vec!["merge-return"]);
  }
}
