use crate::Function;

/// A compilation unit: an ordered collection of functions.
#[derive(Debug, Clone, Default)]
pub struct Module {
  pub functions: Vec<Function>,
}

impl Module {
  pub fn new() -> Self {
    Self {
      functions: Vec::new(),
    }
  }

  pub fn add_function(
    &mut self,
    func: Function,
  ) {
    self.functions.push(func);
  }

  pub fn get_function(
    &self,
    name: &str,
  ) -> Option<&Function> {
    self.functions.iter().find(|func| func.name == name)
  }
}
