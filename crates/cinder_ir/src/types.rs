/// Value types the IR can carry.
///
/// Deliberately small: enough to type function signatures, constants and
/// temporaries. `Void` is only legal as a function return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
  Void,
  Bool,
  I32,
  I64,
  F64,
}

impl Type {
  pub fn is_void(&self) -> bool {
    matches!(self, Type::Void)
  }
}

impl std::fmt::Display for Type {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    let name = match self {
      Type::Void => "void",
      Type::Bool => "bool",
      Type::I32 => "i32",
      Type::I64 => "i64",
      Type::F64 => "f64",
    };
    write!(f, "{}", name)
  }
}
