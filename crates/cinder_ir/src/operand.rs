use crate::{TempId, Type};

/// An operand: a value read by an instruction or terminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
  /// A temporary value (result of a previous instruction or a parameter).
  Temp(TempId),
  /// A constant/literal value.
  Const(ConstValue),
}

/// Compile-time constant values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
  Int(i64, Type),
  Float(ordered_float::OrderedFloat<f64>, Type),
  Bool(bool),
}

impl ConstValue {
  /// Returns the type of this constant value.
  pub fn ty(&self) -> Type {
    match self {
      ConstValue::Int(_, ty) => *ty,
      ConstValue::Float(_, ty) => *ty,
      ConstValue::Bool(_) => Type::Bool,
    }
  }
}

impl std::fmt::Display for Operand {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      Operand::Temp(temp) => write!(f, "t{}", temp.index()),
      Operand::Const(value) => write!(f, "{}", value),
    }
  }
}

impl std::fmt::Display for ConstValue {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      ConstValue::Int(value, ty) => write!(f, "{}{}", value, ty),
      ConstValue::Float(value, ty) => write!(f, "{}{}", value, ty),
      ConstValue::Bool(value) => write!(f, "{}", value),
    }
  }
}
