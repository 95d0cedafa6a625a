use cinder_ir::{Function, Type};

/// A transform over a single function's CFG.
///
/// A pass has exclusive mutable access to the function for the whole
/// call. On error it must leave the function exactly as it found it;
/// a partially rewritten graph is never a valid outcome.
pub trait FunctionPass {
  /// Stable name usable in a textual pipeline description.
  fn name(&self) -> &'static str;

  /// Run the pass. `Ok(true)` means the CFG changed and any analyses the
  /// host cached about this function must be invalidated.
  fn run(
    &mut self,
    func: &mut Function,
  ) -> Result<bool, PassError>;
}

/// Fatal contract violations found while transforming a function.
///
/// These mean the input function was malformed upstream. They are caller
/// contract violations, not recoverable runtime conditions, so there is
/// no retry path; the pass aborts without mutating the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassError {
  /// A block has no terminator set.
  MissingTerminator { function: String, block: String },

  /// A return block carries no value although the function is non-void.
  MissingReturnValue {
    function: String,
    block: String,
    expected: Type,
  },
}

impl std::fmt::Display for PassError {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    match self {
      PassError::MissingTerminator { function, block } => {
        write!(f, "block '{}' in function '{}' has no terminator", block, function)
      },
      PassError::MissingReturnValue {
        function,
        block,
        expected,
      } => {
        write!(
          f,
          "return in block '{}' of function '{}' carries no value (expected {})",
          block, function, expected
        )
      },
    }
  }
}

impl std::error::Error for PassError {}
