//! Shared configuration for the Cinder IR toolkit.
//!
//! The config is built by the host once and handed by reference to
//! logging and the pass manager; nothing in here is global state.

use serde::{Deserialize, Serialize};

/// Components that can emit debug traces independently of the global
/// verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugTrace {
  Ir,
  Passes,
  Verify,
}

/// Configuration consumed by logging and pass execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CinderConfig {
  /// Verbosity level: 0 = phases only, 1 = info, 2 = debug, 3 = trace.
  #[serde(default)]
  pub verbose: u8,

  /// Suppress all stderr output, including phase messages.
  #[serde(default)]
  pub quiet: bool,

  /// Enable every debug trace at once (implies verbosity >= 2).
  #[serde(default)]
  pub debug: bool,

  /// Individual debug traces to enable.
  #[serde(default)]
  pub debug_trace: Vec<DebugTrace>,
}

impl CinderConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Config that emits nothing, for embedding and tests.
  pub fn silent() -> Self {
    Self {
      quiet: true,
      ..Self::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_with_defaults() {
    let config: CinderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.verbose, 0);
    assert!(!config.quiet);
    assert!(config.debug_trace.is_empty());
  }

  #[test]
  fn deserializes_trace_names_lowercase() {
    let config: CinderConfig =
      serde_json::from_str(r#"{"verbose": 2, "debug_trace": ["passes", "verify"]}"#).unwrap();
    assert_eq!(config.verbose, 2);
    assert_eq!(config.debug_trace, vec![DebugTrace::Passes, DebugTrace::Verify]);
  }
}
