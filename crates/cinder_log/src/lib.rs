//! Logging utilities for the Cinder IR toolkit.
//!
//! Provides macros for:
//! - Phase logging (`phase_log!`)
//! - Debug traces by component (`trace_dbg!`)
//! - Verbose logging (`log_dbg!`)
//!
//! All output goes to stderr to avoid mixing with IR dumps on stdout.

use cinder_config::{CinderConfig, DebugTrace};

pub fn effective_verbose(config: &CinderConfig) -> u8 {
  if config.quiet {
    return 0;
  }

  if config.debug && config.verbose < 2 {
    return 2;
  }

  config.verbose
}

pub fn log_phase(config: &CinderConfig) -> bool {
  !config.quiet
}

pub fn log_info(config: &CinderConfig) -> bool {
  effective_verbose(config) >= 1
}

pub fn log_debug(config: &CinderConfig) -> bool {
  effective_verbose(config) >= 2
}

pub fn debug_trace_enabled(
  config: &CinderConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

/// Returns lowercase name of a DebugTrace variant for log output.
pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Ir => "ir",
    DebugTrace::Passes => "passes",
    DebugTrace::Verify => "verify",
  }
}

/// Log a phase message with an arrow prefix.
///
/// # Examples
///
/// ```ignore
/// phase_log!(&config, "Running {} passes", count);
/// ```
#[macro_export]
macro_rules! phase_log {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!("{} {}", "-->".bright_green().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a debug trace for a specific component.
///
/// Output format: `debug[component]: message`
///
/// # Examples
///
/// ```ignore
/// trace_dbg!(&config, DebugTrace::Passes, "{}: changed={}", name, changed);
/// // Output: debug[passes]: merge-return: changed=true
/// ```
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      eprintln!(
        "debug[{}]: {}",
        $crate::trace_name($trace),
        format!($fmt $(, $arg)*)
      );
    }
  }};
}

/// Log a verbose debug message (verbosity >= 2).
#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quiet_silences_everything() {
    let config = CinderConfig {
      quiet: true,
      verbose: 3,
      debug: true,
      ..CinderConfig::default()
    };

    assert_eq!(effective_verbose(&config), 0);
    assert!(!log_phase(&config));
    assert!(!debug_trace_enabled(&config, DebugTrace::Passes));
  }

  #[test]
  fn debug_raises_verbosity() {
    let config = CinderConfig {
      debug: true,
      ..CinderConfig::default()
    };

    assert_eq!(effective_verbose(&config), 2);
    assert!(log_debug(&config));
  }

  #[test]
  fn trace_is_enabled_per_component() {
    let config = CinderConfig {
      debug_trace: vec![DebugTrace::Passes],
      ..CinderConfig::default()
    };

    assert!(debug_trace_enabled(&config, DebugTrace::Passes));
    assert!(!debug_trace_enabled(&config, DebugTrace::Verify));
  }

  #[test]
  fn trace_names_are_lowercase() {
    assert_eq!(trace_name(DebugTrace::Ir), "ir");
    assert_eq!(trace_name(DebugTrace::Passes), "passes");
    assert_eq!(trace_name(DebugTrace::Verify), "verify");
  }
}
