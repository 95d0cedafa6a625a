//! Function-level CFG transforms and the surface a host uses to run them.
//!
//! Passes are created through an explicit [`PassRegistry`] (no load-time
//! registration side effects) and executed by a [`PassManager`], which
//! reports whether any function's CFG changed so the host knows to
//! invalidate cached analyses.

pub mod manager;
pub mod merge_return;
pub mod pass;
pub mod registry;

pub use manager::{PassManager, UnknownPass};
pub use merge_return::MergeReturnPass;
pub use pass::{FunctionPass, PassError};
pub use registry::{PassRegistry, default_registry};
