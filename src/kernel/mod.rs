//! Engine Adapter
//!
//! Locates the bundled constituency parser and turns caller options into
//! an engine command line. Nothing in this module spawns a process.

pub mod adapter;
pub mod invocation;
pub mod options;

pub use adapter::{KernelAdapter, DEFAULT_ARCHIVE, DEFAULT_RUNTIME, DEFAULT_SERVER_PORT};
pub use invocation::Invocation;
pub use options::{CommandOptions, Language, TEST_FLAG};
