//! Build orchestration: request, compiler invocation, and the orchestrator
//! that runs discovery, compilation, and execution in sequence

/// Parsed, immutable build request
mod request;
pub use request::*;

/// Compiler invocation assembly
mod invocation;
pub use invocation::*;

/// Build orchestrator
mod orchestrator;
pub use orchestrator::*;
