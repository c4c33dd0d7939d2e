//! System ownership, startup wiring and logging setup.

pub mod retail_system;
pub mod tracing;

pub use retail_system::*;
pub use self::tracing::setup_tracing;
