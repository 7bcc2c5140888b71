//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply overrides → Validate
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger_on_signal → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → ShutdownSignal resolves → HttpServer stops accepting → in-flight requests drain → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The project collection lives exactly as long as the process

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use signals::wait_for_signal;
pub use startup::resolve_config;
