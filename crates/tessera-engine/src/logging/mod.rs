//! Logging utilities.
//!
//! Renderers only talk to the `log` facade; this module wires `env_logger`
//! behind it for binaries and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
