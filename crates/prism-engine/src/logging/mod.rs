//! Logging utilities.
//!
//! Centralizes logger initialization over the standard `log` facade so the
//! demo binary and tests share one setup path.

mod init;

pub use init::{LoggingConfig, init_logging};
