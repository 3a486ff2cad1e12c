//! Logger bootstrap for hosts embedding the rasterizer.
//!
//! The core itself only emits trace-level diagnostics (culled draws, skipped
//! shader contexts); failures never log at error level.

mod init;

pub use init::{LoggingConfig, init_logging};
