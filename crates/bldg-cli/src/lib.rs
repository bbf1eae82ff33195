//! Library surface of the `bldg` CLI.
//!
//! Only the logging setup is exposed here, so tests and embedding tools
//! can initialize the same subscriber configuration as the binary.

pub mod logging;
