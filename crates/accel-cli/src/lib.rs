//! accelcfg command-line front end.
//!
//! The binary in `main.rs` parses arguments and dispatches to [`commands`].

pub mod commands;
