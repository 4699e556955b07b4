//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used by the
//! command line shell and the protocol engine.
//!
//! # Utilities
//!
//! - Logging setup (`fern` + `log`)
//! - Hex encoding/decoding of 20-byte identifiers
//!
//! # Data Structures
//!
//! - `CustomError` - Plain message error used by the shell

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
