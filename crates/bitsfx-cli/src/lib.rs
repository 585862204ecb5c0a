//! bitsfx CLI library.
//!
//! Command implementations behind the `bitsfx` binary: listing the parameter
//! catalog, writing default parameter files, and rendering parameter files.

pub mod commands;
