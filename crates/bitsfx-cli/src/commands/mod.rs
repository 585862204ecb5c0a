//! CLI command implementations

pub mod defaults;
pub mod json_output;
pub mod params;
pub mod render;
