//! Shared building blocks for the advertising workspace.
//! - `utils::logging`: tracing subscriber setup used by every binary.
//! - `types`: the status envelope returned by the HTTP layer.

pub mod types;
pub mod utils;
