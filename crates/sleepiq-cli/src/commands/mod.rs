//! Command implementations.

pub mod position;

pub use position::run_position;
