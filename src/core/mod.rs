//! Shared plumbing: logging and vector math.

pub mod log;
pub mod math;
