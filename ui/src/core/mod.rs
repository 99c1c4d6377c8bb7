//! Platform-facing helpers shared by the components.

pub mod effects;
pub mod storage;
