mod core;

pub use crate::core::*;
