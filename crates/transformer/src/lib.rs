#![deny(clippy::all)]

mod collector;
mod replacer;
mod transformer;

pub use transformer::*;
