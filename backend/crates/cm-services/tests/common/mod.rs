#![allow(dead_code)]

mod fixtures;
mod test_context;

pub use fixtures::*;
pub use test_context::*;
