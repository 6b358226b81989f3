#![allow(dead_code)]

// Common test utilities

pub mod harness;
pub mod stub_upstream;

pub use harness::*;
pub use stub_upstream::*;
