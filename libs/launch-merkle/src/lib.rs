#![no_std]

pub mod hash;
pub mod proof;
pub mod tree;

pub use hash::*;
pub use proof::*;
pub use tree::*;
