#![cfg_attr(not(feature = "std"), no_std)]

pub mod fletcher;
#[cfg(feature = "std")]
pub mod input;
pub mod report;

pub use fletcher::{checksum, fletcher16};
pub use report::Report;

/// File checksummed by the `fletcher` executable, relative to the working directory.
pub static INPUT_PATH: &str = "GameTheory.pdf";

pub static INPUT_LITERAL: &str = "abcde";
