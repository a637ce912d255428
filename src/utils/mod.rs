//! Utility modules

pub mod error;
pub mod input;

pub use error::{BenchError, Result};
pub use input::{prompt, prompt_or_default};
