//! C-style code generation for Twig.
//!
//! Renders the target tree as call expressions: `add(2, subtract(4, 2))`.

mod codegen;
mod config;

pub use codegen::{GenError, generate, generate_with};
pub use config::{CodegenConfig, ConfigError};

#[cfg(test)]
mod tests;
