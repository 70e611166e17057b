//! Brute-force tautology checking for propositional logic.
//!
//! A formula written in conventional notation (`(P ^ Q) -> Q`) is tokenized,
//! parsed into an explicit syntax tree, and evaluated under every truth
//! assignment over its variables. [`check`] is the single entry point
//! collaborators need; the individual stages are public for tests and
//! tooling.

pub mod ast;
pub mod error;
pub mod evaluate;
pub mod lexer;
pub mod parser;
pub mod validity;

pub use validity::{check, Verdict};
