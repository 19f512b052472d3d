//! Core rewriting — lookup tables, pure transforms, and the file layer.
//!
//! Nothing here prints except the one-shot wrappers in [`rewrite`], which
//! report skipped files on stdout.

pub mod error;
pub mod rewrite;
pub mod tables;
