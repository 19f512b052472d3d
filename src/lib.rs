//! Dashboard branding pass.
//!
//! Swaps emoji in the dashboard HTML/JS for SVG icons or plain symbols and
//! rewrites fixed `border-radius` pixel values in the stylesheet to radius
//! tier variables.

pub mod config;
pub mod core;
pub mod run;
