//! CLI library components for the intake form checker.

pub mod logging;
pub mod render;
pub mod run;
