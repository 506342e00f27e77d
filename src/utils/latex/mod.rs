// external LaTeX build invocation

pub mod config;
pub mod runner;

pub use config::BuildConfig;
pub use runner::{BuildOutcome, LatexBuilder, tail_chars};
