//! CLI module for ragsearch
//!
//! Handles command-line argument parsing; the enhancement flag is decoded
//! from its textual form exactly once here.

pub mod args;

pub use args::{parse_bool_flag, Args, Commands};
