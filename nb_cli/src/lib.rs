//! Internal modules for the bracket terminal front end.
//!
//! This library provides flag parsing, command parsing, text rendering and
//! the editing session used by the nb_cli binary.

pub mod args;
pub mod commands;
pub mod render;
pub mod session;
