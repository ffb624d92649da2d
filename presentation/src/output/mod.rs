//! Terminal output for the one-shot CLI commands

pub mod console;
