//! Inbound adapters that translate user input into domain calls.
//!
//! The command-line front-end lives under [`cli`]; it owns argument parsing
//! and rendering and leaves every decision to the domain.

pub mod cli;
